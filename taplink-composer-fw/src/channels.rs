//! Inter-task communication channels
//!
//! Static embassy-sync primitives connecting the keypad scanner, the
//! composer state machine, the radio transmitter and the display.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use taplink_core::Key;
use taplink_display::Screen;
use taplink_protocol::MessageBuffer;

/// Channel capacity for debounced key presses
const KEY_CHANNEL_SIZE: usize = 8;

/// Channel capacity for outgoing radio commands
const TX_CHANNEL_SIZE: usize = 4;

/// A unit of work for the radio transmitter
#[derive(Debug, Clone)]
pub enum TxCommand {
    /// Stream the message bytes followed by the end-of-message marker
    Message(MessageBuffer),
    /// Emit the single reset marker byte
    Reset,
}

/// Debounced key presses from the matrix scanner
pub static KEY_CHANNEL: Channel<CriticalSectionRawMutex, Key, KEY_CHANNEL_SIZE> = Channel::new();

/// Outgoing radio work from the composer
pub static TX_CHANNEL: Channel<CriticalSectionRawMutex, TxCommand, TX_CHANNEL_SIZE> =
    Channel::new();

/// Latest requested screen (newer requests replace unrendered ones)
pub static SCREEN: Signal<CriticalSectionRawMutex, Screen> = Signal::new();
