//! Keypad scanning and the composer state machine
//!
//! The keypad task turns matrix scans into debounced key presses; the
//! composer task runs the input state machine and translates its actions
//! into screen updates and radio work.

use defmt::*;
use embassy_time::Instant;

use taplink_core::{Action, Composer, TimingConfig};
use taplink_display::Screen;

use crate::channels::{TxCommand, KEY_CHANNEL, SCREEN, TX_CHANNEL};
use crate::keypad::MatrixKeypad;

/// Keypad scan task - publishes debounced press edges
#[embassy_executor::task]
pub async fn keypad_task(mut keypad: MatrixKeypad<'static>) {
    info!("Keypad task started");

    loop {
        if let Some(key) = keypad.poll().await {
            debug!("Key pressed: {}", key.to_char());
            // Drop presses if the composer is backed up
            if KEY_CHANNEL.try_send(key).is_err() {
                warn!("Key channel full, dropping press");
            }
        }
    }
}

/// Composer task - drives the input state machine
#[embassy_executor::task]
pub async fn composer_task() {
    info!("Composer task started");

    let mut composer = Composer::new(TimingConfig::default());
    SCREEN.signal(Screen::Ready);

    loop {
        let key = KEY_CHANNEL.receive().await;
        let now_ms = Instant::now().as_millis();

        match composer.key_press(key, now_ms) {
            Action::Status => {
                SCREEN.signal(Screen::Status {
                    numeric_mode: composer.numeric_mode(),
                    text: composer.buffer().display_text(),
                });
            }
            Action::Ready => {
                SCREEN.signal(Screen::Ready);
            }
            Action::Transmit(message) => {
                debug!("Committing {} chars", message.len());
                TX_CHANNEL.send(TxCommand::Message(message)).await;
                SCREEN.signal(Screen::Ready);
            }
            Action::BroadcastReset => {
                debug!("Broadcasting reset");
                TX_CHANNEL.send(TxCommand::Reset).await;
                SCREEN.signal(Screen::Ready);
            }
        }
    }
}
