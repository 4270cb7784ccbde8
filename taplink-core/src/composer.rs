//! Composer input state machine
//!
//! Converts keypad presses into an editable message buffer: multi-tap
//! letter entry on digits 2-9, numeric/text mode toggling on a double `0`
//! press, shortcut expansion and transmission on `#`, local (and optionally
//! broadcast) reset on `*`.
//!
//! The machine is clock-agnostic: every press carries the current monotonic
//! time in milliseconds. Double-press and multi-tap windows are the only
//! timing-sensitive logic. Overflow of the 20-character buffer is silent
//! policy, not an error.

use taplink_protocol::MessageBuffer;

use crate::config::TimingConfig;
use crate::keys::Key;
use crate::shortcuts;

/// Side effect requested by a key press
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Redraw the status screen (entry mode + current buffer)
    Status,
    /// Show the ready screen (buffer was cleared)
    Ready,
    /// Transmit the carried message followed by the end-of-message marker,
    /// then show the ready screen. The composer buffer is already cleared.
    Transmit(MessageBuffer),
    /// Broadcast the reset marker to the peer, then show the ready screen.
    /// Local state is already cleared.
    BroadcastReset,
}

/// Multi-tap cycle state
///
/// Valid only while `last_key` is set and the elapsed time since
/// `last_tap_ms` is inside the multi-tap window; expiry is detected lazily
/// on the next press. Any press other than a same-key continuation
/// invalidates the cycle.
#[derive(Debug, Clone, Copy, Default)]
struct MultiTap {
    last_key: Option<Key>,
    tap_index: usize,
    last_tap_ms: u64,
}

impl MultiTap {
    fn clear(&mut self) {
        self.last_key = None;
        self.tap_index = 0;
    }
}

/// The composer-side input state machine
#[derive(Debug, Clone, Default)]
pub struct Composer {
    buffer: MessageBuffer,
    multi_tap: MultiTap,
    numeric_mode: bool,
    last_zero_ms: Option<u64>,
    last_star_ms: Option<u64>,
    config: TimingConfig,
}

impl Composer {
    /// Create a composer in text mode with an empty buffer
    pub fn new(config: TimingConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Current buffer content
    pub fn buffer(&self) -> &MessageBuffer {
        &self.buffer
    }

    /// Returns true while numeric entry mode is active
    pub fn numeric_mode(&self) -> bool {
        self.numeric_mode
    }

    /// Process one key press at the given monotonic time
    pub fn key_press(&mut self, key: Key, now_ms: u64) -> Action {
        match key {
            Key::Star => self.star_press(now_ms),
            Key::Hash => self.commit(),
            Key::D0 => self.zero_press(now_ms),
            key => match (self.numeric_mode, key.letters()) {
                (false, Some(letters)) => self.multi_tap_press(key, letters, now_ms),
                // Digit 1, or any digit in numeric mode: literal entry
                _ => self.literal_digit(key),
            },
        }
    }

    /// `*`: clear local state; a double press also broadcasts a reset
    fn star_press(&mut self, now_ms: u64) -> Action {
        let double = self
            .last_star_ms
            .is_some_and(|t| now_ms - t < self.config.star_double_press_ms);

        // Timestamp recorded unconditionally
        self.last_star_ms = Some(now_ms);
        self.buffer.clear();
        self.multi_tap.clear();

        if double {
            Action::BroadcastReset
        } else {
            Action::Ready
        }
    }

    /// `#`: expand shortcuts, hand the buffer over for transmission, clear
    fn commit(&mut self) -> Action {
        shortcuts::expand(&mut self.buffer);
        self.multi_tap.clear();
        Action::Transmit(core::mem::take(&mut self.buffer))
    }

    /// `0`: double press toggles numeric mode, single press appends
    fn zero_press(&mut self, now_ms: u64) -> Action {
        let double = self
            .last_zero_ms
            .is_some_and(|t| now_ms - t < self.config.zero_double_press_ms);

        if double {
            self.numeric_mode = !self.numeric_mode;
            // Suppress the timer so a third rapid press does not toggle back
            self.last_zero_ms = None;
        } else {
            self.last_zero_ms = Some(now_ms);
            let byte = if self.numeric_mode { b'0' } else { b' ' };
            self.buffer.push(byte);
        }

        self.multi_tap.clear();
        Action::Status
    }

    /// Append a digit as-is, outside the letter cycle
    fn literal_digit(&mut self, key: Key) -> Action {
        self.buffer.push(key.to_char() as u8);
        self.multi_tap.clear();
        Action::Status
    }

    /// Text-mode digit 2-9: cycle the letter in place or start a new one
    fn multi_tap_press(&mut self, key: Key, letters: &'static [u8], now_ms: u64) -> Action {
        let cycling = self.multi_tap.last_key == Some(key)
            && now_ms - self.multi_tap.last_tap_ms < self.config.multi_tap_window_ms;

        if cycling {
            self.multi_tap.tap_index = (self.multi_tap.tap_index + 1) % letters.len();
            self.buffer.replace_last(letters[self.multi_tap.tap_index]);
        } else {
            self.multi_tap.tap_index = 0;
            self.buffer.push(letters[0]);
        }

        self.multi_tap.last_key = Some(key);
        self.multi_tap.last_tap_ms = now_ms;
        Action::Status
    }
}
