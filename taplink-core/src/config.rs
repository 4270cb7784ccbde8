//! Timing configuration
//!
//! All timing-sensitive behavior is driven by these values. Firmware uses
//! the defaults; tests override individual windows where useful. There is
//! no persistence: configuration is fixed at build time.

/// Default multi-tap window (ms): same-key presses closer than this cycle
pub const MULTI_TAP_WINDOW_MS: u64 = 800;

/// Default zero double-press window (ms): toggles numeric/text mode
pub const ZERO_DOUBLE_PRESS_MS: u64 = 500;

/// Default star double-press window (ms): broadcasts a reset
pub const STAR_DOUBLE_PRESS_MS: u64 = 600;

/// Default gap between transport writes (ms)
pub const INTER_CHAR_DELAY_MS: u64 = 25;

/// Default alert tone duration on the receiver (ms)
pub const ALERT_DURATION_MS: u64 = 600;

/// Timing windows for input handling and transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Same-key presses within this window advance the letter cycle
    pub multi_tap_window_ms: u64,
    /// Two `0` presses within this window toggle numeric/text mode
    pub zero_double_press_ms: u64,
    /// Two `*` presses within this window broadcast a reset
    pub star_double_press_ms: u64,
    /// Delay between single-byte transport writes
    pub inter_char_delay_ms: u64,
    /// Receiver alert tone duration
    pub alert_duration_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            multi_tap_window_ms: MULTI_TAP_WINDOW_MS,
            zero_double_press_ms: ZERO_DOUBLE_PRESS_MS,
            star_double_press_ms: STAR_DOUBLE_PRESS_MS,
            inter_char_delay_ms: INTER_CHAR_DELAY_MS,
            alert_duration_ms: ALERT_DURATION_MS,
        }
    }
}
