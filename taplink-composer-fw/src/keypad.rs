//! 4x3 Matrix Keypad Scanner
//!
//! Rows are driven low one at a time; a pressed key pulls its column low
//! through the active row. A small debounce state machine reports each key
//! once, on the press edge.

use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Timer};

use taplink_core::Key;

/// Physical key layout, row-major
const KEYMAP: [[Key; 3]; 4] = [
    [Key::D1, Key::D2, Key::D3],
    [Key::D4, Key::D5, Key::D6],
    [Key::D7, Key::D8, Key::D9],
    [Key::Star, Key::D0, Key::Hash],
];

/// Scan interval
const SCAN_PERIOD: Duration = Duration::from_millis(5);

/// Consecutive identical scans required before a press is reported
const DEBOUNCE_SCANS: u8 = 3;

/// Matrix keypad scanner
pub struct MatrixKeypad<'d> {
    rows: [Output<'d>; 4],
    cols: [Input<'d>; 3],
    /// Key currently held (already reported)
    held: Option<Key>,
    /// Key seen in recent scans, not yet stable
    candidate: Option<Key>,
    stable_scans: u8,
}

impl<'d> MatrixKeypad<'d> {
    pub fn new(rows: [Output<'d>; 4], cols: [Input<'d>; 3]) -> Self {
        Self {
            rows,
            cols,
            held: None,
            candidate: None,
            stable_scans: 0,
        }
    }

    /// Poll for a newly pressed key
    ///
    /// Waits one scan period, strobes the matrix once, and returns a key
    /// only on a debounced press edge. Call in a loop.
    pub async fn poll(&mut self) -> Option<Key> {
        Timer::after(SCAN_PERIOD).await;

        let raw = self.scan_once().await;

        if raw != self.candidate {
            self.candidate = raw;
            self.stable_scans = 0;
            return None;
        }

        if self.stable_scans < DEBOUNCE_SCANS {
            self.stable_scans += 1;
            return None;
        }

        // Stable reading: report only the transition from released to held
        if raw == self.held {
            return None;
        }
        self.held = raw;
        raw
    }

    /// Strobe each row and read the columns
    async fn scan_once(&mut self) -> Option<Key> {
        let mut pressed = None;

        for (r, row) in self.rows.iter_mut().enumerate() {
            row.set_low();
            // Let the line settle before sampling
            Timer::after(Duration::from_micros(10)).await;

            for (c, col) in self.cols.iter().enumerate() {
                if col.is_low() {
                    pressed = Some(KEYMAP[r][c]);
                }
            }

            row.set_high();
        }

        pressed
    }
}
