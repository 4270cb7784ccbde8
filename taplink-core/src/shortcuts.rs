//! Emergency shortcut codes
//!
//! A buffer starting with `0` is checked against a fixed table of
//! 4-character codes at commit time; an exact match replaces the whole
//! buffer with the expansion word. There is no prefix or partial matching.

use taplink_protocol::MessageBuffer;

/// Shortcut code table: (code, expansion)
pub const SHORTCUTS: &[(&[u8], &[u8])] = &[
    (b"0111", b"HELP"),
    (b"0222", b"EMERGENCY"),
    (b"0333", b"DANGER"),
    (b"0444", b"DOCTOR"),
    (b"0555", b"FIRE"),
];

/// Expand a shortcut code in place, if the buffer exactly matches one
pub fn expand(buffer: &mut MessageBuffer) {
    if buffer.first() != Some(b'0') {
        return;
    }
    for &(code, word) in SHORTCUTS {
        if buffer.as_bytes() == code {
            buffer.set(word);
            return;
        }
    }
}
