//! Bounded message buffer shared by both nodes
//!
//! The composer builds its outgoing message in one of these; the receiver
//! reassembles into another. Capacity overflow is policy, not an error:
//! pushes beyond 20 characters are silently dropped.

use heapless::{String, Vec};

use crate::wire::MAX_MESSAGE_LEN;

/// A bounded message string, capacity 20 bytes
///
/// Content is arbitrary bytes on the receive side (the link does not
/// validate printability); the composer only ever pushes ASCII.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MessageBuffer {
    bytes: Vec<u8, MAX_MESSAGE_LEN>,
}

impl MessageBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Append a byte
    ///
    /// Returns `false` if the buffer is full; the byte is dropped and the
    /// existing content is untouched.
    pub fn push(&mut self, byte: u8) -> bool {
        self.bytes.push(byte).is_ok()
    }

    /// Replace the final byte in place (multi-tap cycling)
    ///
    /// No-op on an empty buffer. Length is unchanged.
    pub fn replace_last(&mut self, byte: u8) {
        if let Some(last) = self.bytes.last_mut() {
            *last = byte;
        }
    }

    /// Discard all content
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Replace the entire content (shortcut expansion)
    ///
    /// Content beyond capacity is truncated.
    pub fn set(&mut self, content: &[u8]) {
        self.bytes.clear();
        let len = content.len().min(MAX_MESSAGE_LEN);
        // Cannot fail: len is clamped to capacity
        let _ = self.bytes.extend_from_slice(&content[..len]);
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.bytes.is_full()
    }

    /// First byte, if any (shortcut table gate)
    pub fn first(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Render the content for a text display
    ///
    /// Printable ASCII passes through; anything else becomes `'?'`.
    pub fn display_text(&self) -> String<MAX_MESSAGE_LEN> {
        let mut out = String::new();
        for &b in self.bytes.iter() {
            let ch = if (0x20..0x7F).contains(&b) {
                b as char
            } else {
                '?'
            };
            // Cannot fail: out has the same capacity as self.bytes
            let _ = out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn full_buffer() -> MessageBuffer {
        let mut buf = MessageBuffer::new();
        for i in 0..MAX_MESSAGE_LEN {
            assert!(buf.push(b'A' + (i % 26) as u8));
        }
        buf
    }

    #[test]
    fn test_push_within_capacity() {
        let mut buf = MessageBuffer::new();
        assert!(buf.push(b'H'));
        assert!(buf.push(b'I'));
        assert_eq!(buf.as_bytes(), b"HI");
    }

    #[test]
    fn test_push_at_capacity_is_dropped() {
        let mut buf = full_buffer();
        let before = buf.clone();
        assert!(!buf.push(b'Z'));
        assert_eq!(buf, before);
        assert_eq!(buf.len(), MAX_MESSAGE_LEN);
    }

    #[test]
    fn test_replace_last() {
        let mut buf = MessageBuffer::new();
        buf.push(b'G');
        buf.replace_last(b'H');
        assert_eq!(buf.as_bytes(), b"H");
        buf.replace_last(b'I');
        assert_eq!(buf.as_bytes(), b"I");
    }

    #[test]
    fn test_replace_last_on_empty_is_noop() {
        let mut buf = MessageBuffer::new();
        buf.replace_last(b'X');
        assert!(buf.is_empty());
    }

    #[test]
    fn test_set_truncates_to_capacity() {
        let mut buf = MessageBuffer::new();
        buf.set(b"THIS IS LONGER THAN TWENTY CHARS");
        assert_eq!(buf.len(), MAX_MESSAGE_LEN);
        assert_eq!(buf.as_bytes(), b"THIS IS LONGER THAN ");
    }

    #[test]
    fn test_display_text_masks_unprintable() {
        let mut buf = MessageBuffer::new();
        buf.push(b'O');
        buf.push(0x07);
        buf.push(b'K');
        buf.push(0xFF);
        assert_eq!(buf.display_text().as_str(), "O?K?");
    }

    proptest! {
        // A full buffer never changes, whatever is pushed
        #[test]
        fn prop_full_buffer_is_immutable(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
            let mut buf = full_buffer();
            let before = buf.clone();
            for b in bytes {
                prop_assert!(!buf.push(b));
            }
            prop_assert_eq!(buf, before);
        }

        // replace_last never changes the length
        #[test]
        fn prop_replace_last_preserves_len(init in proptest::collection::vec(any::<u8>(), 0..20), b in any::<u8>()) {
            let mut buf = MessageBuffer::new();
            for &x in &init {
                buf.push(x);
            }
            let len = buf.len();
            buf.replace_last(b);
            prop_assert_eq!(buf.len(), len);
        }
    }
}
