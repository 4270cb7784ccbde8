//! Receive-side reassembly state machine
//!
//! The decoder has no state beyond the buffer itself: bytes accumulate
//! until an end-of-message marker renders them, and only the reset marker
//! ever clears the buffer. A second message arriving without an intervening
//! reset keeps appending to the same buffer; the previous content is
//! overwritten only in the sense that new characters land after it (or are
//! dropped at capacity). This non-clearing behavior is deliberate.

use crate::buffer::MessageBuffer;
use crate::wire::WireByte;

/// What the caller should do after feeding one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReceiverAction {
    /// Content byte handled; refresh the in-progress display
    Buffered,
    /// End-of-message: render the buffer as final and sound the alert
    MessageComplete,
    /// Reset: buffer cleared, show the ready screen
    Reset,
}

/// Reassembles the broadcast byte stream into a display buffer
#[derive(Debug, Clone, Default)]
pub struct Reassembler {
    buffer: MessageBuffer,
}

impl Reassembler {
    pub const fn new() -> Self {
        Self {
            buffer: MessageBuffer::new(),
        }
    }

    /// Feed a single byte from the link
    pub fn feed(&mut self, byte: u8) -> ReceiverAction {
        match WireByte::classify(byte) {
            WireByte::Reset => {
                self.buffer.clear();
                ReceiverAction::Reset
            }
            WireByte::EndOfMessage => {
                // Buffer intentionally left intact
                ReceiverAction::MessageComplete
            }
            WireByte::Char(c) => {
                // Overflow drops the byte silently
                self.buffer.push(c);
                ReceiverAction::Buffered
            }
        }
    }

    /// Current buffer content (in-progress or last rendered message)
    pub fn buffer(&self) -> &MessageBuffer {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::MAX_MESSAGE_LEN;

    fn feed_all(r: &mut Reassembler, bytes: &[u8]) -> ReceiverAction {
        let mut last = ReceiverAction::Buffered;
        for &b in bytes {
            last = r.feed(b);
        }
        last
    }

    #[test]
    fn test_accumulate_then_complete() {
        let mut r = Reassembler::new();
        assert_eq!(r.feed(b'H'), ReceiverAction::Buffered);
        assert_eq!(r.feed(b'I'), ReceiverAction::Buffered);
        assert_eq!(r.feed(b'#'), ReceiverAction::MessageComplete);
        assert_eq!(r.buffer().as_bytes(), b"HI");
    }

    #[test]
    fn test_end_of_message_does_not_clear() {
        let mut r = Reassembler::new();
        feed_all(&mut r, b"HI#");
        // A second end marker without a reset renders identical content
        assert_eq!(r.feed(b'#'), ReceiverAction::MessageComplete);
        assert_eq!(r.buffer().as_bytes(), b"HI");
    }

    #[test]
    fn test_next_message_appends_without_reset() {
        let mut r = Reassembler::new();
        feed_all(&mut r, b"HI#");
        feed_all(&mut r, b"OK#");
        assert_eq!(r.buffer().as_bytes(), b"HIOK");
    }

    #[test]
    fn test_reset_clears_at_any_point() {
        let mut r = Reassembler::new();
        feed_all(&mut r, b"PARTIAL");
        assert_eq!(r.feed(b'!'), ReceiverAction::Reset);
        assert!(r.buffer().is_empty());

        // Reset after a complete message also clears
        feed_all(&mut r, b"DONE#");
        r.feed(b'!');
        assert!(r.buffer().is_empty());
    }

    #[test]
    fn test_end_of_message_on_empty_buffer_still_alerts() {
        let mut r = Reassembler::new();
        r.feed(b'!');
        assert_eq!(r.feed(b'#'), ReceiverAction::MessageComplete);
        assert!(r.buffer().is_empty());
    }

    #[test]
    fn test_overflow_drops_silently() {
        let mut r = Reassembler::new();
        for _ in 0..MAX_MESSAGE_LEN + 5 {
            assert_eq!(r.feed(b'X'), ReceiverAction::Buffered);
        }
        assert_eq!(r.buffer().len(), MAX_MESSAGE_LEN);
    }

    #[test]
    fn test_arbitrary_bytes_are_content() {
        let mut r = Reassembler::new();
        r.feed(0x00);
        r.feed(0xFF);
        r.feed(b'A');
        assert_eq!(r.buffer().as_bytes(), &[0x00, 0xFF, b'A']);
    }
}
