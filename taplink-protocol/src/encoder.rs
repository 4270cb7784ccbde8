//! Outgoing message framing
//!
//! A committed message is streamed one byte per transport write, in order,
//! followed by exactly one end-of-message marker. An empty message is legal
//! and sends the marker alone. The reset marker is not part of message
//! framing; the composer emits it directly on a double reset press.

use crate::wire::END_OF_MESSAGE;

/// Iterate the wire bytes for a committed message
///
/// Yields the payload bytes in order, then the `#` end-of-message marker.
/// The caller performs one transport write per yielded byte, inserting the
/// configured inter-character delay between writes.
pub fn frame(payload: &[u8]) -> impl Iterator<Item = u8> + '_ {
    payload.iter().copied().chain(core::iter::once(END_OF_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    fn collect(payload: &[u8]) -> Vec<u8, 32> {
        frame(payload).collect()
    }

    #[test]
    fn test_frame_appends_end_marker() {
        assert_eq!(collect(b"HI").as_slice(), b"HI#");
    }

    #[test]
    fn test_frame_empty_message_is_marker_alone() {
        assert_eq!(collect(b"").as_slice(), b"#");
    }

    #[test]
    fn test_frame_preserves_order_and_length() {
        let bytes = collect(b"HELP ME NOW");
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[..11], b"HELP ME NOW");
        assert_eq!(bytes[11], END_OF_MESSAGE);
    }

    #[test]
    fn test_frame_does_not_escape_content() {
        // No escaping on this link: marker-valued content bytes go out as-is
        let bytes = collect(b"A!B");
        assert_eq!(bytes.as_slice(), b"A!B#");
    }
}
