//! Control markers and wire byte classification

/// Reset marker: clear the receive buffer and show the ready screen
pub const RESET: u8 = b'!';

/// End-of-message marker: render the current buffer and sound the alert
pub const END_OF_MESSAGE: u8 = b'#';

/// Maximum message length in characters (either side)
pub const MAX_MESSAGE_LEN: usize = 20;

/// Classification of a single received byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WireByte {
    /// Reset marker
    Reset,
    /// End-of-message marker
    EndOfMessage,
    /// Ordinary message content (printability is not validated)
    Char(u8),
}

impl WireByte {
    /// Classify a raw byte from the link
    pub fn classify(byte: u8) -> Self {
        match byte {
            RESET => WireByte::Reset,
            END_OF_MESSAGE => WireByte::EndOfMessage,
            other => WireByte::Char(other),
        }
    }

    /// Returns true if this byte is one of the reserved control markers
    pub fn is_marker(&self) -> bool {
        matches!(self, WireByte::Reset | WireByte::EndOfMessage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_markers() {
        assert_eq!(WireByte::classify(b'!'), WireByte::Reset);
        assert_eq!(WireByte::classify(b'#'), WireByte::EndOfMessage);
    }

    #[test]
    fn test_classify_content() {
        assert_eq!(WireByte::classify(b'A'), WireByte::Char(b'A'));
        assert_eq!(WireByte::classify(b' '), WireByte::Char(b' '));
        // Out-of-alphabet bytes are still content
        assert_eq!(WireByte::classify(0xFF), WireByte::Char(0xFF));
        assert_eq!(WireByte::classify(0x00), WireByte::Char(0x00));
    }

    #[test]
    fn test_is_marker() {
        assert!(WireByte::classify(RESET).is_marker());
        assert!(WireByte::classify(END_OF_MESSAGE).is_marker());
        assert!(!WireByte::classify(b'Z').is_marker());
    }
}
