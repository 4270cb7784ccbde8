//! Keypad events and the multi-tap letter table

/// A pressed key on the 4x3 matrix keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    /// Reset key (`*`)
    Star,
    /// Commit key (`#`)
    Hash,
}

impl Key {
    /// Parse a key from its keypad legend character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Key::D0),
            '1' => Some(Key::D1),
            '2' => Some(Key::D2),
            '3' => Some(Key::D3),
            '4' => Some(Key::D4),
            '5' => Some(Key::D5),
            '6' => Some(Key::D6),
            '7' => Some(Key::D7),
            '8' => Some(Key::D8),
            '9' => Some(Key::D9),
            '*' => Some(Key::Star),
            '#' => Some(Key::Hash),
            _ => None,
        }
    }

    /// The keypad legend character for this key
    pub fn to_char(self) -> char {
        match self {
            Key::D0 => '0',
            Key::D1 => '1',
            Key::D2 => '2',
            Key::D3 => '3',
            Key::D4 => '4',
            Key::D5 => '5',
            Key::D6 => '6',
            Key::D7 => '7',
            Key::D8 => '8',
            Key::D9 => '9',
            Key::Star => '*',
            Key::Hash => '#',
        }
    }

    /// The multi-tap letter cycle for this key
    ///
    /// Digits 2-9 carry the classic phone layout; 0, 1 and the control keys
    /// have no letters.
    pub fn letters(self) -> Option<&'static [u8]> {
        match self {
            Key::D2 => Some(b"ABC"),
            Key::D3 => Some(b"DEF"),
            Key::D4 => Some(b"GHI"),
            Key::D5 => Some(b"JKL"),
            Key::D6 => Some(b"MNO"),
            Key::D7 => Some(b"PQRS"),
            Key::D8 => Some(b"TUV"),
            Key::D9 => Some(b"WXYZ"),
            _ => None,
        }
    }

    /// Returns true for the digit keys 0-9
    pub fn is_digit(self) -> bool {
        !matches!(self, Key::Star | Key::Hash)
    }
}
