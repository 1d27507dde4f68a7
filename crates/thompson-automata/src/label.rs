//! Transition labels.

use std::fmt;

/// What an NFA transition consumes.
///
/// Epsilon is a separate variant rather than a reserved byte, so every
/// byte value is available as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// Consumes nothing.
    Epsilon,
    /// Consumes exactly this byte.
    Byte(u8),
}

impl Label {
    pub fn is_epsilon(self) -> bool {
        matches!(self, Label::Epsilon)
    }

    pub fn byte(self) -> Option<u8> {
        match self {
            Label::Epsilon => None,
            Label::Byte(b) => Some(b),
        }
    }
}

impl From<u8> for Label {
    fn from(b: u8) -> Self {
        Label::Byte(b)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Epsilon => f.write_str("ε"),
            Label::Byte(b) if b.is_ascii_graphic() || *b == b' ' => write!(f, "'{}'", *b as char),
            Label::Byte(b) => write!(f, "'\\x{b:02x}'"),
        }
    }
}
