//! The discrete input alphabet consumed by the state machine
//!
//! Every input source (keypad buttons, keyboard mapping) translates down to
//! these tokens before the engine sees anything.

use super::Operation;

/// A single discrete user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Point,
    /// A binary operator choice
    Operation(Operation),
    /// Collapse the pending expression
    Equals,
    /// Reset all state
    Clear,
    /// Drop the last character of the current operand
    Delete,
    /// Divide the current operand by one hundred
    Percent,
}

impl Token {
    /// Builds a digit token, rejecting anything above 9
    #[must_use]
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self::Digit(d))
    }

    /// Maps a typed character onto a token, if it corresponds to one
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            '.' => Some(Self::Point),
            '=' => Some(Self::Equals),
            _ => Operation::from_key(c).map(Self::Operation),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "digit({d})"),
            Self::Point => write!(f, "point"),
            Self::Operation(op) => write!(f, "operation({})", op.name()),
            Self::Equals => write!(f, "equals"),
            Self::Clear => write!(f, "clear"),
            Self::Delete => write!(f, "delete"),
            Self::Percent => write!(f, "percent"),
        }
    }
}
