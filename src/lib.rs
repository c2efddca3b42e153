//! Sumar - a button-driven two-operand calculator
//!
//! The core is a pure state machine ([`core::Engine`]) that interprets a
//! stream of discrete input tokens (digits, decimal point, operators,
//! equals, clear, delete, percent) into an evolving two-operand arithmetic
//! expression. Presentation is layered on top through small seams: a
//! [`surface::RenderSink`] receives display frames, a
//! [`surface::PreferenceStore`] persists the theme, and the optional TUI
//! translates keyboard and mouse input into tokens.
//!
//! # Example
//!
//! ```rust
//! use sumar::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.apply(Token::Digit(3));
//! engine.apply(Token::Operation(Operation::Add));
//! engine.apply(Token::Digit(4));
//! engine.apply(Token::Equals);
//! assert_eq!(engine.current(), "7");
//!
//! // Display projection groups thousands and shows the pending operator
//! engine.apply(Token::Operation(Operation::Multiply));
//! assert_eq!(engine.display_previous(), "7 ×");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod prefs;
pub mod surface;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "remote")]
pub mod remote;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{CalcError, CalcResult, Engine, Operation, Outcome, Token};
    pub use crate::prefs::FileStore;
    pub use crate::surface::{
        Controller, DisplayFrame, Flash, FlashKind, FlashStyle, PreferenceStore, RenderSink,
        Theme,
    };

    #[cfg(feature = "tui")]
    pub use crate::tui::{InputHandler, KeyAction, Keypad, KeypadAction};

    #[cfg(feature = "remote")]
    pub use crate::remote::{RemoteError, RemoteEvaluator};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = Engine::new();
        engine.apply(Token::Digit(2));
        engine.apply(Token::Operation(Operation::Multiply));
        engine.apply(Token::Digit(3));
        assert_eq!(engine.apply(Token::Equals), Outcome::Computed);
        assert_eq!(engine.current(), "6");
    }
}
