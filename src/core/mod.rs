//! Core expression state machine, independent of any rendering surface.

pub mod engine;
pub mod format;
mod operations;
pub mod token;

pub use engine::Engine;
pub use operations::Operation;
pub use token::Token;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// User-visible calculator errors
///
/// Malformed input (a second decimal point, an unparseable operand) is a
/// silent no-op and never produces an error; this enum covers only the
/// conditions that get a transient on-screen message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

/// The transient signal raised by applying an input token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The token was handled (possibly as a silent no-op); nothing to announce
    Updated,
    /// A pending computation collapsed successfully
    Computed,
    /// The action was rejected; arithmetic state is untouched
    Error(CalcError),
}

impl Outcome {
    /// Returns true if this outcome carries an error signal
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
