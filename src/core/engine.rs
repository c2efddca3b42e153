//! The expression evaluator state machine
//!
//! Three pieces of state (current operand, committed previous operand,
//! pending operation) plus a reset flag that makes the next digit entry
//! start a fresh operand after a computation. Every user action funnels
//! through [`Engine::apply`]; the only outputs are the two display strings
//! and the transient [`Outcome`] signal.

use tracing::debug;

use super::format::{format_number, format_operand};
use super::{CalcError, Operation, Outcome, Token};

/// The two-operand arithmetic state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    /// Operand currently being edited. At most one `.`, never empty while
    /// idle (empty only between an operator choice and the next entry).
    current: String,
    /// Committed left-hand operand, or empty when no operation is pending
    previous: String,
    /// Pending binary operator. `None` iff `previous` is empty.
    operation: Option<Operation>,
    /// When set, the next digit or point entry overwrites `current`
    reset_pending: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in its initial state
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: String::new(),
            operation: None,
            reset_pending: false,
        }
    }

    /// Returns the operand being edited
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Returns the committed left-hand operand
    #[must_use]
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// Returns the pending operation
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Returns whether the next entry starts a fresh operand
    #[must_use]
    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// Dispatches a single input token
    pub fn apply(&mut self, token: Token) -> Outcome {
        debug!(%token, "applying input token");
        match token {
            Token::Digit(d) => self.push_digit(d),
            Token::Point => self.push_point(),
            Token::Operation(op) => self.choose_operation(op),
            Token::Equals => self.compute(),
            Token::Clear => {
                self.clear();
                Outcome::Updated
            }
            Token::Delete => {
                self.delete_last();
                Outcome::Updated
            }
            Token::Percent => {
                self.percent();
                Outcome::Updated
            }
        }
    }

    /// Appends a digit to the current operand
    ///
    /// A lone `"0"` is replaced rather than extended, so typing never yields
    /// leading zeros. Digits above 9 are a silent no-op.
    pub fn push_digit(&mut self, d: u8) -> Outcome {
        let Some(ch) = char::from_digit(u32::from(d), 10) else {
            return Outcome::Updated;
        };
        self.take_reset();
        if self.current == "0" {
            self.current.clear();
        }
        self.current.push(ch);
        Outcome::Updated
    }

    /// Appends the decimal point; a second point is a silent no-op
    pub fn push_point(&mut self) -> Outcome {
        self.take_reset();
        if self.current.contains('.') {
            return Outcome::Updated;
        }
        self.current.push('.');
        Outcome::Updated
    }

    /// Commits the current operand against a chosen operator
    ///
    /// If an operation is already pending the expression collapses first, so
    /// `3 + 4 + 5` computes `7` before continuing with `+ 5`. Choosing a
    /// second operator with nothing typed in between simply overwrites the
    /// pending operator. The signal of an embedded compute (success flash or
    /// divide-by-zero error) propagates to the caller.
    pub fn choose_operation(&mut self, op: Operation) -> Outcome {
        // A current operand that cannot parse (empty, or a bare ".") has
        // nothing to commit; with an operation already pending the choice
        // just replaces the operator.
        if self.current.parse::<f64>().is_err() {
            if self.operation.is_some() {
                self.operation = Some(op);
            }
            return Outcome::Updated;
        }
        let outcome = if self.previous.is_empty() {
            Outcome::Updated
        } else {
            self.compute()
        };
        self.operation = Some(op);
        self.previous = std::mem::take(&mut self.current);
        outcome
    }

    /// Collapses the pending expression into the current operand
    ///
    /// Silent no-op when no operation is pending or either operand fails to
    /// parse. Divide-by-zero leaves the whole state untouched and raises the
    /// error signal instead.
    pub fn compute(&mut self) -> Outcome {
        let Some(op) = self.operation else {
            return Outcome::Updated;
        };
        let (Ok(prev), Ok(curr)) = (self.previous.parse::<f64>(), self.current.parse::<f64>())
        else {
            return Outcome::Updated;
        };
        if op == Operation::Divide && curr == 0.0 {
            return Outcome::Error(CalcError::DivisionByZero);
        }
        self.current = format_number(op.apply(prev, curr));
        self.previous.clear();
        self.operation = None;
        self.reset_pending = true;
        Outcome::Computed
    }

    /// Resets all state to the initial values
    pub fn clear(&mut self) {
        self.current = "0".to_string();
        self.previous.clear();
        self.operation = None;
        self.reset_pending = false;
    }

    /// Drops the last character of the current operand
    ///
    /// A single-character operand resets to `"0"`; deleting never yields an
    /// empty string from a non-empty one.
    pub fn delete_last(&mut self) {
        if self.current.len() == 1 {
            self.current = "0".to_string();
        } else {
            self.current.pop();
        }
    }

    /// Replaces the current operand with its value divided by one hundred
    pub fn percent(&mut self) {
        let Ok(value) = self.current.parse::<f64>() else {
            return;
        };
        self.current = format_number(value / 100.0);
    }

    /// Projects the current operand for display (grouped)
    #[must_use]
    pub fn display_current(&self) -> String {
        format_operand(&self.current)
    }

    /// Projects the pending-expression line for display
    ///
    /// Empty when no operation is pending; otherwise the grouped previous
    /// operand followed by the operator symbol.
    #[must_use]
    pub fn display_previous(&self) -> String {
        match self.operation {
            None => String::new(),
            Some(op) => format!("{} {}", format_operand(&self.previous), op.symbol()),
        }
    }

    /// Clears the current operand when a reset is pending
    fn take_reset(&mut self) {
        if self.reset_pending {
            self.current.clear();
            self.reset_pending = false;
        }
    }
}
