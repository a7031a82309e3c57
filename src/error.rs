use thiserror::Error;

/// Parsing errors.
///
/// Defines the errors that can occur while tokenizing the input and while
/// checking that a token sequence has the shape `number (operator number)*`.
/// This includes unknown characters, unbalanced parentheses and malformed
/// numeric literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while combining operands. Division by zero is
/// the only arithmetic failure.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// User-facing message for every structural or lexical failure.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input.";
/// User-facing message for a division by zero.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Error: Division by zero.";

/// Any failure of a single evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The input could not be tokenized or has an invalid structure.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The input is well formed but its arithmetic failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl EvalError {
    /// Returns the message shown to the user for this error.
    ///
    /// Only two messages exist; the exact failure is never distinguishable
    /// from the output of [`crate::evaluate`].
    ///
    /// # Example
    /// ```
    /// use prioricalc::error::{EvalError, ParseError, RuntimeError};
    ///
    /// let err = EvalError::from(ParseError::UnbalancedParentheses);
    /// assert_eq!(err.user_message(), "Invalid input.");
    ///
    /// let err = EvalError::from(RuntimeError::DivisionByZero);
    /// assert_eq!(err.user_message(), "Error: Division by zero.");
    /// ```
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Parse(_) => INVALID_INPUT_MESSAGE,
            Self::Runtime(RuntimeError::DivisionByZero) => DIVISION_BY_ZERO_MESSAGE,
        }
    }
}
