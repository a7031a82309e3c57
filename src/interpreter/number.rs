use std::fmt;

use crate::{error::ParseError, util::num::format_real};

/// A numeric operand inside a token sequence.
///
/// Literals coming from the input keep their text and are only read as a
/// number when the reducer needs them, so malformed literals like `1.2.3`
/// tokenize fine and fail during reduction. Values produced by resolving a
/// parenthesized group are stored as computed.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// A run of digits and dots exactly as it appeared in the input.
    Literal(String),
    /// An already computed value.
    Value(f64),
}

impl Number {
    /// Returns the numeric value of this operand.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidNumber`] if a literal is not a valid
    /// decimal number.
    ///
    /// # Example
    /// ```
    /// use prioricalc::interpreter::number::Number;
    ///
    /// assert_eq!(Number::Literal("4.5".to_string()).value().unwrap(), 4.5);
    /// assert_eq!(Number::Literal("5.".to_string()).value().unwrap(), 5.0);
    /// assert!(Number::Literal("1.2.3".to_string()).value().is_err());
    /// assert_eq!(Number::Value(0.25).value().unwrap(), 0.25);
    /// ```
    pub fn value(&self) -> Result<f64, ParseError> {
        match self {
            Self::Value(value) => Ok(*value),
            Self::Literal(literal) => {
                literal.parse().map_err(|_| ParseError::InvalidNumber { literal: literal.clone() })
            },
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => f.write_str(literal),
            Self::Value(value) => f.write_str(&format_real(*value)),
        }
    }
}
