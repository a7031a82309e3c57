use thiserror::Error;

/// Represents all errors that can occur during tokenizing or while checking
/// the structure of a token sequence.
///
/// Every variant collapses to the same user-facing message, `Invalid input.`,
/// once it reaches [`crate::evaluate`]. The variants only exist so that the
/// failure can be logged and inspected by library callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The tokenizer found a character outside of the expression alphabet.
    #[error("Invalid character '{character}' at position {position}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// A parenthesis has no partner, or a closing parenthesis comes before
    /// its opening one.
    #[error("Unbalanced parentheses.")]
    UnbalancedParentheses,
    /// There was nothing to evaluate, either at top level or between a pair
    /// of parentheses.
    #[error("Empty expression.")]
    EmptyExpression,
    /// A number was expected at this index of the flat token sequence.
    #[error("Expected a number at token {index}.")]
    ExpectedOperand {
        /// Index into the flat token sequence.
        index: usize,
    },
    /// An operator was expected at this index of the flat token sequence.
    #[error("Expected an operator at token {index}.")]
    ExpectedOperator {
        /// Index into the flat token sequence.
        index: usize,
    },
    /// A run of digits and dots could not be read as a number, such as
    /// `1.2.3` or a lone `.`.
    #[error("'{literal}' is not a valid number.")]
    InvalidNumber {
        /// The literal as it appeared in the input.
        literal: String,
    },
}
