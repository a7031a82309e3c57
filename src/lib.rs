//! # prioricalc
//!
//! prioricalc evaluates arithmetic expressions written as text. It supports
//! the four operators `+ - * /` with the usual precedence and any nesting of
//! parentheses. All arithmetic is done in `f64`.
//!
//! ```
//! use prioricalc::evaluate;
//!
//! assert_eq!(evaluate("(4+5)*3"), "Result: 27.0");
//! assert_eq!(evaluate("5/0"), "Error: Division by zero.");
//! assert_eq!(evaluate("4+@"), "Invalid input.");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]

use crate::{error::EvalError, interpreter::evaluator::evaluate_expression, util::num::format_real};

/// Provides unified error types for tokenizing, resolving and reducing.
///
/// This module defines every error that can be raised while evaluating an
/// expression, and the two messages they map to once they reach
/// [`evaluate`].
///
/// # Responsibilities
/// - Defines error enums for lexical, structural and arithmetic failures.
/// - Maps every error to its user-facing message.
pub mod error;
/// Implements the evaluation pipeline.
///
/// This module ties together the lexer, the parenthesis resolver and the
/// reducer to turn text into a value.
///
/// # Responsibilities
/// - Defines tokens, operators and operands.
/// - Resolves parenthesized groups innermost first.
/// - Applies operator precedence to flat sequences.
pub mod interpreter;
/// General helpers for numeric output.
pub mod util;

/// Evaluates an expression and formats the outcome for display.
///
/// This function never fails and never panics. On success it returns
/// `Result: <value>`. On failure it returns `Error: Division by zero.` if a
/// division by zero happened, and `Invalid input.` for anything else.
///
/// # Examples
/// ```
/// use prioricalc::evaluate;
///
/// assert_eq!(evaluate("10/2-3"), "Result: 2.0");
/// assert_eq!(evaluate("(1+(2*3))"), "Result: 7.0");
/// assert_eq!(evaluate("(4+5*3"), "Invalid input.");
/// ```
#[must_use]
pub fn evaluate(expression: &str) -> String {
    match try_evaluate(expression) {
        Ok(value) => format!("Result: {}", format_real(value)),
        Err(e) => e.user_message().to_string(),
    }
}

/// Evaluates an expression and returns its value.
///
/// Unlike [`evaluate`], the exact reason of a failure is kept.
///
/// # Errors
/// Returns an [`EvalError`] describing the first failure.
///
/// # Examples
/// ```
/// use prioricalc::{
///     error::{EvalError, ParseError, RuntimeError},
///     try_evaluate,
/// };
///
/// assert_eq!(try_evaluate("2 * (3 + 4)"), Ok(14.0));
/// assert_eq!(try_evaluate("1 / (2 - 2)"),
///            Err(EvalError::Runtime(RuntimeError::DivisionByZero)));
/// assert_eq!(try_evaluate("1 + 1.2.3"),
///            Err(EvalError::Parse(ParseError::InvalidNumber { literal: "1.2.3".to_string() })));
/// ```
pub fn try_evaluate(expression: &str) -> Result<f64, EvalError> {
    evaluate_expression(expression)
}
