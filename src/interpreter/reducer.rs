use log::debug;

use crate::{
    error::{EvalError, ParseError},
    interpreter::{
        lexer::Token,
        operator::{Operator, Precedence},
    },
};

/// Reduces a flat token sequence to a single value.
///
/// The sequence must have the shape `number (operator number)*` and contain
/// no parentheses. Every literal is read first; the shape is checked as the
/// operators are combined. Operators are combined one precedence level at a
/// time, `*` and `/` first, then `+` and `-`. Within a level, operators are
/// applied left to right, so `8 / 2 / 2` is `2` and `5 - 3 + 1` is `3`.
///
/// # Parameters
/// - `tokens`: Flat token sequence.
///
/// # Returns
/// The value of the sequence.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] if `tokens` is empty.
/// - [`ParseError::ExpectedOperand`] or [`ParseError::ExpectedOperator`] if
///   numbers and operators do not alternate, or a parenthesis is present.
/// - [`ParseError::InvalidNumber`] if a literal is not a valid number.
/// - [`crate::error::RuntimeError::DivisionByZero`] if a divisor evaluates
///   to zero before any structural error is reached.
///
/// # Example
/// ```
/// use prioricalc::interpreter::{lexer::tokenize, reducer::reduce};
///
/// let tokens = tokenize("4 + 5 * 3").unwrap();
/// assert_eq!(reduce(&tokens).unwrap(), 19.0);
///
/// let tokens = tokenize("4 +").unwrap();
/// assert!(reduce(&tokens).is_err());
/// ```
pub fn reduce(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut terms = read_literals(tokens)?;

    match terms.first() {
        None => return Err(ParseError::EmptyExpression.into()),
        Some(Token::Number(_)) => {},
        Some(_) => return Err(ParseError::ExpectedOperand { index: 0 }.into()),
    }

    for level in Precedence::ORDER {
        combine_level(&mut terms, level)?;
    }

    debug_assert_eq!(terms.len(), 1);
    Ok(operand_at(&terms, 0)?)
}

/// Reads every literal of the sequence into a value.
///
/// This happens before any arithmetic, so a malformed number is reported
/// even if a division by zero precedes it.
fn read_literals(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    tokens.iter()
          .map(|token| match token {
              Token::Number(number) => number.value().map(Token::from),
              other => Ok(other.clone()),
          })
          .collect()
}

fn operand_at(terms: &[Token], index: usize) -> Result<f64, ParseError> {
    match terms.get(index) {
        Some(Token::Number(number)) => number.value(),
        _ => Err(ParseError::ExpectedOperand { index }),
    }
}

fn operator_at(terms: &[Token], index: usize) -> Result<Operator, ParseError> {
    match terms.get(index) {
        Some(Token::Operator(op)) => Ok(*op),
        _ => Err(ParseError::ExpectedOperator { index }),
    }
}

/// Combines every operator of one precedence level, left to right.
///
/// Operators sit at odd indices. Combining replaces the window
/// `operand operator operand` with its value, and the scan stays at the same
/// index since the next operator has moved into it. Operands and operators
/// are only checked when the scan reaches them, so an earlier division by
/// zero is reported before a later structural error.
fn combine_level(terms: &mut Vec<Token>, level: Precedence) -> Result<(), EvalError> {
    let mut i = 1;

    while i < terms.len() {
        let op = operator_at(terms, i)?;
        if op.precedence() != level {
            i += 2;
            continue;
        }

        let left = operand_at(terms, i - 1)?;
        let right = operand_at(terms, i + 1)?;
        let value = op.apply(left, right)?;
        debug!("{left} {op} {right} = {value}");

        terms.splice(i - 1..=i + 1, [Token::from(value)]);
    }

    Ok(())
}
