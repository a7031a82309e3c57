use std::fmt;

use crate::error::RuntimeError;

/// Binding strength of an operator.
///
/// Levels are listed from the one reduced first to the one reduced last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `*` and `/`.
    Multiplicative,
    /// `+` and `-`.
    Additive,
}

impl Precedence {
    /// Every level in reduction order.
    pub const ORDER: [Self; 2] = [Self::Multiplicative, Self::Additive];
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Returns the precedence level this operator is reduced at.
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Mul | Self::Div => Precedence::Multiplicative,
            Self::Add | Self::Sub => Precedence::Additive,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// All arithmetic is done in `f64`. The divisor is compared against zero
    /// before dividing, so both `0.0` and `-0.0` are rejected.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] if `self` is [`Operator::Div`]
    /// and `right` is zero.
    ///
    /// # Example
    /// ```
    /// use prioricalc::{error::RuntimeError, interpreter::operator::Operator};
    ///
    /// assert_eq!(Operator::Sub.apply(10.0, 4.0), Ok(6.0));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), Err(RuntimeError::DivisionByZero));
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn apply(self, left: f64, right: f64) -> Result<f64, RuntimeError> {
        Ok(match self {
               Self::Add => left + right,
               Self::Sub => left - right,
               Self::Mul => left * right,
               Self::Div => {
                   if right == 0.0 {
                       return Err(RuntimeError::DivisionByZero);
                   }
                   left / right
               },
           })
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
