use log::{debug, trace};

use crate::{
    error::{EvalError, ParseError},
    interpreter::{
        lexer::{Token, tokenize},
        reducer::reduce,
        resolver::resolve_parentheses,
    },
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// The stages a single evaluation goes through.
///
/// An evaluation moves strictly forward through the stages. Any error ends it
/// immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Nothing has been read yet.
    Start,
    /// The input has been split into tokens.
    Tokenized,
    /// Parenthesized groups are being replaced by their values.
    ResolvingParens,
    /// No parenthesis is left.
    Flat,
    /// The flat sequence has been reduced to a value.
    Reduced,
}

/// Holds the working state of one evaluation.
///
/// An `Evaluation` is created for a single input and driven by
/// [`Evaluation::run`]; nothing is shared between evaluations.
#[derive(Debug)]
pub struct Evaluation<'a> {
    source: &'a str,
    stage:  Stage,
    tokens: Vec<Token>,
}

impl<'a> Evaluation<'a> {
    /// Creates an evaluation of `source` in the [`Stage::Start`] stage.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source,
               stage: Stage::Start,
               tokens: Vec::new() }
    }

    /// Returns the stage the evaluation has reached.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Runs the evaluation to completion.
    ///
    /// On failure the evaluation stays at the last stage it reached, which
    /// [`Evaluation::stage`] reports.
    ///
    /// # Errors
    /// - [`ParseError::InvalidCharacter`] if the input cannot be tokenized.
    /// - [`ParseError::UnbalancedParentheses`] if a parenthesis has no
    ///   partner.
    /// - Any structural or arithmetic error raised while reducing.
    pub fn run(&mut self) -> EvalResult<f64> {
        self.tokens = tokenize(self.source)?;
        self.advance(Stage::Tokenized);

        self.advance(Stage::ResolvingParens);
        resolve_parentheses(&mut self.tokens)?;

        if self.tokens.iter().any(Token::is_paren) {
            return Err(ParseError::UnbalancedParentheses.into());
        }
        self.advance(Stage::Flat);

        let value = reduce(&self.tokens)?;
        self.advance(Stage::Reduced);

        Ok(value)
    }

    fn advance(&mut self, next: Stage) {
        trace!("{:?} -> {next:?} with {} tokens", self.stage, self.tokens.len());
        self.stage = next;
    }
}

/// Evaluates an expression and returns its value.
///
/// This is the main entry point for typed evaluation. See
/// [`crate::try_evaluate`] for the public wrapper.
///
/// # Errors
/// Returns the first error raised by any stage.
pub fn evaluate_expression(source: &str) -> EvalResult<f64> {
    Evaluation::new(source).run().inspect_err(|e| debug!("evaluating {source:?} failed: {e}"))
}
