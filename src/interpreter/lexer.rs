use std::fmt;

use log::trace;
use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{number::Number, operator::Operator},
};

/// Represents a lexical token of an arithmetic expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric operands, such as `3`, `2.5`, `.5` or `5.`.
    ///
    /// Any run of digits and dots matches, including malformed ones such as
    /// `1.2.3`. Those are rejected when the value is read.
    #[regex(r"[0-9.]+", |lex| Number::Literal(lex.slice().to_string()))]
    Number(Number),
    /// `+`, `-`, `*` and `/`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any Unicode whitespace, including vertical tabs and no-break spaces.
    #[regex(r"\p{White_Space}+", logos::skip)]
    Ignored,
}

impl Token {
    /// Whether this token is `(` or `)`.
    #[must_use]
    pub const fn is_paren(&self) -> bool {
        matches!(self, Self::LParen | Self::RParen)
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Number(Number::Value(value))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits an expression into tokens.
///
/// Whitespace between tokens is dropped. Tokenizing stops at the first
/// character that is neither whitespace, a digit, a dot, an operator nor a
/// parenthesis.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] with the offending character and
/// its byte offset.
///
/// # Example
/// ```
/// use prioricalc::interpreter::{
///     lexer::{Token, tokenize},
///     number::Number,
///     operator::Operator,
/// };
///
/// let tokens = tokenize("( 4 + 5 ) * 3").unwrap();
/// assert_eq!(tokens,
///            vec![Token::LParen,
///                 Token::Number(Number::Literal("4".to_string())),
///                 Token::Operator(Operator::Add),
///                 Token::Number(Number::Literal("5".to_string())),
///                 Token::RParen,
///                 Token::Operator(Operator::Mul),
///                 Token::Number(Number::Literal("3".to_string()))]);
///
/// assert!(tokenize("4 + @").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            trace!("token {tok} at {:?}", lexer.span());
            tokens.push(tok);
        } else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(ParseError::InvalidCharacter { character,
                                                      position: lexer.span().start });
        }
    }

    Ok(tokens)
}
