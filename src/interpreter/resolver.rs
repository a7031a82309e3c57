use log::debug;

use crate::{
    error::{EvalError, ParseError},
    interpreter::{lexer::Token, reducer::reduce},
};

/// Finds the innermost parenthesized group.
///
/// The scan goes left to right and remembers the most recent `(`. The first
/// `)` seen after it closes that group, which therefore contains no other
/// parentheses. A `)` met before any `(` is skipped.
///
/// # Parameters
/// - `tokens`: Token sequence to scan.
///
/// # Returns
/// `Some((open, close))`, the indices of the matching `(` and `)`, or `None`
/// if no `(` is followed by a `)`.
///
/// # Example
/// ```
/// use prioricalc::interpreter::{lexer::tokenize, resolver::find_innermost_parentheses};
///
/// let tokens = tokenize("(4+(5*2))").unwrap();
/// assert_eq!(find_innermost_parentheses(&tokens), Some((3, 7)));
///
/// let tokens = tokenize("(4+5").unwrap();
/// assert_eq!(find_innermost_parentheses(&tokens), None);
/// ```
#[must_use]
pub fn find_innermost_parentheses(tokens: &[Token]) -> Option<(usize, usize)> {
    let mut open = None;

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => open = Some(index),
            Token::RParen => {
                if let Some(start) = open {
                    return Some((start, index));
                }
            },
            _ => {},
        }
    }

    None
}

/// Replaces parenthesized groups by their values, innermost first.
///
/// Resolution continues while the sequence holds both a `(` and a `)`. Each
/// round reduces the tokens strictly between the innermost pair and splices
/// the result in place of the whole group, parentheses included. Unmatched
/// parentheses may remain afterwards; rejecting them is up to the caller.
///
/// # Errors
/// - [`ParseError::UnbalancedParentheses`] if both kinds of parenthesis are
///   present but no `(` is followed by a `)`, as in `)(`.
/// - Any error raised while reducing a group.
///
/// # Example
/// ```
/// use prioricalc::interpreter::{lexer::{Token, tokenize}, resolver::resolve_parentheses};
///
/// let mut tokens = tokenize("(1+(2*3))*2").unwrap();
/// resolve_parentheses(&mut tokens).unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0], Token::from(7.0));
/// ```
pub fn resolve_parentheses(tokens: &mut Vec<Token>) -> Result<(), EvalError> {
    while tokens.contains(&Token::LParen) && tokens.contains(&Token::RParen) {
        let (open, close) =
            find_innermost_parentheses(tokens).ok_or(ParseError::UnbalancedParentheses)?;

        let value = reduce(&tokens[open + 1..close])?;
        debug!("group at {open}..={close} reduced to {value}");

        tokens.splice(open..=close, [Token::from(value)]);
    }

    Ok(())
}
