/// The evaluator module runs one evaluation from text to value.
///
/// It drives the other components in order: tokenizing, resolving every
/// parenthesized group from the inside out, and reducing what is left.
///
/// # Responsibilities
/// - Threads the token sequence through each stage.
/// - Rejects parentheses left over once no matched pair remains.
/// - Logs stage transitions for diagnostics.
pub mod evaluator;
/// The lexer module tokenizes the input text.
///
/// The lexer reads the raw text and produces numbers, operators and
/// parentheses. It is the first stage of an evaluation.
///
/// # Responsibilities
/// - Skips whitespace.
/// - Groups runs of digits and dots into numeric literals.
/// - Reports the first unknown character with its position.
pub mod lexer;
/// Numeric operands as they flow through the token sequence.
pub mod number;
/// The four binary arithmetic operators and their precedence.
pub mod operator;
/// The reducer collapses a flat token sequence into a single value.
///
/// Multiplicative operators are combined first, then additive ones, each
/// level from left to right.
pub mod reducer;
/// The resolver finds and removes parenthesized groups.
///
/// Each group is reduced on its own and replaced by its value, innermost
/// first, until no matched pair is left.
pub mod resolver;
