use thiserror::Error;

/// Represents arithmetic failures raised while reducing a well-formed
/// sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeError {
    /// The right operand of `/` was exactly zero.
    #[error("Division by zero.")]
    DivisionByZero,
}
