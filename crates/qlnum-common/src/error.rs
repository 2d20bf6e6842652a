use thiserror::Error;

use crate::kind::NumericKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Shape mismatch in {op}: left has {left_len} elements, right has {right_len}")]
    ShapeMismatch {
        op: String,
        left_len: usize,
        right_len: usize,
    },
    #[error("Invalid argument kind: expected {expected}, got {actual}")]
    InvalidArgumentKind { expected: String, actual: String },
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn shape_mismatch(op: impl Into<String>, left_len: usize, right_len: usize) -> Self {
        Error::ShapeMismatch {
            op: op.into(),
            left_len,
            right_len,
        }
    }

    pub fn invalid_argument_kind(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Error::InvalidArgumentKind {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Shorthand for operators that only accept integral kinds.
    pub fn not_integral(op: &str, actual: NumericKind) -> Self {
        Error::invalid_argument_kind(format!("integral operand for {}", op), actual.to_string())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
