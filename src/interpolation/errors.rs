//! Interpolation error types.
//!
//! ┌ [`InterpolationError`] : rejected sample data or evaluation points
//! └ [`SampleError`]        : sample loading failures

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("non-finite evaluation point {got}")]
    NonFinitePoint { got: f64 },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },
}


/// Sample loading errors.
///
/// ┌ the resource could not be read
/// ├ a line is absent or blank
/// ├ a token is not a real number
/// └ the two lines disagree in length
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("failed to read samples: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing sample line {line}")]
    MissingLine { line: usize },

    #[error("invalid number {token:?} on line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("unequal length: x has {x_len} elements, fx has {fx_len}")]
    UnequalLength { x_len: usize, fx_len: usize },
}
