//! Errors raised by the math primitives.

use thiserror::Error;

/// Errors that can occur during tuple and matrix operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("Matrix is not invertible (determinant {determinant})")]
    SingularMatrix { determinant: f64 },

    #[error("Cannot normalize a zero-length tuple")]
    ZeroMagnitude,
}

pub type MathResult<T> = Result<T, MathError>;
