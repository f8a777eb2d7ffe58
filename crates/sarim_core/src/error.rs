//! Errors raised by intersection and hit selection.

use sarim_math::MathError;
use thiserror::Error;

/// Errors that can occur while intersecting rays with shapes.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    #[error("Ray direction has zero length")]
    DegenerateRay,

    #[error("No non-negative intersection found")]
    NoHit,
}

pub type ShapeResult<T> = Result<T, ShapeError>;
