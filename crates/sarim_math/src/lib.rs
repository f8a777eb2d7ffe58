//! Sarim math - tuples, matrices, transforms and rays for the ray tracer.

// Re-export glam for convenience
pub use glam;

mod approx;
mod error;
mod matrix;
mod ray;
mod transform;
mod tuple;

pub use approx::{float_eq, ApproxEq, EPSILON};
pub use error::{MathError, MathResult};
pub use matrix::{Matrix, Matrix4};
pub use ray::Ray;
pub use transform::chain;
pub use tuple::Tuple;
