//! Sarim Core - shapes, ray intersection and image output.
//!
//! This crate provides:
//!
//! - **Shapes**: the `Shape` trait and the unit `Sphere`
//! - **Intersections**: `Intersection` records and `hit` selection
//! - **Canvas**: a color grid with plain PPM export
//!
//! # Example
//!
//! ```
//! use sarim_core::{hit, Shape, Sphere};
//! use sarim_math::{Matrix4, Ray, Tuple};
//!
//! let sphere = Sphere::new().with_transform(Matrix4::scaling(2.0, 2.0, 2.0));
//! let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
//!
//! let mut xs = sphere.intersect(&ray)?;
//! let visible = hit(&mut xs)?;
//! assert!((visible.t - 3.0).abs() < 1e-5);
//! # Ok::<(), sarim_core::ShapeError>(())
//! ```

pub mod canvas;
mod error;
mod intersection;
mod shape;
mod sphere;

// Re-export commonly used types
pub use canvas::{Canvas, CanvasError, PpmOptions};
pub use error::{ShapeError, ShapeResult};
pub use intersection::{hit, intersections, sort_intersections, Intersection};
pub use shape::{Shape, ShapeId};
pub use sphere::Sphere;
