use crate::{Matrix4, Tuple};

/// A ray in 3D space with an origin point and a direction vector.
///
/// The origin should be a point (`w = 1`) and the direction a vector
/// (`w = 0`). This is not checked.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Tuple,
    pub direction: Tuple,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Tuple {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Tuple {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction. Negative t is allowed.
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// Apply `matrix` to both the origin and the direction.
    ///
    /// Translation leaves the direction unchanged since it has w = 0.
    pub fn transform(&self, matrix: &Matrix4) -> Ray {
        Ray::new(*matrix * self.origin, *matrix * self.direction)
    }
}
