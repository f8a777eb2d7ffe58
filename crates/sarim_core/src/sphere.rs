//! Unit sphere primitive.

use crate::{Intersection, Shape, ShapeError, ShapeId, ShapeResult};
use sarim_math::{Matrix4, Ray, Tuple};

/// A unit sphere centered at the object-space origin.
///
/// Position, size and orientation in the world come from its transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    id: ShapeId,
    transform: Matrix4,
}

impl Sphere {
    /// Create a sphere with the identity transform.
    pub fn new() -> Self {
        Self {
            id: ShapeId::default(),
            transform: Matrix4::identity(),
        }
    }

    /// Set the object-to-world transform.
    pub fn with_transform(mut self, transform: Matrix4) -> Self {
        self.transform = transform;
        self
    }

    /// Set the id stamped on intersections.
    pub fn with_id(mut self, id: ShapeId) -> Self {
        self.id = id;
        self
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Sphere {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    fn set_transform(&mut self, transform: Matrix4) {
        self.transform = transform;
    }

    fn local_intersect(&self, ray: &Ray) -> ShapeResult<Vec<Intersection>> {
        let sphere_to_ray = ray.origin - Tuple::ORIGIN;

        let a = ray.direction.dot(ray.direction);
        if a == 0.0 || !a.is_finite() {
            return Err(ShapeError::DegenerateRay);
        }
        let b = 2.0 * ray.direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Ok(Vec::new());
        }

        // Tangent rays yield the same t twice
        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);

        Ok(vec![
            Intersection::new(t1, self.id),
            Intersection::new(t2, self.id),
        ])
    }
}
