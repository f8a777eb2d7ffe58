//! Shape trait for ray-object intersection.

use crate::{Intersection, ShapeResult};
use sarim_math::{Matrix4, Ray};

/// Identifies the shape an [`Intersection`] came from.
///
/// Ids are chosen by the caller (typically an index into its own shape list)
/// so intersections never borrow the shape that produced them.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub usize);

/// Trait for objects that can be intersected by rays.
///
/// Implementors describe themselves in object space; [`Shape::intersect`]
/// takes care of moving world-space rays into that space.
pub trait Shape: Send + Sync {
    /// Identifier stamped on every intersection this shape produces.
    fn id(&self) -> ShapeId;

    /// Object-to-world transform.
    fn transform(&self) -> &Matrix4;

    /// Replace the object-to-world transform.
    fn set_transform(&mut self, transform: Matrix4);

    /// Intersect a ray already expressed in object space.
    fn local_intersect(&self, local_ray: &Ray) -> ShapeResult<Vec<Intersection>>;

    /// Intersect a world-space ray.
    ///
    /// Fails if the transform is singular or the ray is degenerate. A miss is
    /// an empty list, not an error.
    fn intersect(&self, ray: &Ray) -> ShapeResult<Vec<Intersection>> {
        let inverse = self.transform().inverse().map_err(|err| {
            log::debug!("Shape {:?} has a non-invertible transform: {}", self.id(), err);
            err
        })?;
        self.local_intersect(&ray.transform(&inverse))
    }
}
