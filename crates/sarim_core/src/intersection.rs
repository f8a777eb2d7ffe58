//! Intersections and visible-hit selection.

use crate::{ShapeError, ShapeId, ShapeResult};

/// Record of a ray crossing a shape's surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Intersection {
    /// Ray parameter where the intersection occurs
    pub t: f64,
    /// Shape that produced the intersection
    pub object: ShapeId,
}

impl Intersection {
    pub fn new(t: f64, object: ShapeId) -> Self {
        Self { t, object }
    }
}

/// Sort intersections ascending by `t`. Equal values keep their order.
pub fn sort_intersections(xs: &mut [Intersection]) {
    xs.sort_by(|a, b| a.t.total_cmp(&b.t));
}

/// Merge several intersection lists into one sorted list.
pub fn intersections<I>(lists: I) -> Vec<Intersection>
where
    I: IntoIterator<Item = Vec<Intersection>>,
{
    let mut all: Vec<Intersection> = lists.into_iter().flatten().collect();
    sort_intersections(&mut all);
    all
}

/// The visible intersection: lowest non-negative `t`.
///
/// Sorts `xs` in place. Returns [`ShapeError::NoHit`] when the list is empty or
/// every intersection lies behind the ray origin.
pub fn hit(xs: &mut [Intersection]) -> ShapeResult<Intersection> {
    sort_intersections(xs);
    xs.iter()
        .find(|i| i.t >= 0.0)
        .copied()
        .ok_or(ShapeError::NoHit)
}
