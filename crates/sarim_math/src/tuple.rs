//! Homogeneous 4-component tuples.
//!
//! One type covers points (`w = 1`), vectors (`w = 0`) and colors (`w = 1`,
//! red/green/blue stored in x/y/z). Arithmetic is delegated to glam's `DVec4`.

use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DVec3, DVec4};

use crate::{ApproxEq, MathError, MathResult, Matrix4};

/// A 4-component homogeneous coordinate.
#[derive(Debug, Default, Copy, Clone)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Tuple {
    /// All components zero (the zero vector).
    pub const ZERO: Tuple = Tuple::new(0.0, 0.0, 0.0, 0.0);

    /// The point at the origin.
    pub const ORIGIN: Tuple = Tuple::point(0.0, 0.0, 0.0);

    /// Create a tuple from all four components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Create a point (`w = 1`).
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Create a vector (`w = 0`).
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Create a color. Stored like a point; `w` carries no meaning.
    pub const fn color(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    #[inline]
    pub fn red(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn green(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn blue(&self) -> f64 {
        self.z
    }

    /// Length over all four components.
    ///
    /// For vectors (`w = 0`) this is the usual 3D Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        DVec4::from(*self).length()
    }

    /// Scale to unit magnitude.
    ///
    /// Returns [`MathError::ZeroMagnitude`] instead of producing NaN components.
    pub fn normalize(&self) -> MathResult<Tuple> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return Err(MathError::ZeroMagnitude);
        }
        Ok(*self / magnitude)
    }

    /// Dot product over all four components.
    pub fn dot(&self, other: Tuple) -> f64 {
        DVec4::from(*self).dot(DVec4::from(other))
    }

    /// 3D cross product. Only the x/y/z parts are used; the result is a vector.
    pub fn cross(&self, other: Tuple) -> Tuple {
        let c = DVec3::new(self.x, self.y, self.z).cross(DVec3::new(other.x, other.y, other.z));
        Tuple::vector(c.x, c.y, c.z)
    }

    /// Component-wise product, used to blend colors.
    pub fn hadamard(&self, other: Tuple) -> Tuple {
        (DVec4::from(*self) * DVec4::from(other)).into()
    }

    /// Clamp every component to `[low, high]`.
    pub fn clamp(&self, low: f64, high: f64) -> Tuple {
        DVec4::from(*self)
            .clamp(DVec4::splat(low), DVec4::splat(high))
            .into()
    }

    /// Apply a 4×4 transform (homogeneous multiply).
    pub fn transform(&self, matrix: &Matrix4) -> Tuple {
        *matrix * *self
    }
}

impl From<DVec4> for Tuple {
    fn from(v: DVec4) -> Self {
        Tuple::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Tuple> for DVec4 {
    fn from(t: Tuple) -> Self {
        DVec4::new(t.x, t.y, t.z, t.w)
    }
}

impl ApproxEq for Tuple {
    fn approx_eq_eps(&self, other: &Self, epsilon: f64) -> bool {
        self.x.approx_eq_eps(&other.x, epsilon)
            && self.y.approx_eq_eps(&other.y, epsilon)
            && self.z.approx_eq_eps(&other.z, epsilon)
            && self.w.approx_eq_eps(&other.w, epsilon)
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Add for Tuple {
    type Output = Tuple;

    fn add(self, rhs: Tuple) -> Tuple {
        (DVec4::from(self) + DVec4::from(rhs)).into()
    }
}

impl Sub for Tuple {
    type Output = Tuple;

    fn sub(self, rhs: Tuple) -> Tuple {
        (DVec4::from(self) - DVec4::from(rhs)).into()
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Tuple {
        (-DVec4::from(self)).into()
    }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;

    fn mul(self, s: f64) -> Tuple {
        (DVec4::from(self) * s).into()
    }
}

impl Mul<Tuple> for f64 {
    type Output = Tuple;

    fn mul(self, t: Tuple) -> Tuple {
        t * self
    }
}

impl Div<f64> for Tuple {
    type Output = Tuple;

    fn div(self, s: f64) -> Tuple {
        (DVec4::from(self) / s).into()
    }
}
