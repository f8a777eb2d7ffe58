//! Approximate floating-point comparison.

/// Absolute tolerance used by every approximate comparison in the kernel.
pub const EPSILON: f64 = 1e-5;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn float_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Component-wise comparison with an absolute tolerance.
pub trait ApproxEq {
    /// Default tolerance for [`ApproxEq::approx_eq`].
    const EPSILON: f64 = EPSILON;

    /// Compare with an explicit tolerance.
    fn approx_eq_eps(&self, other: &Self, epsilon: f64) -> bool;

    /// Compare with [`ApproxEq::EPSILON`].
    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, Self::EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &Self, epsilon: f64) -> bool {
        (self - other).abs() < epsilon
    }
}
