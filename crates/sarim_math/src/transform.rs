// Affine transform constructors for Matrix4
//
// Every constructor returns a 4x4 matrix with last row [0, 0, 0, 1].
// Rotations are right-handed, angles in radians.

use crate::Matrix4;

impl Matrix4 {
    /// Translation by (x, y, z). Vectors (w=0) are unaffected.
    pub const fn translation(x: f64, y: f64, z: f64) -> Self {
        Matrix4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Non-uniform scale. A negative factor reflects across that axis.
    pub const fn scaling(x: f64, y: f64, z: f64) -> Self {
        Matrix4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotation_x(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Matrix4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, -sin, 0.0],
            [0.0, sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotation_y(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Matrix4::new([
            [cos, 0.0, sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotation_z(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Matrix4::new([
            [cos, -sin, 0.0, 0.0],
            [sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Shear: each component moves in proportion to the other two.
    ///
    /// `xy` is how much x moves in proportion to y, and so on.
    pub const fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        Matrix4::new([
            [1.0, xy, xz, 0.0],
            [yx, 1.0, yz, 0.0],
            [zx, zy, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Apply `next` after `self`, i.e. `next * self`.
    ///
    /// Lets a transform be read in the order it is applied:
    /// `Matrix4::rotation_x(a).then(Matrix4::scaling(5.0, 5.0, 5.0))`.
    pub fn then(self, next: Matrix4) -> Matrix4 {
        next * self
    }
}

/// Compose transforms right to left: `chain(&[a, b, c]) == a * b * c`.
///
/// The last transform in the slice is applied to a tuple first. An empty
/// slice yields the identity.
pub fn chain(transforms: &[Matrix4]) -> Matrix4 {
    transforms
        .iter()
        .fold(Matrix4::identity(), |acc, t| acc * *t)
}
