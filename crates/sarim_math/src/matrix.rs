//! Square dense matrices.
//!
//! `Matrix<N>` is a row-major `N×N` grid of `f64`. The transform API only uses
//! [`Matrix4`]; other sizes are kept for general linear algebra.

use std::ops::{Index, Mul};

use glam::{DMat4, DVec4};

use crate::{ApproxEq, MathError, MathResult, Tuple};

/// Row-major square matrix.
#[derive(Debug, Copy, Clone)]
pub struct Matrix<const N: usize> {
    data: [[f64; N]; N],
}

/// 4×4 matrix used for affine transforms in homogeneous coordinates.
pub type Matrix4 = Matrix<4>;

impl<const N: usize> Matrix<N> {
    /// Create a matrix from its rows.
    pub const fn new(rows: [[f64; N]; N]) -> Self {
        Self { data: rows }
    }

    /// All-zero matrix.
    pub const fn zero() -> Self {
        Self {
            data: [[0.0; N]; N],
        }
    }

    /// The `N×N` identity.
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.data[i][i] = 1.0;
        }
        m
    }

    /// Matrix dimension.
    pub const fn size(&self) -> usize {
        N
    }

    /// Element at (`row`, `col`). Panics if out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    /// Set the element at (`row`, `col`). Panics if out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    /// Borrow the rows.
    pub fn rows(&self) -> &[[f64; N]; N] {
        &self.data
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self::zero();
        for row in 0..N {
            for col in 0..N {
                t.data[col][row] = self.data[row][col];
            }
        }
        t
    }

    /// Determinant, computed by Gaussian elimination with partial pivoting.
    pub fn determinant(&self) -> f64 {
        let mut a = self.data;
        let mut det = 1.0;

        for col in 0..N {
            let pivot = Self::pivot_row(&a, col);
            if a[pivot][col] == 0.0 {
                return 0.0;
            }
            if pivot != col {
                a.swap(pivot, col);
                det = -det;
            }
            det *= a[col][col];

            for row in (col + 1)..N {
                let factor = a[row][col] / a[col][col];
                for k in col..N {
                    a[row][k] -= factor * a[col][k];
                }
            }
        }

        det
    }

    /// Inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Fails with [`MathError::SingularMatrix`] when the determinant is within
    /// [`ApproxEq::EPSILON`] of zero.
    pub fn inverse(&self) -> MathResult<Self> {
        let determinant = self.determinant();
        if determinant.abs() < <Self as ApproxEq>::EPSILON || !determinant.is_finite() {
            return Err(MathError::SingularMatrix { determinant });
        }

        let mut a = self.data;
        let mut inv = Self::identity().data;

        for col in 0..N {
            let pivot = Self::pivot_row(&a, col);
            if pivot != col {
                a.swap(pivot, col);
                inv.swap(pivot, col);
            }

            let p = a[col][col];
            for k in 0..N {
                a[col][k] /= p;
                inv[col][k] /= p;
            }

            for row in 0..N {
                if row == col {
                    continue;
                }
                let factor = a[row][col];
                if factor == 0.0 {
                    continue;
                }
                for k in 0..N {
                    a[row][k] -= factor * a[col][k];
                    inv[row][k] -= factor * inv[col][k];
                }
            }
        }

        Ok(Self::new(inv))
    }

    /// Row index at or below `col` holding the largest magnitude in column `col`.
    fn pivot_row(a: &[[f64; N]; N], col: usize) -> usize {
        let mut best = col;
        for row in (col + 1)..N {
            if a[row][col].abs() > a[best][col].abs() {
                best = row;
            }
        }
        best
    }
}

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row][col]
    }
}

impl<const N: usize> Mul for Matrix<N> {
    type Output = Matrix<N>;

    fn mul(self, rhs: Matrix<N>) -> Matrix<N> {
        let mut out = Matrix::zero();
        for row in 0..N {
            for col in 0..N {
                out.data[row][col] = (0..N).map(|k| self.data[row][k] * rhs.data[k][col]).sum();
            }
        }
        out
    }
}

impl Mul<Tuple> for Matrix4 {
    type Output = Tuple;

    fn mul(self, t: Tuple) -> Tuple {
        (DMat4::from(self) * DVec4::from(t)).into()
    }
}

impl<const N: usize> ApproxEq for Matrix<N> {
    fn approx_eq_eps(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.approx_eq_eps(b, epsilon))
    }
}

impl<const N: usize> PartialEq for Matrix<N> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

// glam stores columns; our rows become its columns after a transpose.
impl From<Matrix4> for DMat4 {
    fn from(m: Matrix4) -> Self {
        DMat4::from_cols_array_2d(&m.data).transpose()
    }
}

impl From<DMat4> for Matrix4 {
    fn from(m: DMat4) -> Self {
        Matrix4::new(m.transpose().to_cols_array_2d())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_eq;

    fn sample_a() -> Matrix4 {
        Matrix4::new([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 8.0, 7.0, 6.0],
            [5.0, 4.0, 3.0, 2.0],
        ])
    }

    #[test]
    fn test_construct_and_inspect() {
        let mut m = Matrix4::zero();
        m.set(0, 3, 4.0);
        assert_eq!(m.get(0, 3), 4.0);
        assert_eq!(m[(0, 3)], 4.0);
        assert_eq!(m.size(), 4);

        let m2 = Matrix::<2>::new([[-3.0, 5.0], [1.0, -2.0]]);
        assert_eq!(m2.get(1, 0), 1.0);
    }

    #[test]
    fn test_equality() {
        assert_eq!(sample_a(), sample_a());

        let mut b = sample_a();
        b.set(2, 2, 7.0 + 1e-6);
        assert_eq!(sample_a(), b);

        b.set(2, 2, 7.1);
        assert_ne!(sample_a(), b);
    }

    #[test]
    fn test_multiply() {
        let b = Matrix4::new([
            [-2.0, 1.0, 2.0, 3.0],
            [3.0, 2.0, 1.0, -1.0],
            [4.0, 3.0, 6.0, 5.0],
            [1.0, 2.0, 7.0, 8.0],
        ]);
        let expected = Matrix4::new([
            [20.0, 22.0, 50.0, 48.0],
            [44.0, 54.0, 114.0, 108.0],
            [40.0, 58.0, 110.0, 102.0],
            [16.0, 26.0, 46.0, 42.0],
        ]);
        assert_eq!(sample_a() * b, expected);
    }

    #[test]
    fn test_multiply_tuple() {
        let m = Matrix4::new([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 4.0, 2.0],
            [8.0, 6.0, 4.0, 1.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let t = Tuple::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(m * t, Tuple::new(18.0, 24.0, 33.0, 1.0));
        assert_eq!(t.transform(&m), Tuple::new(18.0, 24.0, 33.0, 1.0));
    }

    #[test]
    fn test_identity() {
        assert_eq!(sample_a() * Matrix4::identity(), sample_a());
        let t = Tuple::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Matrix4::identity() * t, t);

        // A matrix of all ones is not the identity.
        let ones = Matrix4::new([[1.0; 4]; 4]);
        assert_ne!(sample_a() * ones, sample_a());

        let i3 = Matrix::<3>::identity();
        assert_eq!(i3.get(1, 1), 1.0);
        assert_eq!(i3.get(1, 2), 0.0);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix4::new([
            [0.0, 9.0, 3.0, 0.0],
            [9.0, 8.0, 0.0, 8.0],
            [1.0, 8.0, 5.0, 3.0],
            [0.0, 0.0, 5.0, 8.0],
        ]);
        let t = Matrix4::new([
            [0.0, 9.0, 1.0, 0.0],
            [9.0, 8.0, 8.0, 0.0],
            [3.0, 0.0, 5.0, 5.0],
            [0.0, 8.0, 3.0, 8.0],
        ]);
        assert_eq!(m.transpose(), t);
        assert_eq!(Matrix4::identity().transpose(), Matrix4::identity());
    }

    #[test]
    fn test_determinant() {
        let m2 = Matrix::<2>::new([[1.0, 5.0], [-3.0, 2.0]]);
        assert!(float_eq(m2.determinant(), 17.0));

        let m3 = Matrix::<3>::new([[1.0, 2.0, 6.0], [-5.0, 8.0, -4.0], [2.0, 6.0, 4.0]]);
        assert!(float_eq(m3.determinant(), -196.0));

        let m4 = Matrix4::new([
            [-2.0, -8.0, 3.0, 5.0],
            [-3.0, 1.0, 7.0, 3.0],
            [1.0, 2.0, -9.0, 6.0],
            [-6.0, 7.0, 7.0, -9.0],
        ]);
        assert!(float_eq(m4.determinant(), -4071.0));
    }

    #[test]
    fn test_inverse() {
        let m = Matrix4::new([
            [-5.0, 2.0, 6.0, -8.0],
            [1.0, -5.0, 1.0, 8.0],
            [7.0, 7.0, -6.0, -7.0],
            [1.0, -3.0, 7.0, 4.0],
        ]);
        let expected = Matrix4::new([
            [0.21805, 0.45113, 0.24060, -0.04511],
            [-0.80827, -1.45677, -0.44361, 0.52068],
            [-0.07895, -0.22368, -0.05263, 0.19737],
            [-0.52256, -0.81391, -0.30075, 0.30639],
        ]);
        assert!(m.inverse().unwrap().approx_eq_eps(&expected, 1e-4));
    }

    #[test]
    fn test_multiply_by_inverse_is_identity() {
        let m = Matrix4::new([
            [8.0, -5.0, 9.0, 2.0],
            [7.0, 5.0, 6.0, 1.0],
            [-6.0, 0.0, 9.0, 6.0],
            [-3.0, 0.0, -9.0, -4.0],
        ]);
        assert_eq!(m * m.inverse().unwrap(), Matrix4::identity());
    }

    #[test]
    fn test_product_times_inverse_recovers_factor() {
        let a = Matrix4::new([
            [3.0, -9.0, 7.0, 3.0],
            [3.0, -8.0, 2.0, -9.0],
            [-4.0, 4.0, 4.0, 1.0],
            [-6.0, 5.0, -1.0, 1.0],
        ]);
        let b = Matrix4::new([
            [8.0, 2.0, 2.0, 2.0],
            [3.0, -1.0, 7.0, 0.0],
            [7.0, 0.0, 5.0, 4.0],
            [6.0, -2.0, 0.0, 5.0],
        ]);
        let c = a * b;
        assert_eq!(c * b.inverse().unwrap(), a);
    }

    #[test]
    fn test_singular_matrix_is_rejected() {
        let m = Matrix4::new([
            [-4.0, 2.0, -2.0, -3.0],
            [9.0, 6.0, 2.0, 6.0],
            [0.0, -5.0, 1.0, -5.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        assert!(matches!(
            m.inverse(),
            Err(MathError::SingularMatrix { determinant }) if determinant == 0.0
        ));
    }

    #[test]
    fn test_glam_round_trip() {
        let m = sample_a();
        let g = DMat4::from(m);
        // glam is column-major: column 0 holds our first column
        assert_eq!(g.x_axis, DVec4::new(1.0, 5.0, 9.0, 5.0));
        assert_eq!(Matrix4::from(g), m);
    }
}
