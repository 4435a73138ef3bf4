use crate::core::scalar::{self, Real};
use crate::error::MathError;
use crate::math::{Vector2, Vector3, Vector4};
use approx::{AbsDiffEq, RelativeEq};
use nalgebra as na;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A 2x2 column-major matrix
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix2<T> {
    pub cols: [Vector2<T>; 2],
}

/// A 3x3 column-major matrix
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix3<T> {
    pub cols: [Vector3<T>; 3],
}

/// A 4x4 column-major matrix; column 3 holds the translation of an affine transform
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix4<T> {
    pub cols: [Vector4<T>; 4],
}

macro_rules! impl_matrix_common {
    ($name:ident, $vec:ident, $n:literal, $nn:literal) => {
        impl<T: Real> $name<T> {
            /// Creates a new matrix with all elements set to zero
            #[inline]
            pub fn zero() -> Self {
                Self { cols: [$vec::zero(); $n] }
            }

            /// Creates a matrix with `s` on the diagonal and zero elsewhere
            #[inline]
            pub fn from_diagonal(s: T) -> Self {
                let mut m = Self::zero();
                for i in 0..$n {
                    m.cols[i][i] = s;
                }
                m
            }

            /// Creates a diagonal matrix from the components of `v`
            #[inline]
            pub fn from_diagonal_vector(v: $vec<T>) -> Self {
                let mut m = Self::zero();
                for i in 0..$n {
                    m.cols[i][i] = v[i];
                }
                m
            }

            /// Creates a new identity matrix
            #[inline]
            pub fn identity() -> Self {
                Self::from_diagonal(T::one())
            }

            /// Creates a matrix from row-major nested arrays, the way it is written on paper
            pub fn from_rows(rows: [[T; $n]; $n]) -> Self {
                let mut m = Self::zero();
                for r in 0..$n {
                    for c in 0..$n {
                        m.cols[c][r] = rows[r][c];
                    }
                }
                m
            }

            /// Creates a matrix from column-major elements
            pub fn from_cols_array(values: [T; $nn]) -> Self {
                let mut m = Self::zero();
                for c in 0..$n {
                    for r in 0..$n {
                        m.cols[c][r] = values[c * $n + r];
                    }
                }
                m
            }

            /// Creates a matrix from a column-major slice of exactly N*N scalars
            pub fn from_cols_slice(values: &[T]) -> crate::Result<Self> {
                if values.len() != $nn {
                    return Err(MathError::LengthMismatch { expected: $nn, found: values.len() });
                }
                let mut m = Self::zero();
                for c in 0..$n {
                    m.cols[c] = $vec::from_slice(&values[c * $n..])?;
                }
                Ok(m)
            }

            /// Serializes column by column, each column N contiguous scalars
            pub fn to_cols_array(&self) -> [T; $nn] {
                let mut out = [T::zero(); $nn];
                for c in 0..$n {
                    for r in 0..$n {
                        out[c * $n + r] = self.cols[c][r];
                    }
                }
                out
            }

            /// Writes the column-major elements into the front of `out`
            pub fn write_cols_to_slice(&self, out: &mut [T]) -> crate::Result<()> {
                if out.len() < $nn {
                    return Err(MathError::LengthMismatch { expected: $nn, found: out.len() });
                }
                out[..$nn].copy_from_slice(&self.to_cols_array());
                Ok(())
            }

            #[inline]
            pub fn col(&self, index: usize) -> $vec<T> {
                self.cols[index]
            }

            /// Materializes row `index` as a vector
            #[inline]
            pub fn row(&self, index: usize) -> $vec<T> {
                let mut v = $vec::zero();
                for c in 0..$n {
                    v[c] = self.cols[c][index];
                }
                v
            }

            /// Returns the transpose of the matrix
            #[inline]
            pub fn transpose(&self) -> Self {
                let mut m = Self::zero();
                for c in 0..$n {
                    m.cols[c] = self.row(c);
                }
                m
            }

            /// Transposes and multiplies every element by `s` in one pass
            #[inline]
            pub fn transpose_scaled(&self, s: T) -> Self {
                let mut m = Self::zero();
                for c in 0..$n {
                    m.cols[c] = self.row(c) * s;
                }
                m
            }

            /// Multiplies the matrix by a column vector
            #[inline]
            pub fn mul_vector(&self, v: $vec<T>) -> $vec<T> {
                let mut result = $vec::zero();
                for c in 0..$n {
                    result += self.cols[c] * v[c];
                }
                result
            }

            /// Multiplies the matrix by another matrix
            pub fn mul_matrix(&self, other: &Self) -> Self {
                let mut m = Self::zero();
                for c in 0..$n {
                    m.cols[c] = self.mul_vector(other.cols[c]);
                }
                m
            }

            /// Divides every element by `s`, yielding the zero matrix when `s` is near zero
            #[inline]
            pub fn div_safe(&self, s: T) -> Self {
                *self * scalar::recip_safe(s)
            }

            /// Returns `1 / det` with raw float semantics
            #[inline]
            pub fn determinant_inverse(&self) -> T {
                self.determinant().recip()
            }

            /// Returns `1 / det`, or zero when `|det| <= T::ZERO_EPSILON`.
            ///
            /// The threshold is absolute and does not scale with the matrix, so a
            /// small but invertible f32 matrix (e.g. `Matrix4::from_diagonal(0.03)`,
            /// det ≈ 8.1e-7) counts as singular.
            #[inline]
            pub fn determinant_inverse_safe(&self) -> T {
                scalar::recip_safe(self.determinant())
            }

            /// Adjugate divided by the determinant without a singularity check
            pub fn inverse_unchecked(&self) -> Self {
                self.adjugate() * self.determinant_inverse()
            }

            /// Adjugate times the safe reciprocal of the determinant; a singular
            /// matrix yields the zero matrix.
            ///
            /// Singular means `|det| <= T::ZERO_EPSILON`, an absolute threshold that
            /// does not scale with the matrix. Matrices with tiny entries may need
            /// [`Self::inverse_unchecked`] instead.
            pub fn inverse_safe(&self) -> Self {
                let det = self.determinant();
                if scalar::is_zero(det) {
                    log::trace!("inverse_safe: singular {} (det = {})", stringify!($name), det);
                }
                self.adjugate() * scalar::recip_safe(det)
            }

            /// Returns the inverse of the matrix, or None if `|det| <= T::ZERO_EPSILON`
            /// (the same absolute threshold as [`Self::inverse_safe`])
            pub fn try_inverse(&self) -> Option<Self> {
                let det = self.determinant();
                if scalar::is_zero(det) {
                    return None;
                }
                Some(self.adjugate() * det.recip())
            }

            /// Sum of the diagonal elements
            #[inline]
            pub fn trace(&self) -> T {
                let mut sum = T::zero();
                for i in 0..$n {
                    sum = sum + self.cols[i][i];
                }
                sum
            }

            /// Convert to a nalgebra matrix
            #[inline]
            pub fn to_nalgebra(&self) -> na::SMatrix<T, $n, $n> {
                na::SMatrix::<T, $n, $n>::from_column_slice(&self.to_cols_array())
            }

            /// Convert from a nalgebra matrix
            pub fn from_nalgebra(m: &na::SMatrix<T, $n, $n>) -> Self {
                let mut out = Self::zero();
                for c in 0..$n {
                    for r in 0..$n {
                        out.cols[c][r] = m[(r, c)];
                    }
                }
                out
            }
        }

        impl<T: Real> Index<usize> for $name<T> {
            type Output = $vec<T>;
            #[inline]
            fn index(&self, index: usize) -> &$vec<T> {
                &self.cols[index]
            }
        }

        impl<T: Real> IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut $vec<T> {
                &mut self.cols[index]
            }
        }

        impl<T: Real> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                for r in 0..$n {
                    if r > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "[ ")?;
                    for c in 0..$n {
                        if c > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", self.cols[c][r])?;
                    }
                    write!(f, " ]")?;
                }
                Ok(())
            }
        }

        impl<T: Real> Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(mut self, rhs: Self) -> Self::Output {
                for c in 0..$n {
                    self.cols[c] += rhs.cols[c];
                }
                self
            }
        }

        impl<T: Real> Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(mut self, rhs: Self) -> Self::Output {
                for c in 0..$n {
                    self.cols[c] -= rhs.cols[c];
                }
                self
            }
        }

        impl<T: Real> Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(mut self) -> Self::Output {
                for c in 0..$n {
                    self.cols[c] = -self.cols[c];
                }
                self
            }
        }

        impl<T: Real> Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(mut self, rhs: T) -> Self::Output {
                for c in 0..$n {
                    self.cols[c] *= rhs;
                }
                self
            }
        }

        impl<T: Real> Div<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn div(mut self, rhs: T) -> Self::Output {
                for c in 0..$n {
                    self.cols[c] = self.cols[c] / rhs;
                }
                self
            }
        }

        impl<T: Real> Mul<$vec<T>> for $name<T> {
            type Output = $vec<T>;
            #[inline]
            fn mul(self, rhs: $vec<T>) -> Self::Output {
                self.mul_vector(rhs)
            }
        }

        impl<T: Real> Mul for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                self.mul_matrix(&rhs)
            }
        }

        impl<T: Real> AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Real> SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Real> MulAssign for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = self.mul_matrix(&rhs);
            }
        }

        impl<T: Real> MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: Real> AbsDiffEq for $name<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                self.cols
                    .iter()
                    .zip(other.cols.iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<T: Real> RelativeEq for $name<T> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                self.cols
                    .iter()
                    .zip(other.cols.iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    };
}

impl_matrix_common!(Matrix2, Vector2, 2, 4);
impl_matrix_common!(Matrix3, Vector3, 3, 9);
impl_matrix_common!(Matrix4, Vector4, 4, 16);

/// Crop (keep the upper-left block) or pad (identity elsewhere) between orders
macro_rules! impl_matrix_resize {
    ($from:ident => $to:ident, $keep:literal) => {
        impl<T: Real> From<$from<T>> for $to<T> {
            fn from(m: $from<T>) -> Self {
                let mut out = Self::identity();
                for c in 0..$keep {
                    for r in 0..$keep {
                        out.cols[c][r] = m.cols[c][r];
                    }
                }
                out
            }
        }
    };
}

impl_matrix_resize!(Matrix2 => Matrix3, 2);
impl_matrix_resize!(Matrix2 => Matrix4, 2);
impl_matrix_resize!(Matrix3 => Matrix2, 2);
impl_matrix_resize!(Matrix3 => Matrix4, 3);
impl_matrix_resize!(Matrix4 => Matrix2, 2);
impl_matrix_resize!(Matrix4 => Matrix3, 3);

// === Matrix2 Implementation ===

impl<T: Real> Matrix2<T> {
    #[inline]
    pub fn from_cols(c0: Vector2<T>, c1: Vector2<T>) -> Self {
        Self { cols: [c0, c1] }
    }

    /// Returns the determinant of the matrix
    #[inline]
    pub fn determinant(&self) -> T {
        let [a, b] = self.cols;
        a.x * b.y - b.x * a.y
    }

    /// Transposed cofactor matrix
    #[inline]
    pub fn adjugate(&self) -> Self {
        let [a, b] = self.cols;
        Self::from_cols(Vector2::new(b.y, -a.y), Vector2::new(-b.x, a.x))
    }
}

// === Matrix3 Implementation ===

impl<T: Real> Matrix3<T> {
    #[inline]
    pub fn from_cols(c0: Vector3<T>, c1: Vector3<T>, c2: Vector3<T>) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Returns the determinant of the matrix (scalar triple product of the columns)
    #[inline]
    pub fn determinant(&self) -> T {
        let [a, b, c] = self.cols;
        a.dot(&b.cross(&c))
    }

    /// Transposed cofactor matrix; its rows are the cross products of column pairs
    pub fn adjugate(&self) -> Self {
        let [a, b, c] = self.cols;
        Self::from_cols(b.cross(&c), c.cross(&a), a.cross(&b)).transpose()
    }
}

// === Matrix4 Implementation ===

/// 2x2 minors of rows (0, 1) and rows (2, 3), shared by the determinant and inverse
struct Minors4<T> {
    s: [T; 6],
    c: [T; 6],
}

impl<T: Real> Matrix4<T> {
    #[inline]
    pub fn from_cols(c0: Vector4<T>, c1: Vector4<T>, c2: Vector4<T>, c3: Vector4<T>) -> Self {
        Self { cols: [c0, c1, c2, c3] }
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> T {
        self.cols[col][row]
    }

    fn minors(&self) -> Minors4<T> {
        let m = |r, c| self.at(r, c);
        Minors4 {
            s: [
                m(0, 0) * m(1, 1) - m(1, 0) * m(0, 1),
                m(0, 0) * m(1, 2) - m(1, 0) * m(0, 2),
                m(0, 0) * m(1, 3) - m(1, 0) * m(0, 3),
                m(0, 1) * m(1, 2) - m(1, 1) * m(0, 2),
                m(0, 1) * m(1, 3) - m(1, 1) * m(0, 3),
                m(0, 2) * m(1, 3) - m(1, 2) * m(0, 3),
            ],
            c: [
                m(2, 0) * m(3, 1) - m(3, 0) * m(2, 1),
                m(2, 0) * m(3, 2) - m(3, 0) * m(2, 2),
                m(2, 0) * m(3, 3) - m(3, 0) * m(2, 3),
                m(2, 1) * m(3, 2) - m(3, 1) * m(2, 2),
                m(2, 1) * m(3, 3) - m(3, 1) * m(2, 3),
                m(2, 2) * m(3, 3) - m(3, 2) * m(2, 3),
            ],
        }
    }

    /// Returns the determinant of the matrix
    pub fn determinant(&self) -> T {
        let Minors4 { s, c } = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Transposed cofactor matrix, built from the same 2x2 minors as the determinant
    pub fn adjugate(&self) -> Self {
        let Minors4 { s, c } = self.minors();
        let a = |r, col| self.at(r, col);

        Self::from_rows([
            [
                a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
                -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
                a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
                -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],
            ],
            [
                -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
                a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
                -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
                a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],
            ],
            [
                a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
                -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
                a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
                -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],
            ],
            [
                -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
                a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
                -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
                a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0],
            ],
        ])
    }

    /// Multiplies the matrix by a 3D point (w = 1) and divides by the resulting w
    #[inline]
    pub fn mul_point(&self, p: Vector3<T>) -> Vector3<T> {
        self.mul_vector(Vector4::point(p)).project_homogeneous()
    }

    /// Multiplies the matrix by a 3D direction (w = 0)
    #[inline]
    pub fn mul_direction(&self, v: Vector3<T>) -> Vector3<T> {
        self.mul_vector(Vector4::direction(v)).xyz()
    }

    /// Extract the upper-left 3x3 matrix (linear part)
    #[inline]
    pub fn to_matrix3(&self) -> Matrix3<T> {
        Matrix3::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjugate_of_identity_is_identity() {
        assert_eq!(Matrix4::<f64>::identity().adjugate(), Matrix4::identity());
        assert_eq!(Matrix3::<f32>::identity().adjugate(), Matrix3::identity());
        assert_eq!(Matrix2::<f32>::identity().adjugate(), Matrix2::identity());
    }

    #[test]
    fn row_reads_across_columns() {
        let m = Matrix3::<f64>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.row(1), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m.col(1), Vector3::new(2.0, 5.0, 8.0));
        assert_eq!(m.to_cols_array(), [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
    }
}
