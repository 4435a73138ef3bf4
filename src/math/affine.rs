//! Transform factories, quick structural inverses and decomposition.
//!
//! Composite factories always build the linear part as rotation times scale
//! (`R * S`), so scale is applied to a column vector first. Translation only
//! exists for 4x4 matrices and lives in column 3.
//!
//! The `quick_inverse_*` functions trust the structure their name states and do
//! not check it. Feeding them any other matrix gives a wrong answer, not an error.

use crate::core::scalar::{self, Real};
use crate::math::{Matrix2, Matrix3, Matrix4, Quaternion, RotationOrder, Vector2, Vector3, Vector4};

macro_rules! impl_quick_inverse {
    ($name:ident, $n:literal) => {
        impl<T: Real> $name<T> {
            /// Inverse of a pure rotation: the transpose
            #[inline]
            pub fn quick_inverse_rotation(&self) -> Self {
                self.transpose()
            }

            /// Inverse of a pure diagonal scale: reciprocal of each diagonal element
            #[inline]
            pub fn quick_inverse_scale(&self) -> Self {
                let mut m = Self::zero();
                for i in 0..$n {
                    m.cols[i][i] = self.cols[i][i].recip();
                }
                m
            }

            /// Inverse of rotation times scale: the transpose with row `i` divided by
            /// the squared length of column `i`
            pub fn quick_inverse_rotation_scale(&self) -> Self {
                let mut m = self.transpose();
                for i in 0..$n {
                    let k = self.cols[i].length_squared().recip();
                    for j in 0..$n {
                        m.cols[j][i] = m.cols[j][i] * k;
                    }
                }
                m
            }
        }
    };
}

impl_quick_inverse!(Matrix2, 2);
impl_quick_inverse!(Matrix3, 3);
impl_quick_inverse!(Matrix4, 4);

// === Matrix2 Implementation ===

impl<T: Real> Matrix2<T> {
    /// Counter-clockwise rotation in radians
    pub fn from_angle_rad(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(Vector2::new(c, s), Vector2::new(-s, c))
    }

    /// Counter-clockwise rotation in degrees
    #[inline]
    pub fn from_angle_deg(angle: T) -> Self {
        Self::from_angle_rad(scalar::deg_to_rad(angle))
    }

    #[inline]
    pub fn from_scale(scale: Vector2<T>) -> Self {
        Self::from_diagonal_vector(scale)
    }

    /// Rotation (degrees) applied after scale
    #[inline]
    pub fn from_angle_scale_deg(angle: T, scale: Vector2<T>) -> Self {
        Self::from_angle_deg(angle) * Self::from_scale(scale)
    }

    /// Rotation angle in degrees, assuming unit-length columns
    #[inline]
    pub fn to_angle_deg(&self) -> T {
        scalar::rad_to_deg(self.cols[0].y.atan2(self.cols[0].x))
    }

    /// Splits into (angle in degrees, scale) using column lengths as the scale
    pub fn decompose_angle_scale_deg(&self) -> (T, Vector2<T>) {
        let scale = Vector2::new(self.cols[0].length(), self.cols[1].length());
        let unit = Self::from_cols(self.cols[0].div_safe(scale.x), self.cols[1].div_safe(scale.y));
        (unit.to_angle_deg(), scale)
    }
}

// === Matrix3 Implementation ===

impl<T: Real> Matrix3<T> {
    /// Rotation of `angle` radians about `axis` (normalized internally)
    pub fn from_axis_angle_rad(axis: Vector3<T>, angle: T) -> Self {
        let a = axis.normalize();
        let (s, c) = angle.sin_cos();
        let t = T::one() - c;

        Self::from_rows([
            [t * a.x * a.x + c, t * a.x * a.y - s * a.z, t * a.x * a.z + s * a.y],
            [t * a.x * a.y + s * a.z, t * a.y * a.y + c, t * a.y * a.z - s * a.x],
            [t * a.x * a.z - s * a.y, t * a.y * a.z + s * a.x, t * a.z * a.z + c],
        ])
    }

    /// Rotation of `angle` degrees about `axis`
    #[inline]
    pub fn from_axis_angle_deg(axis: Vector3<T>, angle: T) -> Self {
        Self::from_axis_angle_rad(axis, scalar::deg_to_rad(angle))
    }

    /// Creates a new 3x3 scaling matrix
    #[inline]
    pub fn from_scale(scale: Vector3<T>) -> Self {
        Self::from_diagonal_vector(scale)
    }

    /// Euler rotation (degrees) applied after scale
    #[inline]
    pub fn from_euler_scale_deg(order: RotationOrder, angles: Vector3<T>, scale: Vector3<T>) -> Self {
        Self::from_euler_deg(order, angles).scale_columns(scale)
    }

    /// Axis-angle rotation (degrees) applied after scale
    #[inline]
    pub fn from_axis_angle_scale_deg(axis: Vector3<T>, angle: T, scale: Vector3<T>) -> Self {
        Self::from_axis_angle_deg(axis, angle).scale_columns(scale)
    }

    /// `self * diag(scale)` without the full product
    #[inline]
    pub fn scale_columns(&self, scale: Vector3<T>) -> Self {
        Self::from_cols(self.cols[0] * scale.x, self.cols[1] * scale.y, self.cols[2] * scale.z)
    }

    /// Column lengths, i.e. the scale of a rotation-scale matrix
    #[inline]
    pub fn column_lengths(&self) -> Vector3<T> {
        Vector3::new(self.cols[0].length(), self.cols[1].length(), self.cols[2].length())
    }

    /// Divides each column by its length; zero-length columns stay zero
    pub fn normalize_columns(&self) -> Self {
        let scale = self.column_lengths();
        Self::from_cols(
            self.cols[0].div_safe(scale.x),
            self.cols[1].div_safe(scale.y),
            self.cols[2].div_safe(scale.z),
        )
    }

    /// Rotation as (unit axis, angle in degrees), assuming unit-length columns
    pub fn to_axis_angle_deg(&self) -> (Vector3<T>, T) {
        Quaternion::from_rotation_matrix(self).to_axis_angle_deg()
    }

    /// Splits into (Euler angles in degrees, scale), measuring scale first and
    /// normalizing columns before extracting angles
    pub fn decompose_euler_scale_deg(&self, order: RotationOrder) -> (Vector3<T>, Vector3<T>) {
        let scale = self.column_lengths();
        (self.normalize_columns().to_euler_deg(order), scale)
    }

    /// Splits into (unit axis, angle in degrees, scale)
    pub fn decompose_axis_angle_scale_deg(&self) -> (Vector3<T>, T, Vector3<T>) {
        let scale = self.column_lengths();
        let (axis, angle) = self.normalize_columns().to_axis_angle_deg();
        (axis, angle, scale)
    }
}

// === Matrix4 Implementation ===

impl<T: Real> Matrix4<T> {
    /// Creates a 4x4 matrix from a 3x3 linear part and a translation
    #[inline]
    pub fn from_linear_translation(linear: Matrix3<T>, translation: Vector3<T>) -> Self {
        Self::from_cols(
            Vector4::direction(linear.cols[0]),
            Vector4::direction(linear.cols[1]),
            Vector4::direction(linear.cols[2]),
            Vector4::point(translation),
        )
    }

    /// Creates a new 4x4 translation matrix
    #[inline]
    pub fn from_translation(translation: Vector3<T>) -> Self {
        Self::from_linear_translation(Matrix3::identity(), translation)
    }

    /// Creates a new 4x4 scaling matrix
    #[inline]
    pub fn from_scale(scale: Vector3<T>) -> Self {
        Self::from(Matrix3::from_scale(scale))
    }

    #[inline]
    pub fn from_axis_angle_rad(axis: Vector3<T>, angle: T) -> Self {
        Self::from(Matrix3::from_axis_angle_rad(axis, angle))
    }

    #[inline]
    pub fn from_axis_angle_deg(axis: Vector3<T>, angle: T) -> Self {
        Self::from(Matrix3::from_axis_angle_deg(axis, angle))
    }

    #[inline]
    pub fn from_euler_scale_deg(order: RotationOrder, angles: Vector3<T>, scale: Vector3<T>) -> Self {
        Self::from(Matrix3::from_euler_scale_deg(order, angles, scale))
    }

    #[inline]
    pub fn from_axis_angle_scale_deg(axis: Vector3<T>, angle: T, scale: Vector3<T>) -> Self {
        Self::from(Matrix3::from_axis_angle_scale_deg(axis, angle, scale))
    }

    #[inline]
    pub fn from_euler_translation_deg(
        order: RotationOrder,
        angles: Vector3<T>,
        translation: Vector3<T>,
    ) -> Self {
        Self::from_linear_translation(Matrix3::from_euler_deg(order, angles), translation)
    }

    #[inline]
    pub fn from_axis_angle_translation_deg(
        axis: Vector3<T>,
        angle: T,
        translation: Vector3<T>,
    ) -> Self {
        Self::from_linear_translation(Matrix3::from_axis_angle_deg(axis, angle), translation)
    }

    #[inline]
    pub fn from_scale_translation(scale: Vector3<T>, translation: Vector3<T>) -> Self {
        Self::from_linear_translation(Matrix3::from_scale(scale), translation)
    }

    /// Rotation after scale, then translation
    #[inline]
    pub fn from_euler_scale_translation_deg(
        order: RotationOrder,
        angles: Vector3<T>,
        scale: Vector3<T>,
        translation: Vector3<T>,
    ) -> Self {
        Self::from_linear_translation(Matrix3::from_euler_scale_deg(order, angles, scale), translation)
    }

    #[inline]
    pub fn from_axis_angle_scale_translation_deg(
        axis: Vector3<T>,
        angle: T,
        scale: Vector3<T>,
        translation: Vector3<T>,
    ) -> Self {
        Self::from_linear_translation(
            Matrix3::from_axis_angle_scale_deg(axis, angle, scale),
            translation,
        )
    }

    /// Extract the translation part of the matrix
    #[inline]
    pub fn translation(&self) -> Vector3<T> {
        self.cols[3].xyz()
    }

    /// Inverse of rotation plus translation: transposed rotation, translation `-R^T t`
    pub fn quick_inverse_rotation_translation(&self) -> Self {
        let linear = self.to_matrix3().quick_inverse_rotation();
        Self::from_linear_translation(linear, -(linear * self.translation()))
    }

    /// Inverse of scale plus translation: reciprocal scale, translation `-S^-1 t`
    pub fn quick_inverse_scale_translation(&self) -> Self {
        let linear = self.to_matrix3().quick_inverse_scale();
        Self::from_linear_translation(linear, -(linear * self.translation()))
    }

    /// Inverse of rotation, scale and translation: quick rotation-scale inverse of
    /// the linear part, translation `-L^-1 t`
    pub fn quick_inverse_rotation_scale_translation(&self) -> Self {
        let linear = self.to_matrix3().quick_inverse_rotation_scale();
        Self::from_linear_translation(linear, -(linear * self.translation()))
    }

    /// Rotation as (unit axis, angle in degrees) from the upper-left block, assuming unit columns
    #[inline]
    pub fn to_axis_angle_deg(&self) -> (Vector3<T>, T) {
        self.to_matrix3().to_axis_angle_deg()
    }

    /// Splits into (Euler angles in degrees, scale, translation)
    pub fn decompose_euler_scale_translation_deg(
        &self,
        order: RotationOrder,
    ) -> (Vector3<T>, Vector3<T>, Vector3<T>) {
        let (angles, scale) = self.to_matrix3().decompose_euler_scale_deg(order);
        (angles, scale, self.translation())
    }

    /// Splits into (unit axis, angle in degrees, scale, translation)
    pub fn decompose_axis_angle_scale_translation_deg(
        &self,
    ) -> (Vector3<T>, T, Vector3<T>, Vector3<T>) {
        let (axis, angle, scale) = self.to_matrix3().decompose_axis_angle_scale_deg();
        (axis, angle, scale, self.translation())
    }
}
