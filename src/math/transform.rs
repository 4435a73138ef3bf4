use crate::core::scalar::{self, Real};
use crate::math::quaternion::Rotation;
use crate::math::{Matrix4, Quaternion, Vector3};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Represents a transformation in 3D space (translation, rotation, and scale).
///
/// Applied to a point in the order scale, rotate, translate, matching the
/// `R * S` linear part of the matrix factories.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform<T> {
    /// Translation in 3D space
    pub translation: Vector3<T>,

    /// Rotation as a unit quaternion
    pub rotation: Quaternion<T>,

    /// Scale in each axis
    pub scale: Vector3<T>,
}

impl<T: Real> Default for Transform<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Transform<T> {
    /// Creates a new transform with the given translation, rotation, and scale
    #[inline]
    pub fn new(translation: Vector3<T>, rotation: Quaternion<T>, scale: Vector3<T>) -> Self {
        Self { translation, rotation, scale }
    }

    /// Creates a new identity transform (no translation, no rotation, unit scale)
    #[inline]
    pub fn identity() -> Self {
        Self::new(Vector3::zero(), Quaternion::identity(), Vector3::one())
    }

    #[inline]
    pub fn from_translation(translation: Vector3<T>) -> Self {
        Self::new(translation, Quaternion::identity(), Vector3::one())
    }

    #[inline]
    pub fn from_translation_rotation(translation: Vector3<T>, rotation: Quaternion<T>) -> Self {
        Self::new(translation, rotation, Vector3::one())
    }

    /// Creates a transform from a rotation-scale-translation matrix.
    ///
    /// Scale is taken from the column lengths; reflections are not recovered.
    pub fn from_matrix(matrix: &Matrix4<T>) -> Self {
        let linear = matrix.to_matrix3();
        let scale = linear.column_lengths();
        let rotation = Quaternion::from_rotation_matrix(&linear.normalize_columns());
        Self::new(matrix.translation(), rotation, scale)
    }

    /// Converts the transform to a 4x4 matrix
    pub fn to_matrix(&self) -> Matrix4<T> {
        let linear = self.rotation.to_matrix3().scale_columns(self.scale);
        Matrix4::from_linear_translation(linear, self.translation)
    }

    /// Transforms a point by this transform
    #[inline]
    pub fn transform_point(&self, point: Vector3<T>) -> Vector3<T> {
        self.transform_direction(point) + self.translation
    }

    /// Transforms a direction vector by this transform (ignoring translation)
    #[inline]
    pub fn transform_direction(&self, direction: Vector3<T>) -> Vector3<T> {
        self.rotation.rotate_vector(direction * self.scale)
    }

    /// Transforms a surface normal (inverse scale, then rotation) and renormalizes it
    pub fn transform_normal(&self, normal: Vector3<T>) -> Vector3<T> {
        let inv_scale = Vector3::new(
            scalar::recip_safe(self.scale.x),
            scalar::recip_safe(self.scale.y),
            scalar::recip_safe(self.scale.z),
        );
        self.rotation.rotate_vector(normal * inv_scale).normalize()
    }

    /// Inverts this transform.
    ///
    /// Exact for uniform scale. With non-uniform scale and a rotation the true
    /// inverse has shear, which this representation cannot hold; use
    /// `to_matrix().quick_inverse_rotation_scale_translation()` instead.
    pub fn inverse(&self) -> Self {
        let inv_scale = Vector3::new(
            scalar::recip_safe(self.scale.x),
            scalar::recip_safe(self.scale.y),
            scalar::recip_safe(self.scale.z),
        );
        let inv_rotation = self.rotation.conjugate();
        let inv_translation = -(inv_rotation.rotate_vector(self.translation) * inv_scale);

        Self::new(inv_translation, inv_rotation, inv_scale)
    }

    /// Combines this transform with another, applying this one first
    pub fn combine(&self, other: &Self) -> Self {
        Self::new(
            other.transform_point(self.translation),
            other.rotation * self.rotation,
            self.scale * other.scale,
        )
    }

    /// Interpolates translation and scale linearly and rotation spherically
    pub fn interpolate(&self, other: &Self, t: T) -> Self {
        Self::new(
            self.translation.lerp(&other.translation, t),
            self.rotation.slerp_shortest(&other.rotation, t),
            self.scale.lerp(&other.scale, t),
        )
    }
}
