//! Look-at and projection matrices.
//!
//! Conventions: right-handed view space with the camera looking down -Z, and
//! clip-space depth in [-1, 1] (a view-space point on the near plane lands at
//! NDC z = -1, one on the far plane at +1).

use crate::core::scalar::{self, Real};
use crate::math::{Matrix4, Vector3, Vector4};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Column slot of a transform basis.
///
/// As the calibration axis of [`Matrix4::look_at`] only `Right` and `Vert` are
/// meaningful; `Norm` and `Orig` are treated as `Vert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum TransformBasis {
    /// Right axis (column 0)
    Right,
    /// Vertical or "up" axis (column 1)
    Vert,
    /// Normal axis, opposite the viewing direction (column 2)
    Norm,
    /// Origin, the translation column (column 3)
    Orig,
}

impl TransformBasis {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            TransformBasis::Right => 0,
            TransformBasis::Vert => 1,
            TransformBasis::Norm => 2,
            TransformBasis::Orig => 3,
        }
    }
}

/// Eye-space conversions that turn a monoscopic projection into left/right eye projections
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct StereoConversion<T> {
    pub left: Matrix4<T>,
    pub right: Matrix4<T>,
    pub left_inverse: Matrix4<T>,
    pub right_inverse: Matrix4<T>,
}

impl<T: Real> StereoConversion<T> {
    /// Builds the conversions for eyes `interocular` apart whose lines of sight
    /// converge at view distance `convergence`.
    ///
    /// `mono * left` is the left-eye projection; its inverse is
    /// `left_inverse * mono_inverse`. Points at the convergence distance have
    /// zero parallax.
    pub fn new(interocular: T, convergence: T) -> Self {
        let half = interocular * T::half();
        let (left, left_inverse) = Self::eye(-half, convergence);
        let (right, right_inverse) = Self::eye(half, convergence);
        Self { left, right, left_inverse, right_inverse }
    }

    /// Shift by `-offset` along x plus a z-shear that cancels the shift at the convergence plane
    fn eye(offset: T, convergence: T) -> (Matrix4<T>, Matrix4<T>) {
        let shear = offset / convergence;

        let mut conversion = Matrix4::identity();
        conversion.cols[2].x = -shear;
        conversion.cols[3].x = -offset;

        let mut inverse = Matrix4::identity();
        inverse.cols[2].x = shear;
        inverse.cols[3].x = offset;

        (conversion, inverse)
    }
}

impl<T: Real> Matrix4<T> {
    /// Builds a camera-to-world basis at `origin` looking toward `target`.
    ///
    /// The `Norm` column points away from the target. `calib_unit` is a unit
    /// hint for the axis named by `calib_axis`:
    /// - `Vert`: `right = normalize(calib x norm)`, `up = norm x right`
    /// - `Right`: `up = normalize(norm x calib)`, `right = up x norm`
    ///
    /// `Norm` and `Orig` are not meaningful hints and behave exactly like `Vert`. A hint
    /// parallel to the viewing direction (or `origin == target`) produces NaN.
    pub fn look_at(
        origin: Vector3<T>,
        target: Vector3<T>,
        calib_unit: Vector3<T>,
        calib_axis: TransformBasis,
    ) -> Self {
        let norm = -(target - origin).normalize_unchecked();
        let (right, up) = match calib_axis {
            TransformBasis::Right => {
                let up = norm.cross(&calib_unit).normalize_unchecked();
                (up.cross(&norm), up)
            }
            TransformBasis::Vert | TransformBasis::Norm | TransformBasis::Orig => {
                let right = calib_unit.cross(&norm).normalize_unchecked();
                (right, norm.cross(&right))
            }
        };

        let mut m = Self::identity();
        m.cols[TransformBasis::Right.index()] = Vector4::direction(right);
        m.cols[TransformBasis::Vert.index()] = Vector4::direction(up);
        m.cols[TransformBasis::Norm.index()] = Vector4::direction(norm);
        m.cols[TransformBasis::Orig.index()] = Vector4::point(origin);
        m
    }

    /// Look-at basis together with its inverse (the world-to-camera view matrix)
    pub fn look_at_with_inverse(
        origin: Vector3<T>,
        target: Vector3<T>,
        calib_unit: Vector3<T>,
        calib_axis: TransformBasis,
    ) -> (Self, Self) {
        let m = Self::look_at(origin, target, calib_unit, calib_axis);
        (m, m.quick_inverse_rotation_translation())
    }

    /// General perspective frustum from its plane distances
    pub fn perspective_planes(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        Self::perspective_planes_with_inverse(left, right, bottom, top, near, far).0
    }

    /// General perspective frustum and its algebraically derived inverse
    pub fn perspective_planes_with_inverse(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> (Self, Self) {
        let two = T::two();
        let (z, o) = (T::zero(), T::one());
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        let near2 = two * near;
        let far_near2 = two * far * near;

        let projection = Self::from_rows([
            [near2 / width, z, (right + left) / width, z],
            [z, near2 / height, (top + bottom) / height, z],
            [z, z, -(far + near) / depth, -far_near2 / depth],
            [z, z, -o, z],
        ]);
        let inverse = Self::from_rows([
            [width / near2, z, z, (right + left) / near2],
            [z, height / near2, z, (top + bottom) / near2],
            [z, z, z, -o],
            [z, z, -depth / far_near2, (far + near) / far_near2],
        ]);
        (projection, inverse)
    }

    /// Symmetric perspective frustum from a vertical field of view in degrees
    pub fn perspective_deg(fovy: T, aspect: T, near: T, far: T) -> Self {
        Self::perspective_with_inverse_deg(fovy, aspect, near, far).0
    }

    pub fn perspective_with_inverse_deg(fovy: T, aspect: T, near: T, far: T) -> (Self, Self) {
        let top = near * (scalar::deg_to_rad(fovy) * T::half()).tan();
        let right = top * aspect;
        Self::perspective_planes_with_inverse(-right, right, -top, top, near, far)
    }

    /// Orthographic box from its plane distances
    pub fn parallel_planes(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        Self::parallel_planes_with_inverse(left, right, bottom, top, near, far).0
    }

    /// Orthographic box and its algebraically derived inverse
    pub fn parallel_planes_with_inverse(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> (Self, Self) {
        let two = T::two();
        let (z, o) = (T::zero(), T::one());
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        let projection = Self::from_rows([
            [two / width, z, z, -(right + left) / width],
            [z, two / height, z, -(top + bottom) / height],
            [z, z, -two / depth, -(far + near) / depth],
            [z, z, z, o],
        ]);
        let inverse = Self::from_rows([
            [width / two, z, z, (right + left) / two],
            [z, height / two, z, (top + bottom) / two],
            [z, z, -depth / two, -(far + near) / two],
            [z, z, z, o],
        ]);
        (projection, inverse)
    }

    /// Orthographic box whose cross-section matches the perspective frustum of
    /// the same field of view (degrees) at the near plane
    pub fn parallel_deg(fovy: T, aspect: T, near: T, far: T) -> Self {
        Self::parallel_with_inverse_deg(fovy, aspect, near, far).0
    }

    pub fn parallel_with_inverse_deg(fovy: T, aspect: T, near: T, far: T) -> (Self, Self) {
        let top = near * (scalar::deg_to_rad(fovy) * T::half()).tan();
        let right = top * aspect;
        Self::parallel_planes_with_inverse(-right, right, -top, top, near, far)
    }
}
