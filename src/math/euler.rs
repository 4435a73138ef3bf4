//! Euler-angle composition and decomposition.
//!
//! A [`RotationOrder`] names the axes in *written* order. The composed matrix is
//! the product of the elementary rotations in that same order, e.g.
//! `XYZ => Rx * Ry * Rz`. Multiplying a column vector applies the factors right
//! to left, so the *functional* order is the reverse: `XYZ` rotates about Z
//! first, then Y, then X.
//!
//! Angles are always carried as a `Vector3` of (x angle, y angle, z angle),
//! independent of the order.

use crate::core::scalar::{self, Real};
use crate::error::MathError;
use crate::math::{Matrix3, Matrix4, Vector3};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Order of Euler angle rotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum RotationOrder {
    /// Written X, Y, Z: `Rx * Ry * Rz`; applies Z, then Y, then X
    #[default]
    XYZ,
    /// Written Y, Z, X: `Ry * Rz * Rx`; applies X, then Z, then Y
    YZX,
    /// Written Z, X, Y: `Rz * Rx * Ry`; applies Y, then X, then Z
    ZXY,
    /// Written Y, X, Z: `Ry * Rx * Rz`; applies Z, then X, then Y
    YXZ,
    /// Written X, Z, Y: `Rx * Rz * Ry`; applies Y, then Z, then X
    XZY,
    /// Written Z, Y, X: `Rz * Ry * Rx`; applies X, then Y, then Z
    ZYX,
}

impl RotationOrder {
    /// All six orders
    pub const ALL: [RotationOrder; 6] = [
        RotationOrder::XYZ,
        RotationOrder::YZX,
        RotationOrder::ZXY,
        RotationOrder::YXZ,
        RotationOrder::XZY,
        RotationOrder::ZYX,
    ];

    /// Axis indices (0 = X, 1 = Y, 2 = Z) in written order
    pub fn written_axes(self) -> [usize; 3] {
        match self {
            RotationOrder::XYZ => [0, 1, 2],
            RotationOrder::YZX => [1, 2, 0],
            RotationOrder::ZXY => [2, 0, 1],
            RotationOrder::YXZ => [1, 0, 2],
            RotationOrder::XZY => [0, 2, 1],
            RotationOrder::ZYX => [2, 1, 0],
        }
    }

    /// Axis indices in the order the rotations act on a column vector
    pub fn functional_axes(self) -> [usize; 3] {
        let [a, b, c] = self.written_axes();
        [c, b, a]
    }

    /// Index of the middle axis, whose ±90° angle causes gimbal lock
    #[inline]
    pub fn middle_axis(self) -> usize {
        self.written_axes()[1]
    }
}

impl fmt::Display for RotationOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            RotationOrder::XYZ => "XYZ",
            RotationOrder::YZX => "YZX",
            RotationOrder::ZXY => "ZXY",
            RotationOrder::YXZ => "YXZ",
            RotationOrder::XZY => "XZY",
            RotationOrder::ZYX => "ZYX",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for RotationOrder {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "XYZ" => Ok(RotationOrder::XYZ),
            "YZX" => Ok(RotationOrder::YZX),
            "ZXY" => Ok(RotationOrder::ZXY),
            "YXZ" => Ok(RotationOrder::YXZ),
            "XZY" => Ok(RotationOrder::XZY),
            "ZYX" => Ok(RotationOrder::ZYX),
            _ => Err(MathError::ParseRotationOrder(s.to_string())),
        }
    }
}

impl<T: Real> Matrix3<T> {
    /// Elementary rotation about a single axis (0 = X, 1 = Y, 2 = Z), in radians
    pub fn from_axis_index_rad(axis: usize, angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (T::one(), T::zero());
        match axis {
            0 => Self::from_rows([[o, z, z], [z, c, -s], [z, s, c]]),
            1 => Self::from_rows([[c, z, s], [z, o, z], [-s, z, c]]),
            _ => Self::from_rows([[c, -s, z], [s, c, z], [z, z, o]]),
        }
    }

    /// Rotation about X in radians
    #[inline]
    pub fn from_rotation_x_rad(angle: T) -> Self {
        Self::from_axis_index_rad(0, angle)
    }

    /// Rotation about Y in radians
    #[inline]
    pub fn from_rotation_y_rad(angle: T) -> Self {
        Self::from_axis_index_rad(1, angle)
    }

    /// Rotation about Z in radians
    #[inline]
    pub fn from_rotation_z_rad(angle: T) -> Self {
        Self::from_axis_index_rad(2, angle)
    }

    /// Rotation about X in degrees
    #[inline]
    pub fn from_rotation_x_deg(angle: T) -> Self {
        Self::from_rotation_x_rad(scalar::deg_to_rad(angle))
    }

    /// Rotation about Y in degrees
    #[inline]
    pub fn from_rotation_y_deg(angle: T) -> Self {
        Self::from_rotation_y_rad(scalar::deg_to_rad(angle))
    }

    /// Rotation about Z in degrees
    #[inline]
    pub fn from_rotation_z_deg(angle: T) -> Self {
        Self::from_rotation_z_rad(scalar::deg_to_rad(angle))
    }

    /// Composes Euler angles (radians) as the product of elementary rotations in written order
    pub fn from_euler_rad(order: RotationOrder, angles: Vector3<T>) -> Self {
        let [a, b, c] = order.written_axes();
        Self::from_axis_index_rad(a, angles[a])
            * Self::from_axis_index_rad(b, angles[b])
            * Self::from_axis_index_rad(c, angles[c])
    }

    /// Composes Euler angles given in degrees
    #[inline]
    pub fn from_euler_deg(order: RotationOrder, angles: Vector3<T>) -> Self {
        Self::from_euler_rad(order, angles_to_rad(angles))
    }

    /// Extracts Euler angles in radians, assuming unit-length orthogonal columns.
    ///
    /// At gimbal lock (middle angle at ±90°) the angle of the last-written axis
    /// is set to zero and the first-written axis absorbs the remaining rotation.
    pub fn to_euler_rad(&self, order: RotationOrder) -> Vector3<T> {
        // m(r, c) is the 1-based (row, column) element
        let m = |r: usize, c: usize| self.cols[c - 1][r - 1];
        let limit = T::one() - T::ZERO_EPSILON;
        let unit = |v: T| scalar::clamp(v, -T::one(), T::one());
        let zero = T::zero();

        match order {
            RotationOrder::XYZ => {
                let y = unit(m(1, 3)).asin();
                let (x, z) = if m(1, 3).abs() < limit {
                    ((-m(2, 3)).atan2(m(3, 3)), (-m(1, 2)).atan2(m(1, 1)))
                } else {
                    (m(3, 2).atan2(m(2, 2)), zero)
                };
                Vector3::new(x, y, z)
            }
            RotationOrder::YXZ => {
                let x = unit(-m(2, 3)).asin();
                let (y, z) = if m(2, 3).abs() < limit {
                    (m(1, 3).atan2(m(3, 3)), m(2, 1).atan2(m(2, 2)))
                } else {
                    ((-m(3, 1)).atan2(m(1, 1)), zero)
                };
                Vector3::new(x, y, z)
            }
            RotationOrder::ZXY => {
                let x = unit(m(3, 2)).asin();
                let (y, z) = if m(3, 2).abs() < limit {
                    ((-m(3, 1)).atan2(m(3, 3)), (-m(1, 2)).atan2(m(2, 2)))
                } else {
                    (zero, m(2, 1).atan2(m(1, 1)))
                };
                Vector3::new(x, y, z)
            }
            RotationOrder::ZYX => {
                let y = unit(-m(3, 1)).asin();
                let (x, z) = if m(3, 1).abs() < limit {
                    (m(3, 2).atan2(m(3, 3)), m(2, 1).atan2(m(1, 1)))
                } else {
                    (zero, (-m(1, 2)).atan2(m(2, 2)))
                };
                Vector3::new(x, y, z)
            }
            RotationOrder::YZX => {
                let z = unit(m(2, 1)).asin();
                let (x, y) = if m(2, 1).abs() < limit {
                    ((-m(2, 3)).atan2(m(2, 2)), (-m(3, 1)).atan2(m(1, 1)))
                } else {
                    (zero, m(1, 3).atan2(m(3, 3)))
                };
                Vector3::new(x, y, z)
            }
            RotationOrder::XZY => {
                let z = unit(-m(1, 2)).asin();
                let (x, y) = if m(1, 2).abs() < limit {
                    (m(3, 2).atan2(m(2, 2)), m(1, 3).atan2(m(1, 1)))
                } else {
                    ((-m(2, 3)).atan2(m(3, 3)), zero)
                };
                Vector3::new(x, y, z)
            }
        }
    }

    /// Extracts Euler angles in degrees, assuming unit-length orthogonal columns
    #[inline]
    pub fn to_euler_deg(&self, order: RotationOrder) -> Vector3<T> {
        angles_to_deg(self.to_euler_rad(order))
    }
}

impl<T: Real> Matrix4<T> {
    /// Rotation about X in degrees
    #[inline]
    pub fn from_rotation_x_deg(angle: T) -> Self {
        Self::from(Matrix3::from_rotation_x_deg(angle))
    }

    /// Rotation about Y in degrees
    #[inline]
    pub fn from_rotation_y_deg(angle: T) -> Self {
        Self::from(Matrix3::from_rotation_y_deg(angle))
    }

    /// Rotation about Z in degrees
    #[inline]
    pub fn from_rotation_z_deg(angle: T) -> Self {
        Self::from(Matrix3::from_rotation_z_deg(angle))
    }

    #[inline]
    pub fn from_euler_rad(order: RotationOrder, angles: Vector3<T>) -> Self {
        Self::from(Matrix3::from_euler_rad(order, angles))
    }

    #[inline]
    pub fn from_euler_deg(order: RotationOrder, angles: Vector3<T>) -> Self {
        Self::from(Matrix3::from_euler_deg(order, angles))
    }

    /// Extracts Euler angles in degrees from the upper-left block, assuming unit columns
    #[inline]
    pub fn to_euler_deg(&self, order: RotationOrder) -> Vector3<T> {
        self.to_matrix3().to_euler_deg(order)
    }
}

#[inline]
pub(crate) fn angles_to_rad<T: Real>(angles: Vector3<T>) -> Vector3<T> {
    Vector3::new(
        scalar::deg_to_rad(angles.x),
        scalar::deg_to_rad(angles.y),
        scalar::deg_to_rad(angles.z),
    )
}

#[inline]
pub(crate) fn angles_to_deg<T: Real>(angles: Vector3<T>) -> Vector3<T> {
    Vector3::new(
        scalar::rad_to_deg(angles.x),
        scalar::rad_to_deg(angles.y),
        scalar::rad_to_deg(angles.z),
    )
}
