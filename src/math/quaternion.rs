use crate::core::scalar::{self, Real};
use crate::math::euler::angles_to_rad;
use crate::math::{Matrix3, Matrix4, RotationOrder, Vector3, Vector4};
use approx::{AbsDiffEq, RelativeEq};
use nalgebra as na;
use std::fmt;
use std::ops::{Add, Mul, MulAssign, Neg, Sub};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Quaternion for representing rotations in 3D space.
///
/// Rotation operations assume unit norm; neither construction nor composition
/// renormalizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Quaternion<T> {
    /// First imaginary component
    pub x: T,

    /// Second imaginary component
    pub y: T,

    /// Third imaginary component
    pub z: T,

    /// Real component
    pub w: T,
}

/// Rotation trait for rotation representations
pub trait Rotation<T: Real> {
    /// Rotate a vector by this rotation
    fn rotate_vector(&self, v: Vector3<T>) -> Vector3<T>;

    /// Get the angle in radians of this rotation
    fn angle_rad(&self) -> T;

    /// Get the unit axis of this rotation
    fn axis(&self) -> Vector3<T>;
}

impl<T: Real> Quaternion<T> {
    /// Creates a new quaternion
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Creates an identity quaternion (no rotation)
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    #[inline]
    pub fn from_vector4(v: Vector4<T>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    #[inline]
    pub fn to_vector4(&self) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, self.w)
    }

    /// The imaginary part
    #[inline]
    pub fn vector_part(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates a quaternion from an axis (normalized internally) and an angle in radians
    pub fn from_axis_angle_rad(axis: Vector3<T>, angle: T) -> Self {
        let (s, c) = (angle * T::half()).sin_cos();
        let axis = axis.normalize();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Creates a quaternion from an axis and an angle in degrees
    #[inline]
    pub fn from_axis_angle_deg(axis: Vector3<T>, angle: T) -> Self {
        Self::from_axis_angle_rad(axis, scalar::deg_to_rad(angle))
    }

    /// Rotation about a single axis index (0 = X, 1 = Y, 2 = Z)
    fn from_axis_index_rad(axis: usize, angle: T) -> Self {
        let (s, c) = (angle * T::half()).sin_cos();
        let mut q = Self::new(T::zero(), T::zero(), T::zero(), c);
        match axis {
            0 => q.x = s,
            1 => q.y = s,
            _ => q.z = s,
        }
        q
    }

    /// Composes Euler angles (radians) in written order, matching `Matrix3::from_euler_rad`
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

    /// Creates a quaternion from a rotation matrix.
    ///
    /// Branches on the largest diagonal term so the square root argument stays
    /// well away from zero, including near a half-turn (trace ≈ -1).
    pub fn from_rotation_matrix(m: &Matrix3<T>) -> Self {
        let e = |r: usize, c: usize| m.cols[c][r];
        let one = T::one();
        let two = T::two();
        let quarter = T::lit(0.25);
        let trace = m.trace();

        if trace > T::zero() {
            let s = T::half() / (trace + one).sqrt();
            Self::new(
                (e(2, 1) - e(1, 2)) * s,
                (e(0, 2) - e(2, 0)) * s,
                (e(1, 0) - e(0, 1)) * s,
                quarter / s,
            )
        } else if e(0, 0) > e(1, 1) && e(0, 0) > e(2, 2) {
            let s = two * (one + e(0, 0) - e(1, 1) - e(2, 2)).sqrt();
            Self::new(
                quarter * s,
                (e(0, 1) + e(1, 0)) / s,
                (e(0, 2) + e(2, 0)) / s,
                (e(2, 1) - e(1, 2)) / s,
            )
        } else if e(1, 1) > e(2, 2) {
            let s = two * (one + e(1, 1) - e(0, 0) - e(2, 2)).sqrt();
            Self::new(
                (e(0, 1) + e(1, 0)) / s,
                quarter * s,
                (e(1, 2) + e(2, 1)) / s,
                (e(0, 2) - e(2, 0)) / s,
            )
        } else {
            let s = two * (one + e(2, 2) - e(0, 0) - e(1, 1)).sqrt();
            Self::new(
                (e(0, 2) + e(2, 0)) / s,
                (e(1, 2) + e(2, 1)) / s,
                quarter * s,
                (e(1, 0) - e(0, 1)) / s,
            )
        }
    }

    /// Creates a quaternion from the upper-left block of a 4x4 matrix
    #[inline]
    pub fn from_rotation_matrix4(m: &Matrix4<T>) -> Self {
        Self::from_rotation_matrix(&m.to_matrix3())
    }

    /// Converts the quaternion to a rotation matrix
    pub fn to_matrix3(&self) -> Matrix3<T> {
        let Self { x, y, z, w } = *self;
        let one = T::one();
        let two = T::two();

        let xx = x * x;
        let xy = x * y;
        let xz = x * z;
        let xw = x * w;

        let yy = y * y;
        let yz = y * z;
        let yw = y * w;

        let zz = z * z;
        let zw = z * w;

        Matrix3::from_rows([
            [one - two * (yy + zz), two * (xy - zw), two * (xz + yw)],
            [two * (xy + zw), one - two * (xx + zz), two * (yz - xw)],
            [two * (xz - yw), two * (yz + xw), one - two * (xx + yy)],
        ])
    }

    /// Converts the quaternion to a 4x4 rotation matrix
    #[inline]
    pub fn to_matrix4(&self) -> Matrix4<T> {
        Matrix4::from(self.to_matrix3())
    }

    /// Returns (unit axis, angle in degrees); the identity yields the x axis and 0
    pub fn to_axis_angle_deg(&self) -> (Vector3<T>, T) {
        (self.axis(), scalar::rad_to_deg(self.angle_rad()))
    }

    /// Euler angles in degrees for the given order
    #[inline]
    pub fn to_euler_deg(&self, order: RotationOrder) -> Vector3<T> {
        self.to_matrix3().to_euler_deg(order)
    }

    /// Returns the conjugate of this quaternion
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Returns the squared length of this quaternion
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Returns the length of this quaternion
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns a unit quaternion, or the identity if the length is near zero
    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if scalar::is_zero(len) {
            Self::identity()
        } else {
            *self * len.recip()
        }
    }

    /// Conjugate divided by the squared norm; a zero quaternion yields zero
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() * scalar::recip_safe(self.length_squared())
    }

    /// Computes the dot product of two quaternions
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Componentwise linear interpolation without renormalizing
    #[inline]
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }

    /// Normalized linear interpolation: cheap, not constant angular speed
    #[inline]
    pub fn nlerp(&self, other: &Self, t: T) -> Self {
        self.lerp(other, t).normalize()
    }

    /// Spherical linear interpolation between the given endpoints.
    ///
    /// Does not flip hemispheres, so `t = 1` returns `other` exactly as given and
    /// nearly opposite inputs travel the long arc of almost 180°. Nearly parallel
    /// inputs fall back to `nlerp` to avoid dividing by a tiny sine.
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        let cos_theta = self.dot(other);

        if cos_theta > T::lit(0.9995) {
            return self.nlerp(other, t);
        }

        let theta = scalar::clamp(cos_theta, -T::one(), T::one()).acos();
        if cos_theta < -T::lit(0.9995) {
            return self.slerp_opposite(other, cos_theta, theta, t);
        }
        let sin_theta = theta.sin();

        let ratio_a = ((T::one() - t) * theta).sin() / sin_theta;
        let ratio_b = (t * theta).sin() / sin_theta;

        *self * ratio_a + *other * ratio_b
    }

    /// Rotates `self` toward the part of `other` orthogonal to it, whose length is
    /// `sin(theta)`; exactly opposite inputs go through [`Self::perpendicular`]
    fn slerp_opposite(&self, other: &Self, cos_theta: T, theta: T, t: T) -> Self {
        let ortho = *other - *self * cos_theta;
        let len = ortho.length();
        let direction = if scalar::is_zero(len) {
            self.perpendicular()
        } else {
            ortho * len.recip()
        };
        let (s, c) = (t * theta).sin_cos();
        *self * c + direction * s
    }

    /// A quaternion of the same length orthogonal to this one in 4D
    #[inline]
    fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x, -self.w, self.z)
    }

    /// Spherical interpolation along the shorter arc, negating `other` if needed
    pub fn slerp_shortest(&self, other: &Self, t: T) -> Self {
        if self.dot(other) < T::zero() {
            self.slerp(&-*other, t)
        } else {
            self.slerp(other, t)
        }
    }

    /// Convert to nalgebra Quaternion
    #[inline]
    pub fn to_nalgebra(&self) -> na::Quaternion<T> {
        na::Quaternion::new(self.w, self.x, self.y, self.z)
    }

    /// Convert from nalgebra Quaternion
    #[inline]
    pub fn from_nalgebra(q: &na::Quaternion<T>) -> Self {
        // nalgebra stores [i, j, k, w]
        Self::new(q.coords[0], q.coords[1], q.coords[2], q.coords[3])
    }
}

impl<T: Real> Rotation<T> for Quaternion<T> {
    /// Rotates a vector by this quaternion (`q v q*`, expanded)
    fn rotate_vector(&self, v: Vector3<T>) -> Vector3<T> {
        let u = self.vector_part();
        let t = u.cross(&v) * T::two();
        v + t * self.w + u.cross(&t)
    }

    /// Returns the angle in radians of this rotation
    fn angle_rad(&self) -> T {
        T::two() * scalar::clamp(self.w, -T::one(), T::one()).acos()
    }

    /// Returns the normalized axis of this rotation, or the x axis for no rotation
    fn axis(&self) -> Vector3<T> {
        let v = self.vector_part();
        if v.is_zero() {
            Vector3::unit_x()
        } else {
            v.normalize()
        }
    }
}

impl<T: Real> Rotation<T> for Matrix3<T> {
    fn rotate_vector(&self, v: Vector3<T>) -> Vector3<T> {
        *self * v
    }

    fn angle_rad(&self) -> T {
        Quaternion::from_rotation_matrix(self).angle_rad()
    }

    fn axis(&self) -> Vector3<T> {
        Quaternion::from_rotation_matrix(self).axis()
    }
}

impl<T: Real> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

// Quaternion multiplication (Hamilton product); `a * b` applies `b` first
impl<T: Real> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl<T: Real> MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        self.rotate_vector(rhs)
    }
}

impl<T: Real> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl<T: Real> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl<T: Real> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl<T: Real> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Real> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.to_vector4().abs_diff_eq(&other.to_vector4(), epsilon)
    }
}

impl<T: Real> RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.to_vector4().relative_eq(&other.to_vector4(), epsilon, max_relative)
    }
}
