use crate::core::scalar::{self, Real};
use crate::error::MathError;
use approx::{AbsDiffEq, RelativeEq};
use nalgebra as na;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A 2D vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// A 3D vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A 4D vector; `w` is the homogeneous slot when the vector stands for a point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// Operations shared by every vector dimension
macro_rules! impl_vector_common {
    ($name:ident, $n:literal, $($field:ident : $idx:literal),+) => {
        impl<T: Real> $name<T> {
            /// Creates a new vector from its components
            #[inline]
            pub fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Creates a vector with every component set to `v`
            #[inline]
            pub fn splat(v: T) -> Self {
                Self { $($field: v),+ }
            }

            /// Creates a new vector with all components set to zero
            #[inline]
            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            /// Creates a new vector with all components set to one
            #[inline]
            pub fn one() -> Self {
                Self::splat(T::one())
            }

            /// Creates a vector from the first elements of a slice
            pub fn from_slice(values: &[T]) -> crate::Result<Self> {
                if values.len() < $n {
                    return Err(MathError::LengthMismatch { expected: $n, found: values.len() });
                }
                Ok(Self { $($field: values[$idx]),+ })
            }

            #[inline]
            pub fn to_array(&self) -> [T; $n] {
                [$(self.$field),+]
            }

            /// Computes the dot product of two vectors
            #[inline]
            pub fn dot(&self, other: &Self) -> T {
                T::zero() $(+ self.$field * other.$field)+
            }

            /// Returns the squared length of the vector
            #[inline]
            pub fn length_squared(&self) -> T {
                self.dot(self)
            }

            /// Returns the length of the vector
            #[inline]
            pub fn length(&self) -> T {
                self.length_squared().sqrt()
            }

            /// Returns a unit-length copy, or the zero vector if the length is near zero
            #[inline]
            pub fn normalize(&self) -> Self {
                let length = self.length();
                if scalar::is_zero(length) {
                    Self::zero()
                } else {
                    *self / length
                }
            }

            /// Divides by the length without checking it; a zero vector yields NaN
            #[inline]
            pub fn normalize_unchecked(&self) -> Self {
                *self / self.length()
            }

            /// Normalizes the vector in-place
            #[inline]
            pub fn normalize_mut(&mut self) {
                *self = self.normalize();
            }

            /// Returns true if the vector is approximately zero
            #[inline]
            pub fn is_zero(&self) -> bool {
                scalar::is_zero(self.length_squared())
            }

            /// Distance between two vectors
            #[inline]
            pub fn distance(&self, other: &Self) -> T {
                (*self - *other).length()
            }

            /// Squared distance between two vectors
            #[inline]
            pub fn distance_squared(&self, other: &Self) -> T {
                (*self - *other).length_squared()
            }

            /// Linear interpolation between two vectors
            #[inline]
            pub fn lerp(&self, other: &Self, t: T) -> Self {
                *self + (*other - *self) * t
            }

            /// Divides by a scalar, yielding the zero vector when `s` is near zero
            #[inline]
            pub fn div_safe(&self, s: T) -> Self {
                *self * scalar::recip_safe(s)
            }

            /// Componentwise absolute value
            #[inline]
            pub fn abs(&self) -> Self {
                Self { $($field: self.$field.abs()),+ }
            }

            /// Componentwise minimum
            #[inline]
            pub fn min(&self, other: &Self) -> Self {
                Self { $($field: self.$field.min(other.$field)),+ }
            }

            /// Componentwise maximum
            #[inline]
            pub fn max(&self, other: &Self) -> Self {
                Self { $($field: self.$field.max(other.$field)),+ }
            }

            /// Convert to a nalgebra vector
            #[inline]
            pub fn to_nalgebra(&self) -> na::SVector<T, $n> {
                na::SVector::<T, $n>::from_column_slice(&self.to_array())
            }

            /// Convert from a nalgebra vector
            #[inline]
            pub fn from_nalgebra(v: &na::SVector<T, $n>) -> Self {
                Self { $($field: v[$idx]),+ }
            }
        }

        impl<T: Real> From<[T; $n]> for $name<T> {
            #[inline]
            fn from(array: [T; $n]) -> Self {
                let [$($field),+] = array;
                Self { $($field),+ }
            }
        }

        impl<T: Real> From<$name<T>> for [T; $n] {
            #[inline]
            fn from(vector: $name<T>) -> Self {
                vector.to_array()
            }
        }

        impl<T: Real> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "(")?;
                for (i, v) in self.to_array().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, ")")
            }
        }

        impl<T: Real> Index<usize> for $name<T> {
            type Output = T;
            #[inline]
            fn index(&self, index: usize) -> &T {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!("{} component index {} out of range", stringify!($name), index),
                }
            }
        }

        impl<T: Real> IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!("{} component index {} out of range", stringify!($name), index),
                }
            }
        }

        impl<T: Real> Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Real> Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Real> Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        /// Componentwise product
        impl<T: Real> Mul for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl Mul<$name<f32>> for f32 {
            type Output = $name<f32>;
            #[inline]
            fn mul(self, rhs: $name<f32>) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<$name<f64>> for f64 {
            type Output = $name<f64>;
            #[inline]
            fn mul(self, rhs: $name<f64>) -> Self::Output {
                rhs * self
            }
        }

        impl<T: Real> Div<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: Real> Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Real> AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field + rhs.$field;)+
            }
        }

        impl<T: Real> SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field - rhs.$field;)+
            }
        }

        impl<T: Real> MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field = self.$field * rhs;)+
            }
        }

        impl<T: Real> DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                $(self.$field = self.$field / rhs;)+
            }
        }

        impl<T: Real> AbsDiffEq for $name<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                true $(&& self.$field.abs_diff_eq(&other.$field, epsilon))+
            }
        }

        impl<T: Real> RelativeEq for $name<T> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                true $(&& self.$field.relative_eq(&other.$field, epsilon, max_relative))+
            }
        }
    };
}

impl_vector_common!(Vector2, 2, x: 0, y: 1);
impl_vector_common!(Vector3, 3, x: 0, y: 1, z: 2);
impl_vector_common!(Vector4, 4, x: 0, y: 1, z: 2, w: 3);

// === Vector2 Implementation ===

impl<T: Real> Vector2<T> {
    /// Creates a unit vector pointing in the x direction
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// Creates a unit vector pointing in the y direction
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Signed area of the parallelogram spanned by the two vectors
    #[inline]
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Returns a vector that is perpendicular to this vector
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Returns the angle in radians of this vector (in the range [-PI, PI])
    #[inline]
    pub fn angle_rad(&self) -> T {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn yx(&self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Pads to 3D with the given z
    #[inline]
    pub fn extend(&self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}

// === Vector3 Implementation ===

impl<T: Real> Vector3<T> {
    /// Creates a unit vector pointing in the x direction
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Creates a unit vector pointing in the y direction
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Creates a unit vector pointing in the z direction
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Creates a 3D vector from a 2D vector and a z component
    #[inline]
    pub fn from_vector2(v: Vector2<T>, z: T) -> Self {
        Self::new(v.x, v.y, z)
    }

    /// Computes the cross product of two vectors
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Projects one vector onto another
    #[inline]
    pub fn project(&self, onto: &Self) -> Self {
        let onto_normalized = onto.normalize();
        onto_normalized * self.dot(&onto_normalized)
    }

    /// Rejects one vector from another (opposite of projection)
    #[inline]
    pub fn reject(&self, from: &Self) -> Self {
        *self - self.project(from)
    }

    /// Returns the angle in radians between two vectors
    #[inline]
    pub fn angle_between_rad(&self, other: &Self) -> T {
        let len_sq1 = self.length_squared();
        let len_sq2 = other.length_squared();

        if scalar::is_zero(len_sq1) || scalar::is_zero(len_sq2) {
            T::zero()
        } else {
            let cosine = self.dot(other) / (len_sq1.sqrt() * len_sq2.sqrt());
            scalar::clamp(cosine, -T::one(), T::one()).acos()
        }
    }

    #[inline]
    pub fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn yz(&self) -> Vector2<T> {
        Vector2::new(self.y, self.z)
    }

    #[inline]
    pub fn xz(&self) -> Vector2<T> {
        Vector2::new(self.x, self.z)
    }

    #[inline]
    pub fn zyx(&self) -> Self {
        Self::new(self.z, self.y, self.x)
    }

    #[inline]
    pub fn set_xy(&mut self, v: Vector2<T>) {
        self.x = v.x;
        self.y = v.y;
    }

    /// Pads to 4D with the given w
    #[inline]
    pub fn extend(&self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

// === Vector4 Implementation ===

impl<T: Real> Vector4<T> {
    /// Creates a new Vector4 from a Vector3 and a w component
    #[inline]
    pub fn from_vector3(v: Vector3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Creates a new Vector4 from a Vector2, padding z with 0 and w with `w`
    #[inline]
    pub fn from_vector2(v: Vector2<T>, w: T) -> Self {
        Self::new(v.x, v.y, T::zero(), w)
    }

    /// Homogeneous point (w = 1)
    #[inline]
    pub fn point(v: Vector3<T>) -> Self {
        Self::from_vector3(v, T::one())
    }

    /// Homogeneous direction (w = 0)
    #[inline]
    pub fn direction(v: Vector3<T>) -> Self {
        Self::from_vector3(v, T::zero())
    }

    /// Cross product of the xyz parts; w of the result is 0
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::direction(self.xyz().cross(&other.xyz()))
    }

    /// Returns the x, y, z components as a Vector3
    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn zw(&self) -> Vector2<T> {
        Vector2::new(self.z, self.w)
    }

    #[inline]
    pub fn set_xyz(&mut self, v: Vector3<T>) {
        self.x = v.x;
        self.y = v.y;
        self.z = v.z;
    }

    /// Divides xyz by w, leaving the vector untouched when w is near zero
    #[inline]
    pub fn project_homogeneous(&self) -> Vector3<T> {
        if scalar::is_zero(self.w) {
            self.xyz()
        } else {
            self.xyz() / self.w
        }
    }
}
