//! Stateless interpolation over scalars, vectors and quaternions.
//!
//! Every function is generic over a value type `V` that supports addition,
//! subtraction and scaling by the parameter type `T`; vectors therefore
//! interpolate componentwise. Parameters are never clamped, so `t` outside
//! [0, 1] extrapolates.

mod basic;
mod curve;
mod arc_length;

pub use basic::{
    bi_nearest, bilerp, lerp, lerp_reverse_init, lerp_reverse_term, nearest, remap, remap_safe,
    smootherstep, smoothstep, unlerp, unlerp_safe,
};
pub use curve::{
    bezier, bezier0, bezier1, bezier2, bezier3, bi_catmull_rom, bi_cubic_hermite, catmull_rom,
    cubic_hermite, cubic_hermite_handles,
};
pub use arc_length::{sample_table_decreasing, sample_table_increasing, ArcLengthTable, Magnitude};

use crate::core::scalar::Real;
use std::ops::{Add, Mul, Sub};

/// A value that can be blended by the interpolation functions
pub trait Interpolant<T: Real>:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<T, Output = Self>
{
}

impl<T, V> Interpolant<T> for V
where
    T: Real,
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<T, Output = V>,
{
}
