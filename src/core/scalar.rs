use approx::RelativeEq;
use num_traits::{Float, FloatConst};
use std::fmt::{Debug, Display};

/// Floating-point scalar the kernel is generic over (`f32` or `f64`)
pub trait Real:
    Float + FloatConst + RelativeEq<Epsilon = Self> + Default + Debug + Display + Send + Sync + 'static
{
    /// Magnitude at or below which a value counts as zero
    const ZERO_EPSILON: Self;

    /// Converts a literal constant into this scalar type
    fn lit(v: f64) -> Self;

    #[inline]
    fn half() -> Self {
        Self::lit(0.5)
    }

    #[inline]
    fn two() -> Self {
        Self::lit(2.0)
    }
}

impl Real for f32 {
    const ZERO_EPSILON: Self = 1.0e-6;

    #[inline]
    fn lit(v: f64) -> Self {
        v as f32
    }
}

impl Real for f64 {
    const ZERO_EPSILON: Self = 1.0e-12;

    #[inline]
    fn lit(v: f64) -> Self {
        v
    }
}

/// Returns -1, 0 or +1 according to the sign of `x`
#[inline]
pub fn sign<T: Real>(x: T) -> T {
    if x > T::zero() {
        T::one()
    } else if x < T::zero() {
        -T::one()
    } else {
        T::zero()
    }
}

#[inline]
pub fn abs<T: Real>(x: T) -> T {
    x.abs()
}

/// Returns true if the value is within `ZERO_EPSILON` of zero
#[inline]
pub fn is_zero<T: Real>(x: T) -> bool {
    x.abs() <= T::ZERO_EPSILON
}

#[inline]
pub fn is_nonzero<T: Real>(x: T) -> bool {
    !is_zero(x)
}

/// Returns true if the two values differ by no more than `ZERO_EPSILON`
#[inline]
pub fn approx_eq<T: Real>(a: T, b: T) -> bool {
    is_zero(a - b)
}

/// Reciprocal that yields zero instead of infinity for a near-zero input
#[inline]
pub fn recip_safe<T: Real>(x: T) -> T {
    if is_zero(x) {
        T::zero()
    } else {
        x.recip()
    }
}

/// Division that yields zero instead of infinity or NaN for a near-zero denominator
#[inline]
pub fn div_safe<T: Real>(numerator: T, denominator: T) -> T {
    if is_zero(denominator) {
        T::zero()
    } else {
        numerator / denominator
    }
}

/// Converts degrees to radians
#[inline]
pub fn deg_to_rad<T: Real>(degrees: T) -> T {
    degrees * (T::PI() / T::lit(180.0))
}

/// Converts radians to degrees
#[inline]
pub fn rad_to_deg<T: Real>(radians: T) -> T {
    radians * (T::lit(180.0) / T::PI())
}

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp<T: Real>(value: T, min: T, max: T) -> T {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_division_never_produces_non_finite() {
        for &d in &[0.0f32, -0.0, 1.0e-9, -1.0e-7] {
            assert_eq!(div_safe(3.0f32, d), 0.0);
            assert_eq!(recip_safe(d), 0.0);
        }
        assert_eq!(div_safe(3.0f64, 2.0), 1.5);
        assert_eq!(recip_safe(4.0f64), 0.25);
    }

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(0.0f64), 0.0);
        assert_eq!(sign(-3.5f32), -1.0);
        assert_eq!(sign(0.1f32), 1.0);
    }

    #[test]
    fn degree_radian_conversion() {
        approx::assert_relative_eq!(deg_to_rad(180.0f64), std::f64::consts::PI);
        approx::assert_relative_eq!(rad_to_deg(std::f32::consts::FRAC_PI_2), 90.0f32);
    }
}
