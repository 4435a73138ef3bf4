//! Truncated Taylor series about zero.
//!
//! Arguments are first reduced to [-π/2, π/2], where sine through the x¹¹
//! term (6 terms) and cosine through the x¹² term (7 terms) stay within about
//! 1e-7 of the library functions.

use crate::core::scalar::{self, Real};

/// Products `(2k)(2k + 1)` dividing successive sine terms
const SIN_DIVISORS: [f64; 5] = [6.0, 20.0, 42.0, 72.0, 110.0];

/// Products `(2k - 1)(2k)` dividing successive cosine terms
const COS_DIVISORS: [f64; 6] = [2.0, 12.0, 30.0, 56.0, 90.0, 132.0];

/// Horner evaluation of `1 - x²/d0 (1 - x²/d1 (1 - ...))`
fn alternating_series<T: Real>(x2: T, divisors: &[f64]) -> T {
    divisors
        .iter()
        .rev()
        .fold(T::one(), |acc, d| T::one() - x2 / T::lit(*d) * acc)
}

/// Reduces `x` into [-π, π]
fn wrap_pi<T: Real>(x: T) -> T {
    let pi = T::PI();
    let two_pi = T::two() * pi;
    let x = x % two_pi;
    if x > pi {
        x - two_pi
    } else if x < -pi {
        x + two_pi
    } else {
        x
    }
}

/// Sine by series after reduction using `sin(x) = sin(π - x)`
pub fn sin_taylor<T: Real>(x: T) -> T {
    let half_pi = T::FRAC_PI_2();
    let mut x = wrap_pi(x);
    if x > half_pi {
        x = T::PI() - x;
    } else if x < -half_pi {
        x = -T::PI() - x;
    }
    x * alternating_series(x * x, &SIN_DIVISORS)
}

/// Cosine by series after reduction using `cos(x) = -cos(π - |x|)`
pub fn cos_taylor<T: Real>(x: T) -> T {
    let x = wrap_pi(x).abs();
    if x > T::FRAC_PI_2() {
        let r = T::PI() - x;
        -alternating_series(r * r, &COS_DIVISORS)
    } else {
        alternating_series(x * x, &COS_DIVISORS)
    }
}

/// Tangent as the ratio of the two series; undefined at ±π/2
#[inline]
pub fn tan_taylor<T: Real>(x: T) -> T {
    sin_taylor(x) / cos_taylor(x)
}

#[inline]
pub fn sind_taylor<T: Real>(x: T) -> T {
    sin_taylor(scalar::deg_to_rad(x))
}

#[inline]
pub fn cosd_taylor<T: Real>(x: T) -> T {
    cos_taylor(scalar::deg_to_rad(x))
}

#[inline]
pub fn tand_taylor<T: Real>(x: T) -> T {
    tan_taylor(scalar::deg_to_rad(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_matches_library_over_several_turns() {
        let mut x = -10.0_f64;
        while x <= 10.0 {
            assert!((sin_taylor(x) - x.sin()).abs() < 1e-6, "sin at {}", x);
            assert!((cos_taylor(x) - x.cos()).abs() < 1e-6, "cos at {}", x);
            x += 0.05;
        }
    }
}
