use super::Interpolant;
use crate::core::scalar::{self, Real};

/// Returns `v0` for `t < 0.5`, otherwise `v1`
#[inline]
pub fn nearest<T: Real, V: Interpolant<T>>(v0: V, v1: V, t: T) -> V {
    if t < T::half() {
        v0
    } else {
        v1
    }
}

/// Nearest-neighbour selection on a 2x2 grid; `t0` picks within a row, `t1` picks the row
#[inline]
pub fn bi_nearest<T: Real, V: Interpolant<T>>(v00: V, v01: V, v10: V, v11: V, t0: T, t1: T) -> V {
    nearest(nearest(v00, v01, t0), nearest(v10, v11, t0), t1)
}

/// Linear interpolation; exact at both endpoints
#[inline]
pub fn lerp<T: Real, V: Interpolant<T>>(v0: V, v1: V, t: T) -> V {
    v0 * (T::one() - t) + v1 * t
}

/// Bilinear interpolation on a 2x2 grid; `t0` blends within a row, `t1` blends the rows
#[inline]
pub fn bilerp<T: Real, V: Interpolant<T>>(v00: V, v01: V, v10: V, v11: V, t0: T, t1: T) -> V {
    lerp(lerp(v00, v01, t0), lerp(v10, v11, t0), t1)
}

/// Parameter at which `lerp(x0, x1, t) == x`; raw division
#[inline]
pub fn unlerp<T: Real>(x0: T, x1: T, x: T) -> T {
    (x - x0) / (x1 - x0)
}

/// Like [`unlerp`] but returns 0 when the range is degenerate
#[inline]
pub fn unlerp_safe<T: Real>(x0: T, x1: T, x: T) -> T {
    scalar::div_safe(x - x0, x1 - x0)
}

/// Maps `x` from [x0, x1] onto [y0, y1]
#[inline]
pub fn remap<T: Real, V: Interpolant<T>>(x0: T, x1: T, y0: V, y1: V, x: T) -> V {
    lerp(y0, y1, unlerp(x0, x1, x))
}

/// Like [`remap`] but yields `y0` when the source range is degenerate
#[inline]
pub fn remap_safe<T: Real, V: Interpolant<T>>(x0: T, x1: T, y0: V, y1: V, x: T) -> V {
    lerp(y0, y1, unlerp_safe(x0, x1, x))
}

/// Recovers `v0` from `v = lerp(v0, v1, t)`; undefined at `t == 1`
#[inline]
pub fn lerp_reverse_init<T: Real, V: Interpolant<T>>(v1: V, t: T, v: V) -> V {
    (v - v1 * t) * (T::one() - t).recip()
}

/// Recovers `v1` from `v = lerp(v0, v1, t)`; undefined at `t == 0`
#[inline]
pub fn lerp_reverse_term<T: Real, V: Interpolant<T>>(v0: V, t: T, v: V) -> V {
    (v - v0 * (T::one() - t)) * t.recip()
}

/// Cubic ease `3t² - 2t³`
#[inline]
pub fn smoothstep<T: Real>(t: T) -> T {
    t * t * (T::lit(3.0) - T::two() * t)
}

/// Quintic ease `6t⁵ - 15t⁴ + 10t³`
#[inline]
pub fn smootherstep<T: Real>(t: T) -> T {
    t * t * t * (t * (t * T::lit(6.0) - T::lit(15.0)) + T::lit(10.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_lerp_recovers_endpoints() {
        let v = lerp(2.0_f64, 10.0, 0.25_f64);
        assert!((lerp_reverse_init(10.0_f64, 0.25_f64, v) - 2.0).abs() < 1e-12);
        assert!((lerp_reverse_term(2.0_f64, 0.25_f64, v) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn nearest_switches_at_half() {
        assert_eq!(nearest(1.0_f32, 2.0, 0.49_f32), 1.0);
        assert_eq!(nearest(1.0_f32, 2.0, 0.5_f32), 2.0);
        assert_eq!(bi_nearest(1.0_f32, 2.0, 3.0, 4.0, 0.9_f32, 0.1_f32), 2.0);
    }
}
