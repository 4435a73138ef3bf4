use super::basic::lerp;
use super::Interpolant;
use crate::core::scalar::Real;

/// Order-0 Bezier: the single control value
#[inline]
pub fn bezier0<T: Real, V: Interpolant<T>>(v0: V, _t: T) -> V {
    v0
}

/// Order-1 Bezier, identical to [`lerp`]
#[inline]
pub fn bezier1<T: Real, V: Interpolant<T>>(v0: V, v1: V, t: T) -> V {
    lerp(v0, v1, t)
}

/// Quadratic Bezier in Bernstein form
#[inline]
pub fn bezier2<T: Real, V: Interpolant<T>>(v0: V, v1: V, v2: V, t: T) -> V {
    let s = T::one() - t;
    v0 * (s * s) + v1 * (T::two() * s * t) + v2 * (t * t)
}

/// Cubic Bezier in Bernstein form
#[inline]
pub fn bezier3<T: Real, V: Interpolant<T>>(v0: V, v1: V, v2: V, v3: V, t: T) -> V {
    let s = T::one() - t;
    let three = T::lit(3.0);
    v0 * (s * s * s) + v1 * (three * s * s * t) + v2 * (three * s * t * t) + v3 * (t * t * t)
}

/// Bezier of arbitrary order by de Casteljau reduction; `None` for no control values
pub fn bezier<T: Real, V: Interpolant<T>>(controls: &[V], t: T) -> Option<V> {
    match controls {
        [] => None,
        [v0] => Some(*v0),
        [v0, v1] => Some(lerp(*v0, *v1, t)),
        _ => {
            let mut points = controls.to_vec();
            for order in (1..points.len()).rev() {
                for i in 0..order {
                    points[i] = lerp(points[i], points[i + 1], t);
                }
            }
            Some(points[0])
        }
    }
}

/// Cubic Hermite segment from endpoint values and tangents
#[inline]
pub fn cubic_hermite<T: Real, V: Interpolant<T>>(v0: V, dv0: V, v1: V, dv1: V, t: T) -> V {
    let t2 = t * t;
    let t3 = t2 * t;
    let two = T::two();
    let three = T::lit(3.0);

    let h00 = two * t3 - three * t2 + T::one();
    let h10 = t3 - two * t2 + t;
    let h01 = three * t2 - two * t3;
    let h11 = t3 - t2;

    v0 * h00 + dv0 * h10 + v1 * h01 + dv1 * h11
}

/// Cubic Hermite segment whose tangents are given as handle positions (`value + tangent`)
#[inline]
pub fn cubic_hermite_handles<T: Real, V: Interpolant<T>>(v0: V, h0: V, v1: V, h1: V, t: T) -> V {
    cubic_hermite(v0, h0 - v0, v1, h1 - v1, t)
}

/// Catmull-Rom segment between `v0` and `v1` with neighbours `vp` (previous) and `vn` (next)
#[inline]
pub fn catmull_rom<T: Real, V: Interpolant<T>>(vp: V, v0: V, v1: V, vn: V, t: T) -> V {
    cubic_hermite(v0, (v1 - vp) * T::half(), v1, (vn - v0) * T::half(), t)
}

/// Bicubic Hermite patch.
///
/// Each row holds one Hermite control set `[v0, dv0, v1, dv1]` evaluated along
/// `t0`; the rows are, in order, the start values, start tangents, end values
/// and end tangents of the segment across `t1`.
pub fn bi_cubic_hermite<T: Real, V: Interpolant<T>>(rows: &[[V; 4]; 4], t0: T, t1: T) -> V {
    let [a, b, c, d] = (*rows).map(|[v0, dv0, v1, dv1]| cubic_hermite(v0, dv0, v1, dv1, t0));
    cubic_hermite(a, b, c, d, t1)
}

/// Bicubic Catmull-Rom patch over a 4x4 grid; `t0` runs along each row, `t1` across rows
pub fn bi_catmull_rom<T: Real, V: Interpolant<T>>(grid: &[[V; 4]; 4], t0: T, t1: T) -> V {
    let [a, b, c, d] = (*grid).map(|[vp, v0, v1, vn]| catmull_rom(vp, v0, v1, vn, t0));
    catmull_rom(a, b, c, d, t1)
}
