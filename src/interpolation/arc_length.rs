use super::basic::{lerp, unlerp_safe};
use super::curve::{catmull_rom, cubic_hermite};
use super::Interpolant;
use crate::core::config::ReparamConfig;
use crate::core::scalar::{self, Real};
use crate::error::MathError;
use crate::math::{Vector2, Vector3, Vector4};
use crate::Result;

/// Euclidean size of a value, used to accumulate chord lengths along a curve
pub trait Magnitude<T: Real> {
    fn magnitude(&self) -> T;
}

macro_rules! impl_scalar_magnitude {
    ($($t:ty),+) => {
        $(
            impl Magnitude<$t> for $t {
                #[inline]
                fn magnitude(&self) -> $t {
                    self.abs()
                }
            }
        )+
    };
}

impl_scalar_magnitude!(f32, f64);

macro_rules! impl_vector_magnitude {
    ($($name:ident),+) => {
        $(
            impl<T: Real> Magnitude<T> for $name<T> {
                #[inline]
                fn magnitude(&self) -> T {
                    self.length()
                }
            }
        )+
    };
}

impl_vector_magnitude!(Vector2, Vector3, Vector4);

/// Samples of a curve segment at evenly spaced parameters, with cumulative
/// chord lengths for constant-speed traversal
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable<T, V> {
    params: Vec<T>,
    arc_lengths: Vec<T>,
    values: Vec<V>,
    total_length: T,
    normalized: bool,
}

impl<T: Real, V: Interpolant<T> + Magnitude<T>> ArcLengthTable<T, V> {
    /// Samples `curve` at `config.samples + 1` parameters over [0, 1]
    pub fn from_curve<F>(curve: F, config: &ReparamConfig) -> Result<Self>
    where
        F: Fn(T) -> V,
    {
        config.validate()?;

        let count = config.samples + 1;
        let mut params = Vec::with_capacity(count);
        let mut arc_lengths = Vec::with_capacity(count);
        let mut values = Vec::with_capacity(count);

        let mut total = T::zero();
        for i in 0..count {
            let t = T::lit(i as f64 / config.samples as f64);
            let value = curve(t);
            if let Some(previous) = values.last() {
                total = total + (value - *previous).magnitude();
            }
            params.push(t);
            arc_lengths.push(total);
            values.push(value);
        }

        if config.normalize {
            for s in arc_lengths.iter_mut() {
                *s = scalar::div_safe(*s, total);
            }
        }

        log::debug!(
            "reparameterized curve segment: {} samples, arc length {}",
            config.samples,
            total
        );

        Ok(Self {
            params,
            arc_lengths,
            values,
            total_length: total,
            normalized: config.normalize,
        })
    }

    /// Reparameterizes a cubic Hermite segment
    pub fn reparam_cubic_hermite(v0: V, dv0: V, v1: V, dv1: V, config: &ReparamConfig) -> Result<Self> {
        Self::from_curve(|t| cubic_hermite(v0, dv0, v1, dv1, t), config)
    }

    /// Reparameterizes the Catmull-Rom segment between `v0` and `v1`
    pub fn reparam_catmull_rom(vp: V, v0: V, v1: V, vn: V, config: &ReparamConfig) -> Result<Self> {
        Self::from_curve(|t| catmull_rom(vp, v0, v1, vn, t), config)
    }

    /// Curve value at arc length `s` (normalized when the table is)
    pub fn value_at_arc_length(&self, s: T) -> Result<V> {
        sample_table_increasing(&self.arc_lengths, &self.values, s, 1)
    }

    /// Curve parameter at arc length `s` (normalized when the table is)
    pub fn parameter_at_arc_length(&self, s: T) -> Result<T> {
        sample_table_increasing(&self.arc_lengths, &self.params, s, 1)
    }
}

impl<T: Real, V> ArcLengthTable<T, V> {
    /// Evenly spaced curve parameters over [0, 1]
    #[inline]
    pub fn params(&self) -> &[T] {
        &self.params
    }

    /// Cumulative arc length at each parameter
    #[inline]
    pub fn arc_lengths(&self) -> &[T] {
        &self.arc_lengths
    }

    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Total arc length of the segment; never normalized
    #[inline]
    pub fn total_length(&self) -> T {
        self.total_length
    }

    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Interpolates `values` at `query` against increasing `keys`.
///
/// The bracketing index is found by stepping `step` entries at a time, then
/// one at a time. Queries outside the table clamp to the first or last value.
pub fn sample_table_increasing<T: Real, V: Interpolant<T>>(
    keys: &[T],
    values: &[V],
    query: T,
    step: usize,
) -> Result<V> {
    sample_table(keys, values, query, step, |a, b| a <= b)
}

/// Interpolates `values` at `query` against decreasing `keys`; the mirror of
/// [`sample_table_increasing`]
pub fn sample_table_decreasing<T: Real, V: Interpolant<T>>(
    keys: &[T],
    values: &[V],
    query: T,
    step: usize,
) -> Result<V> {
    sample_table(keys, values, query, step, |a, b| a >= b)
}

/// `ordered(a, b)` is true when `a` comes no later than `b` in table order
fn sample_table<T, V, F>(keys: &[T], values: &[V], query: T, step: usize, ordered: F) -> Result<V>
where
    T: Real,
    V: Interpolant<T>,
    F: Fn(T, T) -> bool,
{
    if keys.len() != values.len() {
        return Err(MathError::LengthMismatch {
            expected: keys.len(),
            found: values.len(),
        });
    }
    if keys.len() < 2 {
        return Err(MathError::TableTooShort {
            min: 2,
            found: keys.len(),
        });
    }
    if step == 0 {
        return Err(MathError::InvalidParameter("table step must be at least 1".into()));
    }

    let last = keys.len() - 1;
    if ordered(query, keys[0]) {
        return Ok(values[0]);
    }
    if ordered(keys[last], query) {
        return Ok(values[last]);
    }

    let mut i = 0;
    while i + step < last && ordered(keys[i + step], query) {
        i += step;
    }
    while i + 1 < last && ordered(keys[i + 1], query) {
        i += 1;
    }

    let t = unlerp_safe(keys[i], keys[i + 1], query);
    Ok(lerp(values[i], values[i + 1], t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coarse_step_lands_in_same_bracket() {
        let keys: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let values: Vec<f64> = keys.iter().map(|k| k * 3.0).collect();
        for step in [1, 3, 7, 50] {
            let v = sample_table_increasing(&keys, &values, 12.5, step).unwrap();
            assert!((v - 37.5).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_length_curve_normalizes_to_zero() {
        let config = ReparamConfig::new(4, true);
        let table = ArcLengthTable::<f64, f64>::reparam_cubic_hermite(1.0, 0.0, 1.0, 0.0, &config).unwrap();
        assert_eq!(table.total_length(), 0.0);
        assert!(table.arc_lengths().iter().all(|s| *s == 0.0));
        assert_eq!(table.value_at_arc_length(0.5).unwrap(), 1.0);
    }
}
