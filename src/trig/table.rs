use super::basic::{valid_deg, valid_unit};
use crate::core::config::TrigTableConfig;
use crate::core::scalar::{self, Real};
use crate::interpolation::lerp;
use crate::Result;

/// Precomputed trigonometry samples, read with linear interpolation.
///
/// Built once and immutable afterwards, so a single table can be shared by
/// reference across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct TrigTable<T> {
    config: TrigTableConfig,
    sin: Vec<T>,
    cos: Vec<T>,
    asin: Vec<T>,
    acos: Vec<T>,
}

impl<T: Real> TrigTable<T> {
    /// Samples sin/cos over [0°, 360°] and asin/acos (in degrees) over [-1, 1]
    pub fn new(config: &TrigTableConfig) -> Result<Self> {
        config.validate()?;

        let per_degree = T::lit(config.samples_per_degree as f64);
        let (sin, cos) = (0..config.forward_len())
            .map(|i| scalar::deg_to_rad(T::lit(i as f64) / per_degree).sin_cos())
            .unzip();

        let intervals = T::lit(config.inverse_samples as f64);
        let (asin, acos) = (0..=config.inverse_samples)
            .map(|i| {
                let x = valid_unit(T::two() * T::lit(i as f64) / intervals - T::one());
                (scalar::rad_to_deg(x.asin()), scalar::rad_to_deg(x.acos()))
            })
            .unzip();

        log::debug!(
            "built trig table: {} forward samples, {} inverse samples",
            config.forward_len(),
            config.inverse_samples + 1
        );

        Ok(Self { config: *config, sin, cos, asin, acos })
    }

    #[inline]
    pub fn config(&self) -> &TrigTableConfig {
        &self.config
    }

    /// Sine of an angle in degrees
    #[inline]
    pub fn sind(&self, x: T) -> T {
        Self::lookup(&self.sin, self.forward_position(x))
    }

    /// Cosine of an angle in degrees
    #[inline]
    pub fn cosd(&self, x: T) -> T {
        Self::lookup(&self.cos, self.forward_position(x))
    }

    /// Tangent of an angle in degrees; undefined at ±90°
    #[inline]
    pub fn tand(&self, x: T) -> T {
        let position = self.forward_position(x);
        Self::lookup(&self.sin, position) / Self::lookup(&self.cos, position)
    }

    /// Inverse sine in degrees; the input is clamped to [-1, 1]
    #[inline]
    pub fn asind(&self, x: T) -> T {
        Self::lookup(&self.asin, self.inverse_position(x))
    }

    /// Inverse cosine in degrees; the input is clamped to [-1, 1]
    #[inline]
    pub fn acosd(&self, x: T) -> T {
        Self::lookup(&self.acos, self.inverse_position(x))
    }

    /// Fractional sample index of an angle wrapped into [0°, 360°)
    fn forward_position(&self, x: T) -> T {
        let mut x = valid_deg(x);
        if x < T::zero() {
            x = x + T::lit(360.0);
        }
        x * T::lit(self.config.samples_per_degree as f64)
    }

    fn inverse_position(&self, x: T) -> T {
        (valid_unit(x) + T::one()) * T::half() * T::lit(self.config.inverse_samples as f64)
    }

    fn lookup(samples: &[T], position: T) -> T {
        let last = samples.len().saturating_sub(2);
        let index = position.floor().to_usize().unwrap_or(0).min(last);
        let frac = position - T::lit(index as f64);
        lerp(samples[index], samples[index + 1], frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hit_stored_samples() {
        let table = TrigTable::<f64>::new(&TrigTableConfig::default()).unwrap();
        assert!((table.sind(90.0) - 1.0).abs() < 1e-12);
        assert!((table.cosd(360.0) - 1.0).abs() < 1e-12);
        assert!((table.asind(1.0) - 90.0).abs() < 1e-9);
        assert!((table.acosd(-1.0) - 180.0).abs() < 1e-9);
    }
}
