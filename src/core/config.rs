use crate::error::MathError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Resolution of a precomputed trigonometry lookup table
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct TrigTableConfig {
    /// Number of sin/cos samples per degree over [0, 360]
    pub samples_per_degree: usize,

    /// Number of asin/acos intervals over [-1, 1]
    pub inverse_samples: usize,
}

impl Default for TrigTableConfig {
    fn default() -> Self {
        Self {
            samples_per_degree: 4,
            inverse_samples: 1024,
        }
    }
}

impl TrigTableConfig {
    /// Checks that both resolutions are non-zero
    pub fn validate(&self) -> Result<()> {
        if self.samples_per_degree == 0 {
            log::warn!("rejecting trig table config with zero samples per degree");
            return Err(MathError::InvalidParameter(
                "samples_per_degree must be at least 1".into(),
            ));
        }
        if self.inverse_samples == 0 {
            log::warn!("rejecting trig table config with zero inverse samples");
            return Err(MathError::InvalidParameter(
                "inverse_samples must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Total number of forward samples, including both endpoints
    #[inline]
    pub fn forward_len(&self) -> usize {
        self.samples_per_degree * 360 + 1
    }
}

/// Parameters for arc-length reparameterization of a curve segment
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ReparamConfig {
    /// Number of evenly spaced intervals; the table holds `samples + 1` entries
    pub samples: usize,

    /// Whether cumulative arc lengths are divided by the total length
    pub normalize: bool,
}

impl Default for ReparamConfig {
    fn default() -> Self {
        Self {
            samples: 32,
            normalize: false,
        }
    }
}

impl ReparamConfig {
    #[inline]
    pub fn new(samples: usize, normalize: bool) -> Self {
        Self { samples, normalize }
    }

    /// Checks that at least one interval is requested
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            log::warn!("rejecting reparameterization with zero samples");
            return Err(MathError::InvalidParameter("samples must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(TrigTableConfig::default().validate().is_ok());
        assert!(ReparamConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let config = TrigTableConfig { samples_per_degree: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(MathError::InvalidParameter(_))));
        assert!(ReparamConfig::new(0, true).validate().is_err());
    }
}
