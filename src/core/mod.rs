pub mod config;
pub mod scalar;

pub use self::config::{ReparamConfig, TrigTableConfig};
pub use self::scalar::{
    abs, approx_eq, clamp, deg_to_rad, div_safe, is_nonzero, is_zero, rad_to_deg, recip_safe,
    sign, Real,
};
