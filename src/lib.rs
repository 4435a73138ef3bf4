//! Fixed-size linear-algebra kernel.
//!
//! Vectors, column-major matrices and quaternions of dimension 2 to 4, generic
//! over `f32`/`f64`, together with transform factories and decomposition,
//! look-at and projection construction, interpolation curves and
//! degree/radian trigonometry.
//!
//! Every operation returns its result by value. All value types are `Copy`,
//! so the output-parameter style of a C API reduces to an assignment at the
//! call site (`*out = m.inverse_safe()`).

pub mod core;
pub mod math;
pub mod interpolation;
pub mod trig;

/// Re-export common types for easier usage
pub use crate::core::{Real, ReparamConfig, TrigTableConfig};
pub use crate::math::{
    Matrix2, Matrix3, Matrix4, Quaternion, Rotation, RotationOrder, StereoConversion, Transform,
    TransformBasis, Vector2, Vector3, Vector4,
};
pub use crate::interpolation::ArcLengthTable;
pub use crate::trig::TrigTable;

/// Error types for the math kernel
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum MathError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Length mismatch: expected {expected} elements, found {found}")]
        LengthMismatch { expected: usize, found: usize },

        #[error("Table too short: need at least {min} entries, found {found}")]
        TableTooShort { min: usize, found: usize },

        #[error("Unknown rotation order: {0}")]
        ParseRotationOrder(String),
    }
}

/// Result type for fallible kernel operations
pub type Result<T> = std::result::Result<T, error::MathError>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
