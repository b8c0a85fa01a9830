//! Error types.
//!
//! The automaton itself cannot fail; only configuration is validated.

use thiserror::Error;

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value could not be parsed
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    /// Grid must have at least one row and one column
    #[error("grid {axis} must be at least 1")]
    ZeroDimension { axis: &'static str },

    /// Sizes and durations must be finite and > 0
    #[error("{key} must be positive, got {value}")]
    NonPositive { key: &'static str, value: f32 },

    /// Distances that may be zero but not negative
    #[error("{key} must be non-negative, got {value}")]
    Negative { key: &'static str, value: f32 },

    /// Marker duration range is inverted
    #[error("marker duration range is empty: {min}s > {max}s")]
    DurationRange { min: f32, max: f32 },
}

/// Result type for configuration
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    pub fn invalid(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
        }
    }
}
