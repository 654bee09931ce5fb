//! Error types for the distance reset library

use thiserror::Error;

/// A correction that was refused
///
/// Returning one of these guarantees the pose was not written.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ResetError {
    #[error("{sensor} sensor reported no object in range")]
    NoReading { sensor: &'static str },

    #[error("{sensor} sensor reading {value:.2} outside plausible range (0, {max}]")]
    Implausible {
        sensor: &'static str,
        value: f64,
        max: f64,
    },
}

/// A configuration value that can never produce a meaningful correction
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("sensor spacing must be positive, got {0}")]
    NonPositiveSpacing(f64),

    #[error("field half size must be positive, got {0}")]
    NonPositiveFieldHalf(f64),

    #[error("plausible reading bound must be positive, got {0}")]
    NonPositivePlausibleMax(f64),

    #[error("poll interval must be at least 1 ms")]
    ZeroPollInterval,
}

pub type Result<T> = core::result::Result<T, ResetError>;
