// Domain-level errors for configuring and stepping a simulation.

use std::fmt;

/// Rejected configuration. Raised before any simulation state is touched.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NegativeCount { field: &'static str, value: i64 },
    CountTooLarge { field: &'static str, value: i64 },
    NonFinite { field: &'static str },
    PhOutOfRange(f64),
    InvalidArena { width: f64, height: f64 },
    ZeroSampleInterval,
    InvalidBaseSpeed(f64),
    InvalidPlateauWindow(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeCount { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            ConfigError::CountTooLarge { field, value } => {
                write!(f, "{field} is too large (got {value})")
            }
            ConfigError::NonFinite { field } => write!(f, "{field} must be a finite number"),
            ConfigError::PhOutOfRange(ph) => write!(f, "pH must lie in [0, 14] (got {ph})"),
            ConfigError::InvalidArena { width, height } => {
                write!(f, "arena must have positive size (got {width} x {height})")
            }
            ConfigError::ZeroSampleInterval => write!(f, "sample interval must be at least 1"),
            ConfigError::InvalidBaseSpeed(speed) => {
                write!(f, "base speed must be positive (got {speed})")
            }
            ConfigError::InvalidPlateauWindow(intervals) => write!(
                f,
                "plateau_intervals must be between 1 and {} (got {intervals})",
                usize::MAX - 1
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    Configuration(ConfigError),
    /// Complex/enzyme bookkeeping is inconsistent; the step was aborted.
    InvariantViolation(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Configuration(err) => write!(f, "invalid configuration: {err}"),
            SimError::InvariantViolation(detail) => write!(f, "invariant violated: {detail}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Configuration(err) => Some(err),
            SimError::InvariantViolation(_) => None,
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(err: ConfigError) -> Self {
        SimError::Configuration(err)
    }
}
