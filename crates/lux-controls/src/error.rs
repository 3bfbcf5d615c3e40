//! Error types for control pipeline operations.

use thiserror::Error;

/// Result type for control pipeline operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur in control pipeline operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a control function.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Measurement rejected at the pipeline boundary.
    #[error("Invalid measurement: {what} is {value}")]
    InvalidMeasurement { what: &'static str, value: f64 },
}

impl From<lux_core::LuxError> for ControlError {
    fn from(e: lux_core::LuxError) -> Self {
        match e {
            lux_core::LuxError::NonFinite { what, value } => {
                ControlError::InvalidMeasurement { what, value }
            }
            lux_core::LuxError::InvalidArg { what } => ControlError::InvalidArg { what },
            lux_core::LuxError::Invariant { what } => ControlError::InvalidArg { what },
        }
    }
}
