//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while driving the control pipeline.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Control error: {message}")]
    Control { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<lux_controls::ControlError> for SimError {
    fn from(e: lux_controls::ControlError) -> Self {
        SimError::Control {
            message: e.to_string(),
        }
    }
}
