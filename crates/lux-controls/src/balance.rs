//! White/yellow color balance.
//!
//! Second stage of the pipeline: split a target between the two lamp
//! channels so that the sum of the channel currents reproduces the target
//! illuminance and their ratio reproduces the target color temperature.
//!
//! The ratio law is a three-segment function of color temperature `t`:
//! fully yellow at or below `warm_temp_k`, fully white at or above
//! `cool_temp_k`, linear interpolation strictly in between. Both boundary
//! temperatures belong to the saturate branches, so the interpolation
//! denominator is never evaluated at the limits.

use crate::config::LampConfig;
use crate::error::{ControlError, ControlResult};
use crate::measurement::{DriveOutput, Target};
use lux_core::Real;
use serde::{Deserialize, Serialize};

/// Computes the white/yellow drive split for a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorBalance {
    /// Fully-warm color temperature (kelvin).
    pub warm_temp_k: i32,
    /// Fully-cool color temperature (kelvin).
    pub cool_temp_k: i32,
    /// Conversion constant from target lux to channel current (amps per lux).
    pub lux_to_amps: Real,
}

impl ColorBalance {
    /// Create a new color balance stage.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArg` if the warm/cool temperatures are not strictly
    /// ordered or the conversion constant is not a positive finite number.
    pub fn new(warm_temp_k: i32, cool_temp_k: i32, lux_to_amps: Real) -> ControlResult<Self> {
        if warm_temp_k >= cool_temp_k {
            return Err(ControlError::InvalidArg {
                what: "warm_temp_k must be less than cool_temp_k",
            });
        }
        if !lux_to_amps.is_finite() || lux_to_amps <= 0.0 {
            return Err(ControlError::InvalidArg {
                what: "lux_to_amps must be positive and finite",
            });
        }
        Ok(Self {
            warm_temp_k,
            cool_temp_k,
            lux_to_amps,
        })
    }

    /// Build a color balance stage from a lamp configuration.
    pub fn from_config(config: &LampConfig) -> ControlResult<Self> {
        Self::new(config.warm_temp_k, config.cool_temp_k, config.lux_to_amps)
    }

    /// White-channel share of the total output for a color temperature.
    ///
    /// 0.0 at or below `warm_temp_k`, 1.0 at or above `cool_temp_k`,
    /// strictly between otherwise. The yellow share is always the
    /// complement, see [`compute_drive`](Self::compute_drive).
    pub fn white_ratio(&self, color_temperature: i32) -> Real {
        if color_temperature <= self.warm_temp_k {
            0.0
        } else if color_temperature >= self.cool_temp_k {
            1.0
        } else {
            Real::from(color_temperature - self.warm_temp_k)
                / Real::from(self.cool_temp_k - self.warm_temp_k)
        }
    }

    /// Convert a target into drive currents for the two channels.
    ///
    /// The yellow ratio is formed as `1.0 - white_ratio`, never recomputed
    /// independently, so the two shares partition the target exactly in
    /// every branch. The target illuminance is trusted to be in range
    /// already; an out-of-range value still produces the proportional split
    /// without panicking.
    pub fn compute_drive(&self, target: &Target) -> DriveOutput {
        let white_ratio = self.white_ratio(target.color_temperature);
        let yellow_ratio = 1.0 - white_ratio;

        DriveOutput {
            white_current: white_ratio * target.illuminance * self.lux_to_amps,
            yellow_current: yellow_ratio * target.illuminance * self.lux_to_amps,
        }
    }
}
