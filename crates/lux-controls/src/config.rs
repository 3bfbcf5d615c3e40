//! Lamp configuration.

use crate::error::{ControlError, ControlResult};
use lux_core::Real;
use serde::{Deserialize, Serialize};

/// Default minimum supported illuminance (lux).
pub const DEFAULT_MIN_LUX: Real = 200.0;
/// Default maximum supported illuminance (lux).
pub const DEFAULT_MAX_LUX: Real = 1300.0;
/// Default fully-warm color temperature (kelvin).
pub const DEFAULT_WARM_TEMP_K: i32 = 2700;
/// Default fully-cool color temperature (kelvin).
pub const DEFAULT_COOL_TEMP_K: i32 = 6500;
/// Default lux-to-amps conversion constant.
pub const DEFAULT_LUX_TO_AMPS: Real = 0.001;

/// Operating limits and conversion constants for one lamp.
///
/// Fixed for the lifetime of a pipeline; validated once when the pipeline is
/// built, never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LampConfig {
    /// Minimum supported illuminance (lux).
    pub min_lux: Real,
    /// Maximum supported illuminance (lux).
    pub max_lux: Real,
    /// Color temperature at or below which the lamp is fully yellow (kelvin).
    pub warm_temp_k: i32,
    /// Color temperature at or above which the lamp is fully white (kelvin).
    pub cool_temp_k: i32,
    /// Conversion constant from target lux to channel current (amps per lux).
    pub lux_to_amps: Real,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            min_lux: DEFAULT_MIN_LUX,
            max_lux: DEFAULT_MAX_LUX,
            warm_temp_k: DEFAULT_WARM_TEMP_K,
            cool_temp_k: DEFAULT_COOL_TEMP_K,
            lux_to_amps: DEFAULT_LUX_TO_AMPS,
        }
    }
}

impl LampConfig {
    /// Check that the configuration describes a usable lamp.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArg` if the lux range is empty or non-finite, the
    /// warm/cool temperatures are not strictly ordered, or the conversion
    /// constant is not a positive finite number.
    pub fn validate(&self) -> ControlResult<()> {
        if !self.min_lux.is_finite() || !self.max_lux.is_finite() {
            return Err(ControlError::InvalidArg {
                what: "lux limits must be finite",
            });
        }
        if self.min_lux >= self.max_lux {
            return Err(ControlError::InvalidArg {
                what: "min_lux must be less than max_lux",
            });
        }
        if self.warm_temp_k >= self.cool_temp_k {
            return Err(ControlError::InvalidArg {
                what: "warm_temp_k must be less than cool_temp_k",
            });
        }
        if !self.lux_to_amps.is_finite() || self.lux_to_amps <= 0.0 {
            return Err(ControlError::InvalidArg {
                what: "lux_to_amps must be positive and finite",
            });
        }
        Ok(())
    }
}
