//! Measurement and drive value types.
//!
//! All three types are plain values tied to a single tick: a [`Measurement`]
//! comes in from the sensor, becomes a [`Target`] after range clamping, and
//! leaves as a [`DriveOutput`]. Nothing here outlives the tick it belongs to.

use lux_core::{Current, Real, Temperature, amp, k};
use serde::{Deserialize, Serialize};

/// Ambient conditions reported by the sensor for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Ambient illuminance (lux). Unbounded as received; may be negative
    /// or non-finite if the sensor misbehaves.
    pub illuminance: Real,
    /// Ambient color temperature (kelvin).
    pub color_temperature: i32,
}

impl Measurement {
    /// Create a new measurement.
    pub fn new(illuminance: Real, color_temperature: i32) -> Self {
        Self {
            illuminance,
            color_temperature,
        }
    }

    /// Color temperature as a unit quantity.
    pub fn color_temperature_kelvin(&self) -> Temperature {
        k(Real::from(self.color_temperature))
    }
}

/// Desired lamp output for one tick, derived from a [`Measurement`] by
/// range clamping.
///
/// Illuminance is guaranteed to lie inside the configured operating
/// envelope; color temperature is carried through from the measurement
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Target illuminance (lux), inside `[min_lux, max_lux]`.
    pub illuminance: Real,
    /// Target color temperature (kelvin), pass-through from the measurement.
    pub color_temperature: i32,
}

/// Drive currents for the two lamp channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriveOutput {
    /// White (cool) channel current (amps), non-negative.
    pub white_current: Real,
    /// Yellow (warm) channel current (amps), non-negative.
    pub yellow_current: Real,
}

impl DriveOutput {
    /// Total current across both channels.
    pub fn total_current(&self) -> Real {
        self.white_current + self.yellow_current
    }

    /// White channel current as a unit quantity.
    pub fn white_current_amps(&self) -> Current {
        amp(self.white_current)
    }

    /// Yellow channel current as a unit quantity.
    pub fn yellow_current_amps(&self) -> Current {
        amp(self.yellow_current)
    }
}
