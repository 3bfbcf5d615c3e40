//! Illuminance range clamping.
//!
//! First stage of the pipeline: bound the raw illuminance reading into the
//! supported operating envelope. Color temperature is not clamped or
//! validated anywhere; out-of-band values saturate the ratio law in the
//! balance stage instead.

use crate::config::LampConfig;
use crate::error::{ControlError, ControlResult};
use crate::measurement::{Measurement, Target};
use lux_core::Real;
use serde::{Deserialize, Serialize};

/// Saturates measured illuminance into `[min_lux, max_lux]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeClamp {
    /// Lower illuminance bound (lux).
    pub min_lux: Real,
    /// Upper illuminance bound (lux).
    pub max_lux: Real,
}

impl RangeClamp {
    /// Create a new range clamp.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArg` if the bounds are non-finite or do not form a
    /// non-empty range.
    pub fn new(min_lux: Real, max_lux: Real) -> ControlResult<Self> {
        if !min_lux.is_finite() || !max_lux.is_finite() {
            return Err(ControlError::InvalidArg {
                what: "lux limits must be finite",
            });
        }
        if min_lux >= max_lux {
            return Err(ControlError::InvalidArg {
                what: "min_lux must be less than max_lux",
            });
        }
        Ok(Self { min_lux, max_lux })
    }

    /// Build a range clamp from a lamp configuration.
    pub fn from_config(config: &LampConfig) -> ControlResult<Self> {
        Self::new(config.min_lux, config.max_lux)
    }

    /// Derive the target for one tick from a raw measurement.
    ///
    /// Total over all inputs: out-of-range illuminance (negative included)
    /// silently saturates. A NaN illuminance propagates as NaN; callers that
    /// want to reject non-finite sensors do so at the pipeline boundary.
    pub fn clamp_illuminance(&self, measurement: &Measurement) -> Target {
        Target {
            illuminance: measurement.illuminance.clamp(self.min_lux, self.max_lux),
            color_temperature: measurement.color_temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_clamp() -> RangeClamp {
        RangeClamp::from_config(&LampConfig::default()).unwrap()
    }

    #[test]
    fn in_range_passes_through() {
        let clamp = default_clamp();
        let target = clamp.clamp_illuminance(&Measurement::new(600.0, 4500));
        assert_eq!(target.illuminance, 600.0);
        assert_eq!(target.color_temperature, 4500);
    }

    #[test]
    fn below_range_saturates_low() {
        let clamp = default_clamp();
        let target = clamp.clamp_illuminance(&Measurement::new(50.0, 2700));
        assert_eq!(target.illuminance, 200.0);
    }

    #[test]
    fn above_range_saturates_high() {
        let clamp = default_clamp();
        let target = clamp.clamp_illuminance(&Measurement::new(2000.0, 6500));
        assert_eq!(target.illuminance, 1300.0);
    }

    #[test]
    fn negative_and_zero_saturate_low() {
        let clamp = default_clamp();
        assert_eq!(
            clamp.clamp_illuminance(&Measurement::new(0.0, 4000)).illuminance,
            200.0
        );
        assert_eq!(
            clamp
                .clamp_illuminance(&Measurement::new(-500.0, 4000))
                .illuminance,
            200.0
        );
    }

    #[test]
    fn color_temperature_never_touched() {
        let clamp = default_clamp();
        // Far outside [2700, 6500]; still passed through verbatim.
        let target = clamp.clamp_illuminance(&Measurement::new(600.0, 100_000));
        assert_eq!(target.color_temperature, 100_000);
        let target = clamp.clamp_illuminance(&Measurement::new(600.0, -40));
        assert_eq!(target.color_temperature, -40);
    }

    #[test]
    fn clamping_is_idempotent() {
        let clamp = default_clamp();
        for lux in [-1e9, 0.0, 199.999, 200.0, 750.0, 1300.0, 1e9] {
            let once = clamp.clamp_illuminance(&Measurement::new(lux, 4000));
            let twice = clamp.clamp_illuminance(&Measurement::new(once.illuminance, 4000));
            assert_eq!(once.illuminance, twice.illuminance);
        }
    }

    #[test]
    fn invalid_bounds_rejected() {
        assert!(RangeClamp::new(1300.0, 200.0).is_err());
        assert!(RangeClamp::new(200.0, 200.0).is_err());
        assert!(RangeClamp::new(f64::NAN, 1300.0).is_err());
    }

    mod proptests {
        use super::default_clamp;
        use crate::measurement::Measurement;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn clamped_value_always_in_range(lux in -1e12_f64..1e12_f64, temp in -100_000_i32..100_000_i32) {
                let clamp = default_clamp();
                let target = clamp.clamp_illuminance(&Measurement::new(lux, temp));
                prop_assert!(target.illuminance >= clamp.min_lux);
                prop_assert!(target.illuminance <= clamp.max_lux);
                prop_assert_eq!(target.color_temperature, temp);
            }

            #[test]
            fn clamp_idempotent(lux in -1e12_f64..1e12_f64) {
                let clamp = default_clamp();
                let once = clamp.clamp_illuminance(&Measurement::new(lux, 4000));
                let twice = clamp.clamp_illuminance(&Measurement::new(once.illuminance, 4000));
                prop_assert_eq!(once, twice);
            }
        }
    }
}
