//! Pipeline composition.
//!
//! Glues the two stages together behind the single entry point the
//! scheduler calls once per tick.

use crate::balance::ColorBalance;
use crate::clamp::RangeClamp;
use crate::config::LampConfig;
use crate::error::ControlResult;
use crate::measurement::{DriveOutput, Measurement};
use lux_core::ensure_finite;
use serde::{Deserialize, Serialize};

/// Measurement-to-drive pipeline for one lamp.
///
/// Both stages are pure, so `tick` is idempotent: the same measurement
/// always yields a bit-identical drive output, and no state is carried
/// between ticks.
///
/// # Example
///
/// ```
/// use lux_controls::{LampConfig, LampPipeline, Measurement};
///
/// let pipeline = LampPipeline::new(LampConfig::default()).unwrap();
/// let out = pipeline.tick(&Measurement::new(600.0, 4500));
///
/// assert!((out.white_current - 0.3).abs() < 1e-12);
/// assert!((out.yellow_current - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LampPipeline {
    clamp: RangeClamp,
    balance: ColorBalance,
}

impl LampPipeline {
    /// Build a pipeline from a lamp configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArg` if the configuration fails
    /// [`LampConfig::validate`].
    pub fn new(config: LampConfig) -> ControlResult<Self> {
        config.validate()?;
        Ok(Self {
            clamp: RangeClamp::from_config(&config)?,
            balance: ColorBalance::from_config(&config)?,
        })
    }

    /// The range-clamp stage.
    pub fn clamp(&self) -> &RangeClamp {
        &self.clamp
    }

    /// The color-balance stage.
    pub fn balance(&self) -> &ColorBalance {
        &self.balance
    }

    /// Run one tick: clamp the measurement, then compute the drive split.
    ///
    /// Total over all finite input. A non-finite illuminance propagates as
    /// non-finite output (comparisons against NaN are not meaningful); use
    /// [`tick_checked`](Self::tick_checked) to reject such sensors at the
    /// boundary instead.
    pub fn tick(&self, measurement: &Measurement) -> DriveOutput {
        let target = self.clamp.clamp_illuminance(measurement);
        self.balance.compute_drive(&target)
    }

    /// Like [`tick`](Self::tick), but rejects non-finite illuminance with
    /// `InvalidMeasurement` before it enters the pipeline.
    pub fn tick_checked(&self, measurement: &Measurement) -> ControlResult<DriveOutput> {
        ensure_finite(measurement.illuminance, "measured illuminance")?;
        Ok(self.tick(measurement))
    }
}
