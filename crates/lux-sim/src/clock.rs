//! Periodic tick scheduling.
//!
//! The pipeline runs in sampled mode: one invocation per clock period.
//! Between ticks the last drive output is simply held by whoever consumes
//! it. This module provides the timing bookkeeping for that schedule.

use serde::{Deserialize, Serialize};

/// Sample configuration for the control tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Sample period in seconds.
    pub period: f64,
}

impl SampleConfig {
    /// Create a new sample configuration.
    ///
    /// # Arguments
    ///
    /// * `period` - Sample period in seconds (must be positive)
    ///
    /// # Panics
    ///
    /// Panics if `period` is not positive.
    pub fn new(period: f64) -> Self {
        assert!(period > 0.0, "Sample period must be positive");
        Self { period }
    }

    /// Create a sample configuration from frequency in Hz.
    pub fn from_frequency(freq_hz: f64) -> Self {
        assert!(freq_hz > 0.0, "Frequency must be positive");
        Self {
            period: 1.0 / freq_hz,
        }
    }

    /// Get the sample frequency in Hz.
    pub fn frequency(&self) -> f64 {
        1.0 / self.period
    }
}

/// Tick clock tracks when the pipeline should next run.
///
/// The pipeline only executes at discrete tick times; each tick consumes
/// one measurement and produces one drive output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickClock {
    /// Sample configuration.
    pub config: SampleConfig,
    /// Time of the next scheduled tick.
    pub next_tick_time: f64,
}

impl TickClock {
    /// Create a new tick clock.
    ///
    /// # Arguments
    ///
    /// * `config` - Sample configuration
    /// * `initial_time` - Initial simulation time
    pub fn new(config: SampleConfig, initial_time: f64) -> Self {
        Self {
            config,
            next_tick_time: initial_time + config.period,
        }
    }

    /// Check if a tick should occur at the given time.
    ///
    /// Returns `true` if `current_time >= next_tick_time`.
    pub fn should_tick(&self, current_time: f64) -> bool {
        current_time >= self.next_tick_time
    }

    /// Advance to the next tick time.
    ///
    /// Should be called after a tick has been executed.
    pub fn advance(&mut self) {
        self.next_tick_time += self.config.period;
    }

    /// Reset the clock to a new time.
    pub fn reset(&mut self, current_time: f64) {
        self.next_tick_time = current_time + self.config.period;
    }

    /// Get the time until the next tick.
    pub fn time_until_tick(&self, current_time: f64) -> f64 {
        (self.next_tick_time - current_time).max(0.0)
    }
}
