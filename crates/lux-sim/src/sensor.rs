//! Simulated ambient sensors.
//!
//! Stand-ins for a real measurement source. [`RandomAmbientSensor`] draws
//! uniform samples over the supported ambient ranges; the constant and
//! scripted variants exist so tests can drive the pipeline
//! deterministically.

use lux_controls::{AmbientSensor, Measurement};
use lux_core::Real;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default simulated lux range, spanning the lamp's operating envelope.
pub const DEFAULT_LUX_RANGE: (Real, Real) = (200.0, 1300.0);
/// Default simulated color temperature range (kelvin).
pub const DEFAULT_TEMP_RANGE_K: (i32, i32) = (2700, 6500);

/// Uniform random ambient sensor with a seeded RNG.
///
/// Each tick draws illuminance and color temperature independently from
/// closed uniform ranges. Seeding makes runs reproducible.
#[derive(Debug, Clone)]
pub struct RandomAmbientSensor {
    lux_range: (Real, Real),
    temp_range_k: (i32, i32),
    rng: StdRng,
}

impl RandomAmbientSensor {
    /// Create a sensor with the default ranges and the given seed.
    pub fn new(seed: u64) -> Self {
        Self::with_ranges(seed, DEFAULT_LUX_RANGE, DEFAULT_TEMP_RANGE_K)
    }

    /// Create a sensor with custom sampling ranges.
    ///
    /// # Panics
    ///
    /// Panics if either range is empty.
    pub fn with_ranges(seed: u64, lux_range: (Real, Real), temp_range_k: (i32, i32)) -> Self {
        assert!(lux_range.0 <= lux_range.1, "lux range must be non-empty");
        assert!(
            temp_range_k.0 <= temp_range_k.1,
            "temperature range must be non-empty"
        );
        Self {
            lux_range,
            temp_range_k,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl AmbientSensor for RandomAmbientSensor {
    fn next_measurement(&mut self) -> Measurement {
        Measurement {
            illuminance: self.rng.gen_range(self.lux_range.0..=self.lux_range.1),
            color_temperature: self
                .rng
                .gen_range(self.temp_range_k.0..=self.temp_range_k.1),
        }
    }
}

/// Sensor that reports the same measurement on every tick.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSensor {
    measurement: Measurement,
}

impl ConstantSensor {
    /// Create a sensor pinned to one measurement.
    pub fn new(measurement: Measurement) -> Self {
        Self { measurement }
    }
}

impl AmbientSensor for ConstantSensor {
    fn next_measurement(&mut self) -> Measurement {
        self.measurement
    }
}

/// Sensor that replays a fixed sequence of measurements.
///
/// When the sequence is exhausted the last measurement repeats, so a short
/// script can still drive an arbitrarily long run.
#[derive(Debug, Clone)]
pub struct ScriptedSensor {
    script: Vec<Measurement>,
    cursor: usize,
}

impl ScriptedSensor {
    /// Create a sensor replaying the given sequence.
    ///
    /// # Panics
    ///
    /// Panics if the script is empty.
    pub fn new(script: Vec<Measurement>) -> Self {
        assert!(!script.is_empty(), "script must contain at least one measurement");
        Self { script, cursor: 0 }
    }
}

impl AmbientSensor for ScriptedSensor {
    fn next_measurement(&mut self) -> Measurement {
        let m = self.script[self.cursor];
        if self.cursor + 1 < self.script.len() {
            self.cursor += 1;
        }
        m
    }
}
