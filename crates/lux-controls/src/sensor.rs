//! Ambient sensor abstraction.
//!
//! The pipeline itself never talks to hardware; it consumes a
//! [`Measurement`](crate::Measurement) produced by whatever implements
//! [`AmbientSensor`]. The simulation harness provides a random sensor, tests
//! inject deterministic ones, and a real deployment wires in a driver.

use crate::measurement::Measurement;

/// Trait for types that can provide ambient measurements.
///
/// One call per tick. Implementations may be stateful (a scripted sequence,
/// a hardware driver with a read cursor); the pipeline only requires that
/// each call yields the measurement for the current tick.
pub trait AmbientSensor {
    /// Produce the measurement for the current tick.
    fn next_measurement(&mut self) -> Measurement;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSensor(Measurement);

    impl AmbientSensor for FixedSensor {
        fn next_measurement(&mut self) -> Measurement {
            self.0
        }
    }

    #[test]
    fn sensor_trait_object_safe() {
        let mut sensor: Box<dyn AmbientSensor> = Box::new(FixedSensor(Measurement::new(600.0, 4500)));
        let m = sensor.next_measurement();
        assert_eq!(m.illuminance, 600.0);
    }
}
