//! Simulation runner and result recording.

use crate::clock::{SampleConfig, TickClock};
use crate::error::{SimError, SimResult};
use lux_controls::{AmbientSensor, DriveOutput, LampPipeline, Measurement};
use tracing::{debug, info, trace};

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Time-base step (seconds)
    pub dt: f64,
    /// Control tick period (seconds); ticks land on multiples of this
    pub tick_period: f64,
    /// Final simulation time (seconds)
    pub t_end: f64,
    /// Maximum number of time-base steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th tick (decimation)
    pub record_every: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        // 10 s at 10 Hz.
        Self {
            dt: 0.1,
            tick_period: 0.1,
            t_end: 10.0,
            max_steps: 100_000,
            record_every: 1,
        }
    }
}

/// Record of simulation results, one row per recorded tick.
#[derive(Clone, Debug, Default)]
pub struct SimRecord {
    /// Tick times (seconds)
    pub t: Vec<f64>,
    /// Raw measurements consumed at each recorded tick
    pub measurements: Vec<Measurement>,
    /// Drive outputs produced at each recorded tick
    pub outputs: Vec<DriveOutput>,
}

impl SimRecord {
    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Run the control pipeline against a sensor for a fixed span of time.
///
/// Time advances in `dt` steps; whenever the tick clock fires, one
/// measurement is consumed and one drive output produced. Between ticks the
/// previous output is considered held by the actuator. Non-finite sensor
/// readings abort the run with an error rather than driving the lamp with
/// NaN.
pub fn run_sim<S: AmbientSensor>(
    sensor: &mut S,
    pipeline: &LampPipeline,
    opts: &SimOptions,
) -> SimResult<SimRecord> {
    if opts.dt <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "dt must be positive",
        });
    }
    if opts.tick_period < opts.dt {
        return Err(SimError::InvalidArg {
            what: "tick_period must be at least dt",
        });
    }
    if opts.t_end < 0.0 {
        return Err(SimError::InvalidArg {
            what: "t_end must be non-negative",
        });
    }
    if opts.max_steps == 0 {
        return Err(SimError::InvalidArg {
            what: "max_steps must be positive",
        });
    }
    if opts.record_every == 0 {
        return Err(SimError::InvalidArg {
            what: "record_every must be positive",
        });
    }

    info!(
        t_end = opts.t_end,
        tick_period = opts.tick_period,
        "starting lamp simulation"
    );

    let mut clock = TickClock::new(SampleConfig::new(opts.tick_period), 0.0);
    let mut record = SimRecord::default();

    let n_steps = ((opts.t_end / opts.dt) + 1e-9).floor() as usize;
    let n_steps = n_steps.min(opts.max_steps);

    let mut ticks = 0usize;
    let mut last_tick: Option<(f64, Measurement, DriveOutput)> = None;
    let mut last_recorded = true;

    for step in 1..=n_steps {
        let t = step as f64 * opts.dt;

        // Fire on the step closest to the scheduled tick time; the
        // half-step slack absorbs float accumulation in the clock.
        if !clock.should_tick(t + 0.5 * opts.dt) {
            continue;
        }
        clock.advance();

        let measurement = sensor.next_measurement();
        let output = pipeline.tick_checked(&measurement)?;
        ticks += 1;

        trace!(
            t,
            lux = measurement.illuminance,
            temp_k = measurement.color_temperature,
            white = output.white_current,
            yellow = output.yellow_current,
            "tick"
        );

        if ticks % opts.record_every == 0 {
            record.t.push(t);
            record.measurements.push(measurement);
            record.outputs.push(output);
            last_recorded = true;
        } else {
            last_tick = Some((t, measurement, output));
            last_recorded = false;
        }
    }

    // Always keep the final tick even when decimation skipped it.
    if !last_recorded {
        if let Some((t, measurement, output)) = last_tick {
            record.t.push(t);
            record.measurements.push(measurement);
            record.outputs.push(output);
        }
    }

    debug!(ticks, recorded = record.len(), "simulation finished");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::{ConstantSensor, ScriptedSensor};
    use lux_controls::LampConfig;

    fn pipeline() -> LampPipeline {
        LampPipeline::new(LampConfig::default()).unwrap()
    }

    #[test]
    fn sim_options_defaults() {
        let opts = SimOptions::default();
        assert_eq!(opts.dt, 0.1);
        assert_eq!(opts.t_end, 10.0);
        assert_eq!(opts.record_every, 1);
    }

    #[test]
    fn invalid_options_rejected() {
        let mut sensor = ConstantSensor::new(Measurement::new(600.0, 4500));
        let p = pipeline();

        let opts = SimOptions {
            dt: 0.0,
            ..SimOptions::default()
        };
        assert!(run_sim(&mut sensor, &p, &opts).is_err());

        let opts = SimOptions {
            record_every: 0,
            ..SimOptions::default()
        };
        assert!(run_sim(&mut sensor, &p, &opts).is_err());

        let opts = SimOptions {
            tick_period: 0.01,
            ..SimOptions::default()
        };
        assert!(run_sim(&mut sensor, &p, &opts).is_err());
    }

    #[test]
    fn constant_sensor_gives_constant_output() {
        let mut sensor = ConstantSensor::new(Measurement::new(600.0, 4500));
        let record = run_sim(&mut sensor, &pipeline(), &SimOptions::default()).unwrap();

        assert!(!record.is_empty());
        for out in &record.outputs {
            assert!((out.white_current - 0.3).abs() < 1e-9);
            assert!((out.yellow_current - 0.3).abs() < 1e-9);
        }
    }

    #[test]
    fn tick_count_matches_schedule() {
        let mut sensor = ConstantSensor::new(Measurement::new(600.0, 4500));
        let opts = SimOptions {
            dt: 0.1,
            tick_period: 0.1,
            t_end: 1.0,
            ..SimOptions::default()
        };
        let record = run_sim(&mut sensor, &pipeline(), &opts).unwrap();
        // 1 s at 10 Hz: ten ticks.
        assert_eq!(record.len(), 10);
    }

    #[test]
    fn slower_tick_period_skips_steps() {
        let mut sensor = ConstantSensor::new(Measurement::new(600.0, 4500));
        let opts = SimOptions {
            dt: 0.1,
            tick_period: 0.2,
            t_end: 1.0,
            ..SimOptions::default()
        };
        let record = run_sim(&mut sensor, &pipeline(), &opts).unwrap();
        assert_eq!(record.len(), 5);
    }

    #[test]
    fn scripted_sensor_sequence_recorded_in_order() {
        let mut sensor = ScriptedSensor::new(vec![
            Measurement::new(50.0, 2700),
            Measurement::new(2000.0, 6500),
        ]);
        let opts = SimOptions {
            t_end: 0.2,
            ..SimOptions::default()
        };
        let record = run_sim(&mut sensor, &pipeline(), &opts).unwrap();

        assert_eq!(record.len(), 2);
        // Clamped low, fully yellow.
        assert_eq!(record.outputs[0].white_current, 0.0);
        assert!((record.outputs[0].yellow_current - 0.2).abs() < 1e-9);
        // Clamped high, fully white.
        assert!((record.outputs[1].white_current - 1.3).abs() < 1e-9);
        assert_eq!(record.outputs[1].yellow_current, 0.0);
    }

    #[test]
    fn decimation_keeps_final_tick() {
        let mut sensor = ConstantSensor::new(Measurement::new(600.0, 4500));
        let opts = SimOptions {
            dt: 0.1,
            tick_period: 0.1,
            t_end: 1.0,
            record_every: 3,
            ..SimOptions::default()
        };
        let record = run_sim(&mut sensor, &pipeline(), &opts).unwrap();
        // Ticks 3, 6, 9 recorded by decimation, tick 10 kept as final.
        assert_eq!(record.len(), 4);
        assert!((record.t.last().unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_sensor_aborts_run() {
        let mut sensor = ConstantSensor::new(Measurement::new(f64::NAN, 4500));
        let err = run_sim(&mut sensor, &pipeline(), &SimOptions::default()).unwrap_err();
        assert!(matches!(err, SimError::Control { .. }));
    }
}
