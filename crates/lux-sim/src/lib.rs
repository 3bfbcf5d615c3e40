//! Simulation harness for the lamp control pipeline.
//!
//! Provides:
//! - Periodic tick scheduling with configurable sample period
//! - A seeded random ambient sensor (uniform lux in [200, 1300],
//!   color temperature in [2700, 6500] K)
//! - Deterministic constant/scripted sensors for tests
//! - A fixed-step simulation runner with decimated recording

pub mod clock;
pub mod error;
pub mod sensor;
pub mod sim;

// Re-exports for public API
pub use clock::{SampleConfig, TickClock};
pub use error::{SimError, SimResult};
pub use sensor::{ConstantSensor, RandomAmbientSensor, ScriptedSensor};
pub use sim::{SimOptions, SimRecord, run_sim};
