//! Control pipeline for a two-channel (white/yellow) lamp.
//!
//! Each tick, an ambient measurement (illuminance in lux, color temperature
//! in kelvin) is turned into a pair of actuator drive currents:
//!
//! 1. [`RangeClamp`] saturates the illuminance into the supported operating
//!    envelope and passes the color temperature through unchanged.
//! 2. [`ColorBalance`] splits the target between the white and yellow
//!    channels with a three-segment ratio law over color temperature, then
//!    scales the split by illuminance into current values.
//!
//! [`LampPipeline`] composes the two stages behind a single `tick` entry
//! point.
//!
//! # Design Principles
//!
//! - **Pure stages**: every transformation is a pure function of its
//!   arguments; no cross-tick state lives in this crate
//! - **Explicit data flow**: measurements go in as arguments and drive
//!   values come out as return values, so each tick is independently
//!   testable
//! - **Validated configuration**: operating limits are checked once at
//!   construction, never re-checked per tick

pub mod balance;
pub mod clamp;
pub mod config;
pub mod error;
pub mod measurement;
pub mod pipeline;
pub mod sensor;

pub use balance::ColorBalance;
pub use clamp::RangeClamp;
pub use config::LampConfig;
pub use error::{ControlError, ControlResult};
pub use measurement::{DriveOutput, Measurement, Target};
pub use pipeline::LampPipeline;
pub use sensor::AmbientSensor;
