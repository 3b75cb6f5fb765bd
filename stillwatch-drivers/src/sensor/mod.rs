//! Temperature sensor drivers
//!
//! Each driver implements [`stillwatch_core::traits::Sensor`]. Drivers
//! remember why their latest sample was invalid, but only ever hand the
//! supervisor a reading with `valid: false`.

pub mod absent;
pub mod configured;
pub mod ds18b20;
pub mod smt172;

pub use absent::AbsentSensor;
pub use configured::{ConfiguredSensor, SensorPorts, SensorSetupError, Unwired};
pub use ds18b20::Ds18b20Sensor;
pub use smt172::Smt172Sensor;
