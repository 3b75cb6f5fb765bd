//! Placeholder for a channel without a probe

use stillwatch_core::sensor::{SensorKind, SensorReading};
use stillwatch_core::traits::Sensor;

/// Sensor slot with nothing fitted
///
/// Every sample is invalid and no hardware is touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsentSensor;

impl Sensor for AbsentSensor {
    fn kind(&self) -> SensorKind {
        SensorKind::NoSensor
    }

    fn sample(&mut self) -> SensorReading {
        SensorReading::invalid(SensorKind::NoSensor)
    }
}
