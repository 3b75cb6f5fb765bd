//! Temperature sensor trait

use crate::sensor::{SensorKind, SensorReading};

/// A temperature probe of any physical kind
///
/// Implementations hide whether the value comes from a timer capture, a
/// one-wire conversion or nowhere at all. `sample` must return within a
/// short, bounded time and must never fail: hardware trouble is reported
/// as an invalid reading.
pub trait Sensor {
    /// Kind this sensor was configured as
    fn kind(&self) -> SensorKind;

    /// Acquire one reading
    ///
    /// Takes `&mut self` because acquisition usually touches the bus or
    /// timer owned by the driver.
    fn sample(&mut self) -> SensorReading;
}

impl<S: Sensor + ?Sized> Sensor for &mut S {
    fn kind(&self) -> SensorKind {
        (**self).kind()
    }

    fn sample(&mut self) -> SensorReading {
        (**self).sample()
    }
}
