//! Sensor reading data model
//!
//! A [`SensorReading`] is produced once per acquisition cycle and consumed
//! by the alarm supervisor. Failures never travel as errors; they fold
//! into `valid: false`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical sensor kind selected at configuration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SensorKind {
    /// No probe fitted
    #[default]
    NoSensor,
    /// Duty-cycle sensor read through timer input capture (SMT172)
    #[cfg_attr(feature = "serde", serde(alias = "smt172"))]
    CaptureSensor,
    /// Digital one-wire sensor (DS18B20)
    #[cfg_attr(feature = "serde", serde(alias = "ds18b20"))]
    OneWireSensor,
}

/// Why a sensor produced an invalid reading
///
/// Drivers keep the most recent fault for diagnostics; it never reaches
/// the supervisor, which only sees `valid: false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorFault {
    /// Configured as `NoSensor`
    NotFitted,
    /// Device did not respond on its bus
    NoResponse,
    /// No capture event within the staleness window
    StaleCapture,
    /// Data arrived but failed its integrity check
    Corrupt,
    /// Device reported its disconnect sentinel
    Disconnected,
    /// Conversion requested, result not available yet
    Pending,
}

/// One temperature sample
///
/// Immutable value object; `value` is degrees Celsius and only meaningful
/// when `valid` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    pub value: f32,
    pub valid: bool,
    pub kind: SensorKind,
}

impl SensorReading {
    /// A valid sample of `value` degrees
    pub const fn valid(kind: SensorKind, value: f32) -> Self {
        Self {
            value,
            valid: true,
            kind,
        }
    }

    /// A "no data this cycle" sample
    pub const fn invalid(kind: SensorKind) -> Self {
        Self {
            value: 0.0,
            valid: false,
            kind,
        }
    }

    /// The temperature, if the sample is valid
    pub fn celsius(&self) -> Option<f32> {
        self.valid.then_some(self.value)
    }

    /// Whether this sample reaches `threshold`
    ///
    /// Invalid samples never do.
    pub fn reaches(&self, threshold: f32) -> bool {
        self.valid && self.value >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reading_has_no_value() {
        let reading = SensorReading::invalid(SensorKind::OneWireSensor);
        assert!(!reading.valid);
        assert_eq!(reading.celsius(), None);
        assert_eq!(reading.kind, SensorKind::OneWireSensor);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let reading = SensorReading::valid(SensorKind::CaptureSensor, 100.0);
        assert!(reading.reaches(100.0));
        assert!(!reading.reaches(100.5));
    }

    #[test]
    fn test_invalid_never_reaches_threshold() {
        let mut reading = SensorReading::invalid(SensorKind::CaptureSensor);
        reading.value = 500.0;
        assert!(!reading.reaches(100.0));
    }
}
