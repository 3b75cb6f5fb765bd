//! Configuration-time sensor selection
//!
//! A channel's probe kind is fixed when the configuration is loaded. The
//! board hands over whatever hardware the channel's pin can offer and
//! [`ConfiguredSensor::select`] builds the matching driver; the station
//! never inspects the concrete type afterwards.

use stillwatch_core::config::ChannelConfig;
use stillwatch_core::sensor::{SensorKind, SensorReading};
use stillwatch_core::traits::Sensor;
use stillwatch_hal::{CaptureSample, CaptureTimer, OneWireBus, OneWireError};

use super::{AbsentSensor, Ds18b20Sensor, Smt172Sensor};

/// Sensor setup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorSetupError {
    /// The configured kind needs hardware this pin does not provide
    MissingHardware(SensorKind),
}

/// Placeholder for hardware a pin does not have
///
/// Cannot be constructed, so a `ConfiguredSensor<Unwired, W>` can never
/// hold a capture driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unwired {}

impl CaptureTimer for Unwired {
    fn latest(&mut self) -> Option<CaptureSample> {
        match *self {}
    }
}

impl OneWireBus for Unwired {
    fn reset(&mut self) -> Result<bool, OneWireError> {
        match *self {}
    }

    fn write_byte(&mut self, _byte: u8) -> Result<(), OneWireError> {
        match *self {}
    }

    fn read_byte(&mut self) -> Result<u8, OneWireError> {
        match *self {}
    }
}

/// Hardware available on a channel's pin
pub struct SensorPorts<C, W> {
    pub capture: Option<C>,
    pub one_wire: Option<W>,
}

impl<C, W> Default for SensorPorts<C, W> {
    fn default() -> Self {
        Self {
            capture: None,
            one_wire: None,
        }
    }
}

/// The probe selected for a channel
pub enum ConfiguredSensor<C, W> {
    Absent(AbsentSensor),
    Capture(Smt172Sensor<C>),
    OneWire(Ds18b20Sensor<W>),
}

impl<C: CaptureTimer, W: OneWireBus> ConfiguredSensor<C, W> {
    /// Build the driver for `config.sensor` from the available ports
    ///
    /// Ports the selected kind does not use are dropped untouched.
    pub fn select(
        config: &ChannelConfig,
        ports: SensorPorts<C, W>,
    ) -> Result<Self, SensorSetupError> {
        let sensor = match config.sensor {
            SensorKind::NoSensor => ConfiguredSensor::Absent(AbsentSensor),
            SensorKind::CaptureSensor => {
                let timer = ports
                    .capture
                    .ok_or(SensorSetupError::MissingHardware(SensorKind::CaptureSensor))?;
                ConfiguredSensor::Capture(Smt172Sensor::new(timer, config.staleness_ms))
            }
            SensorKind::OneWireSensor => {
                let bus = ports
                    .one_wire
                    .ok_or(SensorSetupError::MissingHardware(SensorKind::OneWireSensor))?;
                ConfiguredSensor::OneWire(Ds18b20Sensor::new(bus))
            }
        };

        #[cfg(feature = "defmt")]
        defmt::info!("sensor selected: {}", config.sensor);

        Ok(sensor)
    }
}

impl<C: CaptureTimer, W: OneWireBus> Sensor for ConfiguredSensor<C, W> {
    fn kind(&self) -> SensorKind {
        match self {
            ConfiguredSensor::Absent(s) => s.kind(),
            ConfiguredSensor::Capture(s) => s.kind(),
            ConfiguredSensor::OneWire(s) => s.kind(),
        }
    }

    fn sample(&mut self) -> SensorReading {
        match self {
            ConfiguredSensor::Absent(s) => s.sample(),
            ConfiguredSensor::Capture(s) => s.sample(),
            ConfiguredSensor::OneWire(s) => s.sample(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    // Timer counting every access
    struct CountingTimer<'a> {
        calls: &'a Cell<u32>,
    }

    impl CaptureTimer for CountingTimer<'_> {
        fn latest(&mut self) -> Option<CaptureSample> {
            self.calls.set(self.calls.get() + 1);
            Some(CaptureSample::new(600, 1000, 0))
        }
    }

    // Bus counting every access, with no device attached
    struct CountingBus<'a> {
        calls: &'a Cell<u32>,
    }

    impl OneWireBus for CountingBus<'_> {
        fn reset(&mut self) -> Result<bool, OneWireError> {
            self.calls.set(self.calls.get() + 1);
            Ok(false)
        }

        fn write_byte(&mut self, _byte: u8) -> Result<(), OneWireError> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }

        fn read_byte(&mut self) -> Result<u8, OneWireError> {
            self.calls.set(self.calls.get() + 1);
            Ok(0xFF)
        }
    }

    fn ports<'a>(
        capture_calls: &'a Cell<u32>,
        bus_calls: &'a Cell<u32>,
    ) -> SensorPorts<CountingTimer<'a>, CountingBus<'a>> {
        SensorPorts {
            capture: Some(CountingTimer {
                calls: capture_calls,
            }),
            one_wire: Some(CountingBus { calls: bus_calls }),
        }
    }

    #[test]
    fn test_no_sensor_never_touches_hardware() {
        let capture_calls = Cell::new(0);
        let bus_calls = Cell::new(0);
        let config = ChannelConfig::new(SensorKind::NoSensor, 100.0);

        let mut sensor =
            ConfiguredSensor::select(&config, ports(&capture_calls, &bus_calls)).unwrap();
        assert_eq!(sensor.kind(), SensorKind::NoSensor);

        for _ in 0..10 {
            let reading = sensor.sample();
            assert!(!reading.valid);
            assert_eq!(reading.kind, SensorKind::NoSensor);
        }

        assert_eq!(capture_calls.get(), 0);
        assert_eq!(bus_calls.get(), 0);
    }

    #[test]
    fn test_capture_selected() {
        let capture_calls = Cell::new(0);
        let bus_calls = Cell::new(0);
        let config = ChannelConfig::new(SensorKind::CaptureSensor, 100.0);

        let mut sensor =
            ConfiguredSensor::select(&config, ports(&capture_calls, &bus_calls)).unwrap();
        assert_eq!(sensor.kind(), SensorKind::CaptureSensor);

        let reading = sensor.sample();
        assert!(reading.valid);
        assert_eq!(capture_calls.get(), 1);
        assert_eq!(bus_calls.get(), 0);
    }

    #[test]
    fn test_one_wire_selected() {
        let capture_calls = Cell::new(0);
        let bus_calls = Cell::new(0);
        let config = ChannelConfig::new(SensorKind::OneWireSensor, 100.0);

        let mut sensor =
            ConfiguredSensor::select(&config, ports(&capture_calls, &bus_calls)).unwrap();
        assert_eq!(sensor.kind(), SensorKind::OneWireSensor);

        // No device answers: invalid, but the bus was tried
        assert!(!sensor.sample().valid);
        assert!(bus_calls.get() > 0);
        assert_eq!(capture_calls.get(), 0);
    }

    #[test]
    fn test_missing_hardware() {
        let config = ChannelConfig::new(SensorKind::CaptureSensor, 100.0);
        let ports: SensorPorts<Unwired, Unwired> = SensorPorts::default();

        assert!(matches!(
            ConfiguredSensor::select(&config, ports),
            Err(SensorSetupError::MissingHardware(SensorKind::CaptureSensor))
        ));
    }
}
