//! DS18B20 one-wire digital thermometer
//!
//! Assumes a single device on the bus (SKIP ROM addressing). A 12-bit
//! conversion takes up to 750 ms, so acquisition is pipelined across
//! ticks: each sample collects the conversion started by the previous one
//! and then starts the next. The first sample after power-up is invalid.

use stillwatch_core::sensor::{SensorFault, SensorKind, SensorReading};
use stillwatch_core::traits::Sensor;
use stillwatch_hal::{OneWireBus, OneWireError};

use crate::onewire::crc8;

/// Address every device on the bus
const CMD_SKIP_ROM: u8 = 0xCC;
/// Start a temperature conversion
const CMD_CONVERT_T: u8 = 0x44;
/// Read the 9-byte scratchpad
const CMD_READ_SCRATCHPAD: u8 = 0xBE;

/// Scratchpad length including the CRC byte
pub const SCRATCHPAD_LEN: usize = 9;

/// Value reported by the host library for a disconnected probe (°C)
pub const DISCONNECTED_C: f32 = -127.0;

/// Raw scratchpad resolution: 1/16 °C per LSB
const LSB_PER_DEGREE: f32 = 16.0;

/// Any bus-level failure means the probe did not answer
fn bus_fault(_: OneWireError) -> SensorFault {
    SensorFault::NoResponse
}

/// Decode a scratchpad into degrees Celsius
///
/// Rejects a floating bus (all ones), a shorted bus (all zeros), a CRC
/// mismatch and the disconnect sentinel. The 85 °C power-on value is a
/// legal temperature and passes.
pub fn decode_scratchpad(scratchpad: &[u8; SCRATCHPAD_LEN]) -> Result<f32, SensorFault> {
    if scratchpad.iter().all(|&b| b == 0xFF) {
        return Err(SensorFault::NoResponse);
    }

    // CRC of all zeros is zero; a real scratchpad always has byte 5 = 0xFF
    if scratchpad.iter().all(|&b| b == 0x00) {
        return Err(SensorFault::NoResponse);
    }

    if crc8(&scratchpad[..SCRATCHPAD_LEN - 1]) != scratchpad[SCRATCHPAD_LEN - 1] {
        return Err(SensorFault::Corrupt);
    }

    let raw = i16::from_le_bytes([scratchpad[0], scratchpad[1]]);
    let celsius = raw as f32 / LSB_PER_DEGREE;

    if celsius == DISCONNECTED_C {
        return Err(SensorFault::Disconnected);
    }

    Ok(celsius)
}

/// DS18B20 on a one-wire bus
pub struct Ds18b20Sensor<W> {
    bus: W,
    /// Outcome of starting the conversion on the previous sample
    conversion: Result<(), SensorFault>,
    last_fault: Option<SensorFault>,
}

impl<W: OneWireBus> Ds18b20Sensor<W> {
    /// Create a new DS18B20 sensor; no bus traffic until the first sample
    pub fn new(bus: W) -> Self {
        Self {
            bus,
            conversion: Err(SensorFault::Pending),
            last_fault: None,
        }
    }

    /// Why the latest sample was invalid, if it was
    pub fn last_fault(&self) -> Option<SensorFault> {
        self.last_fault
    }

    /// Get access to the underlying bus
    pub fn bus(&self) -> &W {
        &self.bus
    }

    /// Reset the bus and address the (only) device
    fn select(&mut self) -> Result<(), SensorFault> {
        if !self.bus.reset().map_err(bus_fault)? {
            return Err(SensorFault::NoResponse);
        }
        self.bus.write_byte(CMD_SKIP_ROM).map_err(bus_fault)
    }

    fn start_conversion(&mut self) -> Result<(), SensorFault> {
        self.select()?;
        self.bus.write_byte(CMD_CONVERT_T).map_err(bus_fault)
    }

    fn read_temperature(&mut self) -> Result<f32, SensorFault> {
        self.select()?;
        self.bus.write_byte(CMD_READ_SCRATCHPAD).map_err(bus_fault)?;

        let mut scratchpad = [0u8; SCRATCHPAD_LEN];
        self.bus.read_bytes(&mut scratchpad).map_err(bus_fault)?;
        decode_scratchpad(&scratchpad)
    }
}

impl<W: OneWireBus> Sensor for Ds18b20Sensor<W> {
    fn kind(&self) -> SensorKind {
        SensorKind::OneWireSensor
    }

    fn sample(&mut self) -> SensorReading {
        let result = match self.conversion {
            Ok(()) => self.read_temperature(),
            Err(fault) => Err(fault),
        };

        // Start the conversion the next tick will collect
        self.conversion = self.start_conversion();

        match result {
            Ok(celsius) => {
                self.last_fault = None;
                SensorReading::valid(SensorKind::OneWireSensor, celsius)
            }
            Err(fault) => {
                self.last_fault = Some(fault);
                SensorReading::invalid(SensorKind::OneWireSensor)
            }
        }
    }
}
