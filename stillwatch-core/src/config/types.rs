//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sensor::SensorKind;
use crate::station::ChannelId;

/// Default alarm threshold (°C)
pub const DEFAULT_THRESHOLD_C: f32 = 100.0;

/// Default age after which a captured period is stale (ms)
pub const DEFAULT_STALENESS_MS: u32 = 500;

/// Default beeper tone (Hz)
pub const DEFAULT_BEEPER_HZ: u32 = 2000;

/// Default supervision tick (ms)
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1000;

/// Worst-case DS18B20 conversion time at 12-bit resolution (ms)
pub const ONE_WIRE_CONVERSION_MS: u32 = 750;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Threshold is NaN or infinite
    InvalidThreshold(ChannelId),
    /// Sensor kind cannot be wired to this channel
    UnsupportedSensor(ChannelId, SensorKind),
    /// Capture channel with a zero staleness window
    InvalidStaleness(ChannelId),
    /// Driver handed to the station does not match the configured kind
    SensorMismatch(ChannelId),
    /// Tick is zero, or too short for a one-wire conversion
    TickTooShort,
    /// Two functions share one pin
    DuplicatePin(u8),
    /// Text configuration could not be parsed
    Parse,
}

/// Microcontroller pin assignments
///
/// Defaults match the original board: passive beeper on D2, LED on D13,
/// boiler DS18B20 on D7, vapor probe on D8 (ICP1), SD chip-select on D9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PinAssignments {
    pub beeper: u8,
    pub led: u8,
    /// One-wire only
    pub boiler: u8,
    /// Timer input-capture capable
    pub vapor: u8,
    pub sd_cs: u8,
}

impl Default for PinAssignments {
    fn default() -> Self {
        Self {
            beeper: 2,
            led: 13,
            boiler: 7,
            vapor: 8,
            sd_cs: 9,
        }
    }
}

impl PinAssignments {
    /// Return the first pin used by more than one function
    pub fn find_duplicate(&self) -> Option<u8> {
        let pins = [self.beeper, self.led, self.boiler, self.vapor, self.sd_cs];
        pins.iter()
            .enumerate()
            .find(|&(i, pin)| pins[i + 1..].contains(pin))
            .map(|(_, &pin)| pin)
    }
}

/// Alarm and sensor configuration of one channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChannelConfig {
    /// Fitted probe
    pub sensor: SensorKind,
    /// Trigger level (°C, inclusive)
    pub threshold_c: f32,
    /// Arm the alarm as soon as the configuration is loaded
    pub auto_arm: bool,
    /// Capture staleness window (ms); ignored for other kinds
    pub staleness_ms: u32,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            sensor: SensorKind::NoSensor,
            threshold_c: DEFAULT_THRESHOLD_C,
            auto_arm: false,
            staleness_ms: DEFAULT_STALENESS_MS,
        }
    }
}

impl ChannelConfig {
    /// Channel with the given probe and threshold
    pub const fn new(sensor: SensorKind, threshold_c: f32) -> Self {
        Self {
            sensor,
            threshold_c,
            auto_arm: false,
            staleness_ms: DEFAULT_STALENESS_MS,
        }
    }

    /// Builder-style auto-arm
    pub const fn with_auto_arm(mut self) -> Self {
        self.auto_arm = true;
        self
    }

    fn validate(&self, channel: ChannelId) -> Result<(), ConfigError> {
        if !self.threshold_c.is_finite() {
            return Err(ConfigError::InvalidThreshold(channel));
        }

        if !channel.supports(self.sensor) {
            return Err(ConfigError::UnsupportedSensor(channel, self.sensor));
        }

        if self.sensor == SensorKind::CaptureSensor && self.staleness_ms == 0 {
            return Err(ConfigError::InvalidStaleness(channel));
        }

        Ok(())
    }
}

/// Beeper configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BeeperConfig {
    pub frequency_hz: u32,
}

impl Default for BeeperConfig {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_BEEPER_HZ,
        }
    }
}

/// Complete station configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StationConfig {
    pub pins: PinAssignments,
    pub boiler: ChannelConfig,
    pub vapor: ChannelConfig,
    pub beeper: BeeperConfig,
    /// Period of the external supervision tick (ms)
    pub tick_interval_ms: u32,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            pins: PinAssignments::default(),
            boiler: ChannelConfig::default(),
            vapor: ChannelConfig::default(),
            beeper: BeeperConfig::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl StationConfig {
    /// Configuration of one channel
    pub fn channel(&self, channel: ChannelId) -> &ChannelConfig {
        match channel {
            ChannelId::Boiler => &self.boiler,
            ChannelId::Vapor => &self.vapor,
        }
    }

    /// Check the configuration for inconsistencies
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pin) = self.pins.find_duplicate() {
            return Err(ConfigError::DuplicatePin(pin));
        }

        for channel in ChannelId::ALL {
            self.channel(channel).validate(channel)?;
        }

        let one_wire = ChannelId::ALL
            .iter()
            .any(|&c| self.channel(c).sensor == SensorKind::OneWireSensor);

        // Each tick collects the conversion started on the previous one
        if self.tick_interval_ms == 0
            || (one_wire && self.tick_interval_ms < ONE_WIRE_CONVERSION_MS)
        {
            return Err(ConfigError::TickTooShort);
        }

        Ok(())
    }
}
