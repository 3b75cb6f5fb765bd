//! Two-channel monitoring station
//!
//! Runs one supervision cycle per external tick over the boiler and vapor
//! channels. The station is not reentrant: the caller serializes `tick`
//! and `command` on a single thread of control.
//!
//! The beeper is shared: it sounds while any channel is triggered and is
//! driven only when that level changes. The status LED follows the storage
//! status reported by the logger.

pub mod channel;

pub use channel::{ChannelId, ChannelReport, MonitoredChannel};

use crate::alarm::{AlarmCommand, AlarmStatus, CommandError, Transition};
use crate::config::{ConfigError, StationConfig};
use crate::storage::StorageStatus;
use crate::traits::{BinaryOutput, Sensor};

/// Everything that happened during one tick, for the logger and display
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StationReport {
    pub boiler: ChannelReport,
    pub vapor: ChannelReport,
    /// Storage status forwarded untouched
    pub storage: StorageStatus,
    /// Beeper level after this tick
    pub beeper_on: bool,
}

impl StationReport {
    /// Report of one channel
    pub fn channel(&self, channel: ChannelId) -> &ChannelReport {
        match channel {
            ChannelId::Boiler => &self.boiler,
            ChannelId::Vapor => &self.vapor,
        }
    }

    /// Check if any channel changed status this tick
    pub fn has_transition(&self) -> bool {
        self.boiler.transition.is_some() || self.vapor.transition.is_some()
    }
}

/// Boiler and vapor supervision with shared beeper and status LED
pub struct Station<B, V, Z, L> {
    boiler: MonitoredChannel<B>,
    vapor: MonitoredChannel<V>,
    beeper: Z,
    led: L,
}

impl<B, V, Z, L> Station<B, V, Z, L>
where
    B: Sensor,
    V: Sensor,
    Z: BinaryOutput,
    L: BinaryOutput,
{
    /// Build a station from a validated configuration
    ///
    /// The sensors must be of the kinds the configuration names. Channels
    /// with `auto_arm` start armed; beeper and LED start off.
    pub fn new(
        config: &StationConfig,
        boiler: B,
        vapor: V,
        mut beeper: Z,
        mut led: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if boiler.kind() != config.boiler.sensor {
            return Err(ConfigError::SensorMismatch(ChannelId::Boiler));
        }
        if vapor.kind() != config.vapor.sensor {
            return Err(ConfigError::SensorMismatch(ChannelId::Vapor));
        }

        beeper.set_on(false);
        led.set_on(false);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "station ready: boiler {} @ {}, vapor {} @ {}",
            config.boiler.sensor,
            config.boiler.threshold_c,
            config.vapor.sensor,
            config.vapor.threshold_c
        );

        Ok(Self {
            boiler: MonitoredChannel::new(ChannelId::Boiler, boiler, &config.boiler),
            vapor: MonitoredChannel::new(ChannelId::Vapor, vapor, &config.vapor),
            beeper,
            led,
        })
    }

    /// Run one supervision cycle
    ///
    /// `storage` is the logger's status for this cycle; it is reported back
    /// and shown on the LED but does not influence the alarms.
    pub fn tick(&mut self, storage: StorageStatus) -> StationReport {
        let boiler = self.boiler.cycle();
        let vapor = self.vapor.cycle();

        self.update_beeper();

        if self.led.is_on() != storage.is_logging() {
            self.led.set_on(storage.is_logging());
        }

        StationReport {
            boiler,
            vapor,
            storage,
            beeper_on: self.beeper.is_on(),
        }
    }

    /// Deliver an external command to one channel
    pub fn command(
        &mut self,
        channel: ChannelId,
        command: AlarmCommand,
    ) -> Result<Option<Transition>, CommandError> {
        let transition = match channel {
            ChannelId::Boiler => self.boiler.command(command)?,
            ChannelId::Vapor => self.vapor.command(command)?,
        };

        self.update_beeper();
        Ok(transition)
    }

    /// Change a channel's threshold; the channel returns to `Disabled`
    pub fn reconfigure(
        &mut self,
        channel: ChannelId,
        threshold_c: f32,
    ) -> Result<Option<Transition>, ConfigError> {
        if !threshold_c.is_finite() {
            return Err(ConfigError::InvalidThreshold(channel));
        }

        let transition = match channel {
            ChannelId::Boiler => self.boiler.supervisor_mut().reconfigure(threshold_c),
            ChannelId::Vapor => self.vapor.supervisor_mut().reconfigure(threshold_c),
        };

        self.update_beeper();
        Ok(transition)
    }

    /// Current alarm status of a channel
    pub fn status(&self, channel: ChannelId) -> AlarmStatus {
        match channel {
            ChannelId::Boiler => self.boiler.status(),
            ChannelId::Vapor => self.vapor.status(),
        }
    }

    pub fn boiler(&self) -> &MonitoredChannel<B> {
        &self.boiler
    }

    pub fn vapor(&self) -> &MonitoredChannel<V> {
        &self.vapor
    }

    pub fn beeper(&self) -> &Z {
        &self.beeper
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    fn update_beeper(&mut self) {
        let sounding = self.boiler.status().beeper_on() || self.vapor.status().beeper_on();
        if sounding != self.beeper.is_on() {
            #[cfg(feature = "defmt")]
            defmt::info!("beeper {}", if sounding { "on" } else { "off" });
            self.beeper.set_on(sounding);
        }
    }
}
