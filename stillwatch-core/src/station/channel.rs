//! One monitored channel: a probe and its supervisor

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::alarm::{AlarmCommand, AlarmStatus, AlarmSupervisor, CommandError, Transition};
use crate::config::ChannelConfig;
use crate::sensor::{SensorKind, SensorReading};
use crate::traits::Sensor;

/// Monitored channels of the still
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChannelId {
    /// Pot/boiler probe
    Boiler,
    /// Column head (vapor) probe
    Vapor,
}

impl ChannelId {
    pub const ALL: [ChannelId; 2] = [ChannelId::Boiler, ChannelId::Vapor];

    /// Check if a sensor kind can be wired to this channel
    ///
    /// The boiler pin has no timer capture unit, so it takes one-wire
    /// probes only.
    pub fn supports(&self, kind: SensorKind) -> bool {
        match self {
            ChannelId::Boiler => kind != SensorKind::CaptureSensor,
            ChannelId::Vapor => true,
        }
    }
}

/// Result of one supervision cycle on a channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelReport {
    pub channel: ChannelId,
    pub reading: SensorReading,
    /// Status after this cycle
    pub status: AlarmStatus,
    pub transition: Option<Transition>,
}

/// A sensor paired with the supervisor that owns its alarm state
pub struct MonitoredChannel<S> {
    id: ChannelId,
    sensor: S,
    supervisor: AlarmSupervisor,
}

impl<S: Sensor> MonitoredChannel<S> {
    /// Create a channel from its configuration
    pub fn new(id: ChannelId, sensor: S, config: &ChannelConfig) -> Self {
        let supervisor = if config.auto_arm {
            AlarmSupervisor::armed(config.threshold_c)
        } else {
            AlarmSupervisor::new(config.threshold_c)
        };

        Self {
            id,
            sensor,
            supervisor,
        }
    }

    /// Sample the probe and feed the reading to the supervisor
    pub fn cycle(&mut self) -> ChannelReport {
        let reading = self.sensor.sample();
        let transition = self.supervisor.process(reading);

        ChannelReport {
            channel: self.id,
            reading,
            status: self.supervisor.status(),
            transition,
        }
    }

    /// Forward a command to the supervisor
    pub fn command(&mut self, command: AlarmCommand) -> Result<Option<Transition>, CommandError> {
        self.supervisor.command(command)
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn status(&self) -> AlarmStatus {
        self.supervisor.status()
    }

    pub fn supervisor(&self) -> &AlarmSupervisor {
        &self.supervisor
    }

    pub fn supervisor_mut(&mut self) -> &mut AlarmSupervisor {
        &mut self.supervisor
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }
}
