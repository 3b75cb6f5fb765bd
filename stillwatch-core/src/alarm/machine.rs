//! Alarm state machine definition
//!
//! Beeper behavior is a function of the transition taken, never of the
//! level alone, so an output is driven at most once per edge.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sensor::SensorReading;

/// Alarm status of one monitored channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlarmStatus {
    /// Supervision inactive
    #[default]
    Disabled,
    /// Watching readings against the threshold
    Armed,
    /// Threshold reached; latched until acknowledged
    Triggered,
    /// Operator silenced the alarm; readings ignored until re-armed
    Acknowledged,
}

/// External control signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlarmCommand {
    Arm,
    Acknowledge,
    Disable,
}

/// Command rejected by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// The current status defines no transition for this command
    InvalidCommand {
        status: AlarmStatus,
        command: AlarmCommand,
    },
}

/// What caused a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionCause {
    Command(AlarmCommand),
    /// A valid reading at or above the threshold
    Reading,
    /// Threshold or sensor re-configuration
    Reconfigured,
}

/// A single status change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: AlarmStatus,
    pub to: AlarmStatus,
    pub cause: TransitionCause,
}

impl Transition {
    /// Beeper edge produced by this transition
    ///
    /// `Some(true)` when entering `Triggered`, `Some(false)` when leaving
    /// it, `None` otherwise.
    pub fn beeper_edge(&self) -> Option<bool> {
        match (self.from.beeper_on(), self.to.beeper_on()) {
            (false, true) => Some(true),
            (true, false) => Some(false),
            _ => None,
        }
    }
}

impl AlarmStatus {
    /// Check if the beeper should sound in this status
    pub fn beeper_on(&self) -> bool {
        matches!(self, AlarmStatus::Triggered)
    }

    /// Check if incoming readings are evaluated against the threshold
    pub fn watches_readings(&self) -> bool {
        matches!(self, AlarmStatus::Armed)
    }

    /// Check if supervision is active at all
    pub fn is_active(&self) -> bool {
        !matches!(self, AlarmStatus::Disabled)
    }

    /// Next status for a command, or `None` if the command is undefined here
    ///
    /// `Disable` is defined everywhere, including `Disabled` itself.
    pub fn on_command(self, command: AlarmCommand) -> Option<Self> {
        use AlarmCommand::*;
        use AlarmStatus::*;

        match (self, command) {
            (_, Disable) => Some(Disabled),

            (Disabled, Arm) => Some(Armed),
            // Re-arming clears the latch
            (Acknowledged, Arm) => Some(Armed),

            (Triggered, Acknowledge) => Some(Acknowledged),

            (Armed, Arm) | (Triggered, Arm) => None,
            (Disabled, Acknowledge) | (Armed, Acknowledge) | (Acknowledged, Acknowledge) => None,
        }
    }

    /// Next status for a reading
    ///
    /// Only `Armed` reacts, and only to a valid reading at or above the
    /// threshold. Invalid readings are "no data" and never change status.
    pub fn on_reading(self, reading: &SensorReading, threshold: f32) -> Self {
        if self.watches_readings() && reading.reaches(threshold) {
            AlarmStatus::Triggered
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::SensorKind;

    const ALL: [AlarmStatus; 4] = [
        AlarmStatus::Disabled,
        AlarmStatus::Armed,
        AlarmStatus::Triggered,
        AlarmStatus::Acknowledged,
    ];

    fn hot(value: f32) -> SensorReading {
        SensorReading::valid(SensorKind::OneWireSensor, value)
    }

    #[test]
    fn test_disable_from_any_state() {
        for status in ALL {
            assert_eq!(
                status.on_command(AlarmCommand::Disable),
                Some(AlarmStatus::Disabled)
            );
        }
    }

    #[test]
    fn test_arm_paths() {
        assert_eq!(
            AlarmStatus::Disabled.on_command(AlarmCommand::Arm),
            Some(AlarmStatus::Armed)
        );
        assert_eq!(
            AlarmStatus::Acknowledged.on_command(AlarmCommand::Arm),
            Some(AlarmStatus::Armed)
        );
        assert_eq!(AlarmStatus::Armed.on_command(AlarmCommand::Arm), None);
        assert_eq!(AlarmStatus::Triggered.on_command(AlarmCommand::Arm), None);
    }

    #[test]
    fn test_acknowledge_only_from_triggered() {
        for status in ALL {
            let next = status.on_command(AlarmCommand::Acknowledge);
            if status == AlarmStatus::Triggered {
                assert_eq!(next, Some(AlarmStatus::Acknowledged));
            } else {
                assert_eq!(next, None);
            }
        }
    }

    #[test]
    fn test_only_armed_triggers() {
        for status in ALL {
            let next = status.on_reading(&hot(150.0), 100.0);
            if status == AlarmStatus::Armed {
                assert_eq!(next, AlarmStatus::Triggered);
            } else {
                assert_eq!(next, status);
            }
        }
    }

    #[test]
    fn test_below_threshold_stays_armed() {
        assert_eq!(
            AlarmStatus::Armed.on_reading(&hot(99.9), 100.0),
            AlarmStatus::Armed
        );
    }

    #[test]
    fn test_invalid_reading_is_ignored() {
        let reading = SensorReading::invalid(SensorKind::CaptureSensor);
        assert_eq!(
            AlarmStatus::Armed.on_reading(&reading, -1000.0),
            AlarmStatus::Armed
        );
    }

    #[test]
    fn test_beeper_edges() {
        let enter = Transition {
            from: AlarmStatus::Armed,
            to: AlarmStatus::Triggered,
            cause: TransitionCause::Reading,
        };
        assert_eq!(enter.beeper_edge(), Some(true));

        let ack = Transition {
            from: AlarmStatus::Triggered,
            to: AlarmStatus::Acknowledged,
            cause: TransitionCause::Command(AlarmCommand::Acknowledge),
        };
        assert_eq!(ack.beeper_edge(), Some(false));

        let arm = Transition {
            from: AlarmStatus::Disabled,
            to: AlarmStatus::Armed,
            cause: TransitionCause::Command(AlarmCommand::Arm),
        };
        assert_eq!(arm.beeper_edge(), None);
    }
}
