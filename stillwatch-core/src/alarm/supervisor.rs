//! Alarm supervisor
//!
//! Owns the [`AlarmState`] of one monitored channel and applies readings
//! and commands to it. The supervisor never fails: invalid readings are
//! recorded as "no data" and undefined commands are refused with an error
//! while leaving the state untouched.

use heapless::HistoryBuffer;

use super::events::{SupervisorEvent, EVENT_HISTORY_LEN};
use super::machine::{AlarmCommand, AlarmStatus, CommandError, Transition, TransitionCause};
use crate::sensor::SensorReading;

/// Mutable alarm state of one channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmState {
    pub status: AlarmStatus,
    /// Trigger level in degrees Celsius (inclusive)
    pub threshold: f32,
    /// Most recent reading seen while supervision was active
    pub last_reading: Option<SensorReading>,
}

impl AlarmState {
    /// Initial state: disabled, no reading yet
    pub const fn new(threshold: f32) -> Self {
        Self {
            status: AlarmStatus::Disabled,
            threshold,
            last_reading: None,
        }
    }
}

/// Per-channel alarm supervisor
pub struct AlarmSupervisor {
    state: AlarmState,
    history: HistoryBuffer<SupervisorEvent, EVENT_HISTORY_LEN>,
}

impl AlarmSupervisor {
    /// Create a disabled supervisor with the given threshold
    pub fn new(threshold: f32) -> Self {
        Self {
            state: AlarmState::new(threshold),
            history: HistoryBuffer::new(),
        }
    }

    /// Create a supervisor that is armed straight away (auto-arm on config load)
    pub fn armed(threshold: f32) -> Self {
        let mut supervisor = Self::new(threshold);
        supervisor.apply(AlarmStatus::Armed, TransitionCause::Command(AlarmCommand::Arm));
        supervisor
    }

    /// Current status
    pub fn status(&self) -> AlarmStatus {
        self.state.status
    }

    /// Current threshold in degrees Celsius
    pub fn threshold(&self) -> f32 {
        self.state.threshold
    }

    /// Most recent reading, cleared on disable
    pub fn last_reading(&self) -> Option<SensorReading> {
        self.state.last_reading
    }

    /// Snapshot of the whole state
    pub fn state(&self) -> &AlarmState {
        &self.state
    }

    /// Feed one supervision-cycle reading
    ///
    /// Readings are ignored entirely while disabled. Otherwise the reading
    /// is stored, and an `Armed` channel triggers on a valid reading at or
    /// above the threshold.
    pub fn process(&mut self, reading: SensorReading) -> Option<Transition> {
        if !self.state.status.is_active() {
            return None;
        }

        self.state.last_reading = Some(reading);

        if !reading.valid {
            #[cfg(feature = "defmt")]
            defmt::debug!("no data ({}), holding {}", reading.kind, self.state.status);
            self.history.write(SupervisorEvent::NoData);
            return None;
        }

        let next = self.state.status.on_reading(&reading, self.state.threshold);
        self.apply(next, TransitionCause::Reading)
    }

    /// Handle an external command
    ///
    /// Returns the transition taken, `Ok(None)` for a disable that found
    /// the channel already disabled, or `Err` if the command is undefined
    /// in the current status.
    pub fn command(&mut self, command: AlarmCommand) -> Result<Option<Transition>, CommandError> {
        let status = self.state.status;
        let Some(next) = status.on_command(command) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("rejected {} while {}", command, status);
            self.history.write(SupervisorEvent::Rejected { status, command });
            return Err(CommandError::InvalidCommand { status, command });
        };

        if command == AlarmCommand::Disable {
            self.state.last_reading = None;
        }

        Ok(self.apply(next, TransitionCause::Command(command)))
    }

    /// Change the threshold
    ///
    /// Re-configuration always returns the channel to `Disabled`; the
    /// operator re-arms against the new level.
    pub fn reconfigure(&mut self, threshold: f32) -> Option<Transition> {
        self.state.threshold = threshold;
        self.state.last_reading = None;
        self.apply(AlarmStatus::Disabled, TransitionCause::Reconfigured)
    }

    /// Recorded events, oldest first
    pub fn events(&self) -> impl Iterator<Item = &SupervisorEvent> {
        self.history.oldest_ordered()
    }

    /// Most recent recorded event
    pub fn last_event(&self) -> Option<&SupervisorEvent> {
        self.history.recent()
    }

    /// Forget recorded events
    pub fn clear_events(&mut self) {
        self.history.clear();
    }

    fn apply(&mut self, next: AlarmStatus, cause: TransitionCause) -> Option<Transition> {
        let from = self.state.status;
        if next == from {
            return None;
        }

        self.state.status = next;
        let transition = Transition {
            from,
            to: next,
            cause,
        };

        #[cfg(feature = "defmt")]
        defmt::info!("alarm {} -> {} ({})", from, next, cause);
        self.history.write(SupervisorEvent::Transition(transition));

        Some(transition)
    }
}
