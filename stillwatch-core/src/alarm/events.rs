//! Supervisor event history

use super::machine::{AlarmCommand, AlarmStatus, Transition};

/// Number of events kept per supervisor
pub const EVENT_HISTORY_LEN: usize = 16;

/// Noteworthy things a supervisor observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SupervisorEvent {
    /// An invalid reading arrived while supervision was active
    NoData,
    /// Status changed
    Transition(Transition),
    /// A command was refused
    Rejected {
        status: AlarmStatus,
        command: AlarmCommand,
    },
}

impl SupervisorEvent {
    /// Check if this event changed the alarm status
    pub fn is_transition(&self) -> bool {
        matches!(self, SupervisorEvent::Transition(_))
    }
}
