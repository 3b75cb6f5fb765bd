//! Logging storage status
//!
//! Reported once per cycle by the external SD logger. The core treats it as
//! informational: it is forwarded in the station report and lights the
//! status LED, but never alters alarm state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of the logger's attempt to open its log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StorageStatus {
    /// No card detected
    #[default]
    NoCard,
    /// Card present but no room for a new log file
    FullCard,
    /// Log file created; samples are being written
    FileOk,
}

impl StorageStatus {
    /// Whether samples are currently being persisted
    pub fn is_logging(&self) -> bool {
        matches!(self, StorageStatus::FileOk)
    }
}
