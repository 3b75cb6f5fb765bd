//! Board-agnostic core logic for the Stillwatch distillation thermometer
//!
//! This crate contains all supervision logic that does not depend on
//! specific hardware implementations:
//!
//! - Sensor reading data model and the polymorphic sensor trait
//! - Latching alarm state machine and its per-channel supervisor
//! - Two-channel station (boiler and vapor) driving beeper and LED
//! - Configuration type definitions and persistence
//!
//! Sensor drivers live in `stillwatch-drivers`; the periodic tick and the
//! SD logger are external collaborators.

#![no_std]
#![deny(unsafe_code)]

pub mod alarm;
pub mod config;
pub mod sensor;
pub mod station;
pub mod storage;
pub mod traits;

pub use alarm::{AlarmCommand, AlarmState, AlarmStatus, AlarmSupervisor, CommandError, Transition};
pub use sensor::{SensorKind, SensorReading};
pub use station::{ChannelId, Station, StationReport};
pub use storage::StorageStatus;
