//! Output drivers
//!
//! Both implement [`stillwatch_core::traits::BinaryOutput`] so the station
//! drives them without knowing how they are wired.

pub mod beeper;
pub mod led;

pub use beeper::ToneBeeper;
pub use led::StatusLed;
