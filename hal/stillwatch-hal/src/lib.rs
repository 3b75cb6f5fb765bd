//! Stillwatch Hardware Abstraction Layer
//!
//! This crate defines the primitive hardware services the sensor and output
//! drivers consume. Chip-specific code (timer capture units, GPIO banks,
//! PWM tone generators) implements these traits so the same drivers run on
//! any board, and on the host against fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  stillwatch-core (supervision, station) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  stillwatch-drivers (SMT172, DS18B20)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  stillwatch-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`capture::CaptureTimer`] - Duty-cycle measurement via input capture
//! - [`onewire::OneWireBus`] - Single-wire addressed bus
//! - [`tone::ToneOutput`] - Square wave for a passive beeper

#![no_std]
#![deny(unsafe_code)]

pub mod capture;
pub mod onewire;
pub mod tone;

// Re-export key traits at crate root for convenience
pub use capture::{CaptureSample, CaptureTimer};
pub use onewire::{OneWireBus, OneWireError};
pub use tone::ToneOutput;
