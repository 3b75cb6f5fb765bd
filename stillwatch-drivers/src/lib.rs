//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in stillwatch-core on top of the primitives in stillwatch-hal:
//!
//! - Temperature sensors (SMT172 capture, DS18B20 one-wire, none)
//! - Configuration-time sensor selection
//! - Bit-banged one-wire bus over `embedded-hal` pins
//! - Outputs (passive tone beeper, status LED)

#![no_std]
#![deny(unsafe_code)]

pub mod onewire;
pub mod output;
pub mod sensor;
