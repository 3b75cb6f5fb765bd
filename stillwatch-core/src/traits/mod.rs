//! Hardware abstraction traits
//!
//! These traits define the interface between the supervision logic
//! and the concrete drivers.

pub mod output;
pub mod sensor;

pub use output::BinaryOutput;
pub use sensor::Sensor;
