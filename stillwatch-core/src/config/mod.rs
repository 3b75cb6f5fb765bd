//! Configuration types
//!
//! Board-agnostic configuration passed to the station and driver
//! constructors at start-up. Persisted as postcard binary data, or loaded
//! from TOML text when the `toml` feature is enabled.

#[cfg(feature = "serde")]
pub mod persist;
#[cfg(feature = "toml")]
pub mod text;
pub mod types;

pub use types::*;
