//! TOML station configuration
//!
//! Every key is optional; missing keys keep their defaults. Sensor kinds
//! accept both their descriptive names and the part numbers:
//!
//! ```toml
//! tick_interval_ms = 1000
//!
//! [boiler]
//! sensor = "ds18b20"
//! threshold_c = 98.0
//!
//! [vapor]
//! sensor = "smt172"
//! threshold_c = 78.5
//! auto_arm = true
//! ```

use super::types::{ConfigError, StationConfig};

impl StationConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: StationConfig = toml::from_str(input).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}
