//! Binary configuration persistence
//!
//! The station configuration is stored as postcard data behind a small
//! header so stale or foreign blobs are rejected on load.

use serde::{Deserialize, Serialize};

use super::types::{ConfigError, StationConfig};

/// Magic number to identify stored station configuration
pub const CONFIG_MAGIC: u32 = 0x5354_4C57; // "STLW"

/// Current stored configuration version
pub const CONFIG_VERSION: u8 = 1;

/// Upper bound of an encoded configuration (bytes)
pub const MAX_ENCODED_LEN: usize = 64;

/// Persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistError {
    /// Output buffer too small
    BufferTooSmall,
    /// Blob is not postcard data of the expected shape
    Deserialize,
    /// Magic number mismatch
    BadMagic,
    /// Stored by an incompatible firmware version
    VersionMismatch,
    /// Decoded configuration failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for PersistError {
    fn from(e: ConfigError) -> Self {
        PersistError::Invalid(e)
    }
}

#[derive(Serialize, Deserialize)]
struct StoredConfig {
    magic: u32,
    version: u8,
    config: StationConfig,
}

/// Encode `config` into `buf`, returning the used prefix
pub fn encode<'a>(
    config: &StationConfig,
    buf: &'a mut [u8],
) -> Result<&'a mut [u8], PersistError> {
    let stored = StoredConfig {
        magic: CONFIG_MAGIC,
        version: CONFIG_VERSION,
        config: *config,
    };
    postcard::to_slice(&stored, buf).map_err(|_| PersistError::BufferTooSmall)
}

/// Decode and validate a stored configuration
pub fn decode(bytes: &[u8]) -> Result<StationConfig, PersistError> {
    let stored: StoredConfig =
        postcard::from_bytes(bytes).map_err(|_| PersistError::Deserialize)?;

    if stored.magic != CONFIG_MAGIC {
        return Err(PersistError::BadMagic);
    }

    if stored.version != CONFIG_VERSION {
        return Err(PersistError::VersionMismatch);
    }

    stored.config.validate()?;
    Ok(stored.config)
}
