//! One-wire bus abstraction
//!
//! Provides the byte-level primitives of a Dallas/Maxim one-wire bus.
//! Implementations may bit-bang an open-drain GPIO or drive a bridge chip.

/// Errors from one-wire bus operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OneWireError {
    /// No device answered the reset pulse
    NoPresence,
    /// Bus is held low (short circuit or missing pull-up)
    BusHeldLow,
    /// Underlying pin or bridge reported an error
    Io,
}

/// One-wire bus master
pub trait OneWireBus {
    /// Issue a reset pulse
    ///
    /// Returns `Ok(true)` if at least one device answered with a presence
    /// pulse, `Ok(false)` if the bus stayed idle.
    fn reset(&mut self) -> Result<bool, OneWireError>;

    /// Write one byte, least significant bit first
    fn write_byte(&mut self, byte: u8) -> Result<(), OneWireError>;

    /// Read one byte, least significant bit first
    fn read_byte(&mut self) -> Result<u8, OneWireError>;

    /// Write a sequence of bytes
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), OneWireError> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Fill `buf` with bytes read from the bus
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), OneWireError> {
        for slot in buf.iter_mut() {
            *slot = self.read_byte()?;
        }
        Ok(())
    }
}
