//! On/off output trait

/// A two-level output such as the beeper or the status LED
pub trait BinaryOutput {
    /// Turn the output on or off
    fn set_on(&mut self, on: bool);

    /// Check if the output is currently on
    fn is_on(&self) -> bool;
}
