//! Tone generator for passive beepers
//!
//! A passive piezo only sounds while it is fed a square wave, so the HAL
//! exposes a start/stop tone primitive rather than a plain GPIO level.

/// Square-wave output on a beeper pin
pub trait ToneOutput {
    /// Start a continuous tone at `frequency_hz`
    fn start(&mut self, frequency_hz: u32);

    /// Silence the output
    fn stop(&mut self);
}
