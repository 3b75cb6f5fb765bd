//! Passive beeper output

use stillwatch_core::config::BeeperConfig;
use stillwatch_core::traits::BinaryOutput;
use stillwatch_hal::ToneOutput;

/// Passive piezo fed a fixed tone while on
pub struct ToneBeeper<T> {
    tone: T,
    frequency_hz: u32,
    on: bool,
}

impl<T: ToneOutput> ToneBeeper<T> {
    /// Create a beeper; it starts silent
    pub fn new(tone: T, config: &BeeperConfig) -> Self {
        let mut beeper = Self {
            tone,
            frequency_hz: config.frequency_hz,
            on: false,
        };
        beeper.tone.stop();
        beeper
    }

    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    /// Get access to the underlying tone generator
    pub fn tone(&self) -> &T {
        &self.tone
    }
}

impl<T: ToneOutput> BinaryOutput for ToneBeeper<T> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        if on {
            self.tone.start(self.frequency_hz);
        } else {
            self.tone.stop();
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
