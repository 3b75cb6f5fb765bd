//! Status LED
//!
//! Simple indicator on a GPIO pin, wired active-high or active-low.

use embedded_hal::digital::{OutputPin, PinState};
use stillwatch_core::traits::BinaryOutput;

/// Status LED on a GPIO pin
pub struct StatusLed<P> {
    pin: P,
    /// If true, LED on = pin LOW
    inverted: bool,
    on: bool,
}

impl<P: OutputPin> StatusLed<P> {
    /// Create a new LED output; it starts dark
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        led.set_on(false);
        led
    }

    /// LED lit when the pin is high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// LED lit when the pin is low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> BinaryOutput for StatusLed<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        // GPIO writes cannot fail on the supported chips
        self.pin.set_state(PinState::from(on != self.inverted)).ok();
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
