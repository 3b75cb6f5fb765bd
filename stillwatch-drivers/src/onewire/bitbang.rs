//! Bit-banged one-wire bus master
//!
//! Drives the bus through an open-drain GPIO with an external pull-up:
//! "high" releases the line, "low" pulls it down. Slot timings follow the
//! standard-speed values from Maxim application note 126.
//!
//! Slots are a few microseconds wide; on targets where interrupt latency
//! exceeds that, the caller must run bus transactions in a critical
//! section.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use stillwatch_hal::{OneWireBus, OneWireError};

const RESET_LOW_US: u32 = 480;
const PRESENCE_SAMPLE_US: u32 = 70;
const RESET_RECOVERY_US: u32 = 410;

/// Whole time slot for one bit
const SLOT_US: u32 = 70;
const WRITE_1_LOW_US: u32 = 6;
const WRITE_0_LOW_US: u32 = 60;
const READ_LOW_US: u32 = 6;
const READ_SAMPLE_US: u32 = 9;

/// One-wire master on an open-drain pin
pub struct BitBangBus<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> BitBangBus<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// Take ownership of the pin and release the line
    pub fn new(pin: P, delay: D) -> Result<Self, OneWireError> {
        let mut bus = Self { pin, delay };
        bus.release_line()?;
        Ok(bus)
    }

    /// Give the pin and delay back
    pub fn free(self) -> (P, D) {
        (self.pin, self.delay)
    }

    fn pull_low(&mut self) -> Result<(), OneWireError> {
        self.pin.set_low().map_err(|_| OneWireError::Io)
    }

    fn release_line(&mut self) -> Result<(), OneWireError> {
        self.pin.set_high().map_err(|_| OneWireError::Io)
    }

    fn line_is_high(&mut self) -> Result<bool, OneWireError> {
        self.pin.is_high().map_err(|_| OneWireError::Io)
    }

    fn write_bit(&mut self, bit: bool) -> Result<(), OneWireError> {
        let low_us = if bit { WRITE_1_LOW_US } else { WRITE_0_LOW_US };

        self.pull_low()?;
        self.delay.delay_us(low_us);
        self.release_line()?;
        self.delay.delay_us(SLOT_US - low_us);
        Ok(())
    }

    fn read_bit(&mut self) -> Result<bool, OneWireError> {
        self.pull_low()?;
        self.delay.delay_us(READ_LOW_US);
        self.release_line()?;
        self.delay.delay_us(READ_SAMPLE_US);
        let bit = self.line_is_high()?;
        self.delay.delay_us(SLOT_US - READ_LOW_US - READ_SAMPLE_US);
        Ok(bit)
    }
}

impl<P, D> OneWireBus for BitBangBus<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn reset(&mut self) -> Result<bool, OneWireError> {
        if !self.line_is_high()? {
            return Err(OneWireError::BusHeldLow);
        }

        self.pull_low()?;
        self.delay.delay_us(RESET_LOW_US);
        self.release_line()?;
        self.delay.delay_us(PRESENCE_SAMPLE_US);

        // A device answers by holding the line low
        let present = !self.line_is_high()?;
        self.delay.delay_us(RESET_RECOVERY_US);

        Ok(present)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), OneWireError> {
        for i in 0..8 {
            self.write_bit(byte & (1 << i) != 0)?;
        }
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8, OneWireError> {
        let mut byte = 0u8;
        for i in 0..8 {
            if self.read_bit()? {
                byte |= 1 << i;
            }
        }
        Ok(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use heapless::{Deque, Vec};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Low,
        High,
        Sample,
        DelayNs(u32),
    }

    type Log = RefCell<Vec<Event, 512>>;

    // Open-drain pin replaying scripted line levels
    struct MockPin<'a> {
        log: &'a Log,
        levels: Deque<bool, 64>,
    }

    impl<'a> MockPin<'a> {
        fn new(log: &'a Log, levels: &[bool]) -> Self {
            let mut script = Deque::new();
            for &level in levels {
                script.push_back(level).unwrap();
            }
            Self {
                log,
                levels: script,
            }
        }
    }

    impl ErrorType for MockPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Low).unwrap();
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::High).unwrap();
            Ok(())
        }
    }

    impl InputPin for MockPin<'_> {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.log.borrow_mut().push(Event::Sample).unwrap();
            // Idle bus floats high once the script runs out
            Ok(self.levels.pop_front().unwrap_or(true))
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    struct MockDelay<'a> {
        log: &'a Log,
    }

    impl DelayNs for MockDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push(Event::DelayNs(ns)).unwrap();
        }
    }

    fn bus<'a>(log: &'a Log, levels: &[bool]) -> BitBangBus<MockPin<'a>, MockDelay<'a>> {
        let bus = BitBangBus::new(MockPin::new(log, levels), MockDelay { log }).unwrap();
        log.borrow_mut().clear();
        bus
    }

    /// Low-pulse widths in nanoseconds, in order
    fn low_pulses(log: &Log) -> Vec<u32, 64> {
        let log = log.borrow();
        let mut pulses = Vec::new();
        for pair in log.windows(2) {
            if let [Event::Low, Event::DelayNs(ns)] = pair {
                pulses.push(*ns).unwrap();
            }
        }
        pulses
    }

    #[test]
    fn test_reset_with_presence() {
        let log = Log::default();
        let mut bus = bus(&log, &[true, false]);

        assert_eq!(bus.reset(), Ok(true));
        assert_eq!(low_pulses(&log).as_slice(), &[480_000]);
    }

    #[test]
    fn test_reset_without_presence() {
        let log = Log::default();
        let mut bus = bus(&log, &[true, true]);
        assert_eq!(bus.reset(), Ok(false));
    }

    #[test]
    fn test_reset_bus_held_low() {
        let log = Log::default();
        let mut bus = bus(&log, &[false]);

        assert_eq!(bus.reset(), Err(OneWireError::BusHeldLow));
        // Never drove the line
        assert!(!log.borrow().contains(&Event::Low));
    }

    #[test]
    fn test_write_byte_lsb_first() {
        let log = Log::default();
        let mut bus = bus(&log, &[]);

        bus.write_byte(0b0000_0001).unwrap();

        let pulses = low_pulses(&log);
        assert_eq!(pulses.len(), 8);
        assert_eq!(pulses[0], 6_000);
        assert!(pulses[1..].iter().all(|&ns| ns == 60_000));
    }

    #[test]
    fn test_read_byte_lsb_first() {
        let log = Log::default();
        // 0xA5 = 1010_0101, sampled LSB first
        let levels = [true, false, true, false, false, true, false, true];
        let mut bus = bus(&log, &levels);

        assert_eq!(bus.read_byte(), Ok(0xA5));
        let samples = log.borrow().iter().filter(|e| **e == Event::Sample).count();
        assert_eq!(samples, 8);
    }

    #[test]
    fn test_slots_are_full_length() {
        let log = Log::default();
        let mut bus = bus(&log, &[]);

        bus.write_byte(0x5A).unwrap();
        let total: u32 = log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::DelayNs(ns) => Some(*ns),
                _ => None,
            })
            .sum();
        assert_eq!(total, 8 * SLOT_US * 1000);
    }
}
