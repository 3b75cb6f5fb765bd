//! SMT172 duty-cycle temperature sensor
//!
//! The SMT172 outputs a square wave whose duty cycle encodes temperature.
//! A timer captures both edges; this driver converts the latest captured
//! period using the datasheet transfer function:
//!
//! ```text
//! T[°C] = 212.77 * DC - 68.085      DC = t_high / t_period
//! ```

use stillwatch_core::sensor::{SensorFault, SensorKind, SensorReading};
use stillwatch_core::traits::Sensor;
use stillwatch_hal::{CaptureSample, CaptureTimer};

/// Transfer function slope (°C per unit duty cycle)
const SLOPE: f32 = 212.77;

/// Transfer function offset (°C)
const OFFSET: f32 = -68.085;

/// Convert one captured period to degrees Celsius
///
/// Returns `None` for an impossible period (zero length, or high time
/// not strictly inside the period). A line stuck low or high has no duty
/// cycle and would otherwise read as -68 °C or 145 °C.
pub fn duty_to_celsius(high_ticks: u32, period_ticks: u32) -> Option<f32> {
    if high_ticks == 0 || high_ticks >= period_ticks {
        return None;
    }

    let duty = high_ticks as f32 / period_ticks as f32;
    Some(SLOPE * duty + OFFSET)
}

/// SMT172 on a timer input-capture channel
pub struct Smt172Sensor<T> {
    timer: T,
    /// Captures older than this are stale (ms)
    staleness_ms: u32,
    last_fault: Option<SensorFault>,
}

impl<T: CaptureTimer> Smt172Sensor<T> {
    /// Create a new SMT172 sensor
    ///
    /// # Arguments
    /// - `timer`: Capture channel the sensor output is wired to
    /// - `staleness_ms`: Maximum age of a usable capture
    pub fn new(timer: T, staleness_ms: u32) -> Self {
        Self {
            timer,
            staleness_ms,
            last_fault: None,
        }
    }

    /// Why the latest sample was invalid, if it was
    pub fn last_fault(&self) -> Option<SensorFault> {
        self.last_fault
    }

    /// Get access to the underlying timer
    pub fn timer(&self) -> &T {
        &self.timer
    }

    fn convert(&self, capture: Option<CaptureSample>) -> Result<f32, SensorFault> {
        // Never captured an edge: sensor absent or not powered
        let capture = capture.ok_or(SensorFault::NoResponse)?;

        if capture.age_ms > self.staleness_ms {
            return Err(SensorFault::StaleCapture);
        }

        duty_to_celsius(capture.high_ticks, capture.period_ticks).ok_or(SensorFault::Corrupt)
    }
}

impl<T: CaptureTimer> Sensor for Smt172Sensor<T> {
    fn kind(&self) -> SensorKind {
        SensorKind::CaptureSensor
    }

    fn sample(&mut self) -> SensorReading {
        let capture = self.timer.latest();

        match self.convert(capture) {
            Ok(celsius) => {
                self.last_fault = None;
                SensorReading::valid(SensorKind::CaptureSensor, celsius)
            }
            Err(fault) => {
                self.last_fault = Some(fault);
                SensorReading::invalid(SensorKind::CaptureSensor)
            }
        }
    }
}
