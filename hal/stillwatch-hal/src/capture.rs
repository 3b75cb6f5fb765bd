//! Timer input-capture abstraction
//!
//! Duty-cycle encoded sensors (such as the SMT172) are read by letting a
//! hardware timer capture both edges of the signal. The HAL keeps the most
//! recent complete period; drivers only ever look at that snapshot.

/// One complete period of a captured duty-cycle signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CaptureSample {
    /// Timer ticks the signal spent high
    pub high_ticks: u32,
    /// Timer ticks of the whole period (high + low)
    pub period_ticks: u32,
    /// Milliseconds elapsed since this period was captured
    pub age_ms: u32,
}

impl CaptureSample {
    /// Create a capture sample
    pub const fn new(high_ticks: u32, period_ticks: u32, age_ms: u32) -> Self {
        Self {
            high_ticks,
            period_ticks,
            age_ms,
        }
    }
}

/// Timer configured to capture a duty-cycle signal
///
/// Implementations typically update their snapshot from the capture
/// interrupt and report how old it is on request.
pub trait CaptureTimer {
    /// Most recent complete period, or `None` if no edge was ever captured
    fn latest(&mut self) -> Option<CaptureSample>;
}
