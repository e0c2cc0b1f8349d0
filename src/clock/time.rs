//! Wall-clock sampling.

use chrono::{Local, Timelike};

/// One reading of the wall clock, taken once per frame so that every hand
/// in a frame agrees with the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSample {
    /// Hour of day, 0–23.
    pub hour: u32,
    /// 0–59.
    pub minute: u32,
    /// 0–59. A leap second is folded into 59.
    pub second: u32,
}

impl TimeSample {
    /// Captures the hour, minute and second of any chrono time value.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second().min(59),
        }
    }
}

/// Source of time samples.
pub trait Clock {
    fn now(&self) -> TimeSample;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeSample {
        TimeSample::from_time(&Local::now())
    }
}

/// A clock that always reads the same time.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub TimeSample);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> TimeSample {
        self.0
    }
}
