//! Time-of-day sampling.
//!
//! The face asks a [`TimeSource`] once per frame. Production uses the local
//! wall clock; tests script the readings.

use std::fmt;

use chrono::Timelike;

use crate::error::{Error, Result};

/// A sampled time of day. Always in range: hour < 24, minute < 60, second < 60.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ClockReading {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockReading {
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(Error::InvalidReading {
                hour,
                minute,
                second,
            });
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Reads hour, minute and second off any chrono time value.
    ///
    /// A leap second (reported by chrono as second 59 with an overflowing
    /// nanosecond field) reads as second 59.
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second().min(59) as u8,
        }
    }

    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    pub fn is_even_second(&self) -> bool {
        self.second % 2 == 0
    }

    /// Center readout text, "HH:MM".
    pub fn readout(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl fmt::Display for ClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Source of the current time of day.
pub trait TimeSource {
    fn now(&self) -> ClockReading;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> ClockReading {
        (**self).now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn now(&self) -> ClockReading {
        (**self).now()
    }
}

/// Local wall-clock time via chrono.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> ClockReading {
        ClockReading::from_timelike(&chrono::Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(ClockReading::new(24, 0, 0).is_err());
        assert!(ClockReading::new(0, 60, 0).is_err());
        assert!(matches!(
            ClockReading::new(0, 0, 60),
            Err(Error::InvalidReading { second: 60, .. })
        ));
        assert!(ClockReading::new(23, 59, 59).is_ok());
    }

    #[test]
    fn readout_is_zero_padded() {
        let r = ClockReading::new(9, 5, 7).unwrap();
        assert_eq!(r.readout(), "09:05");
        assert_eq!(r.to_string(), "09:05:07");
    }

    #[test]
    fn even_second() {
        assert!(ClockReading::new(0, 0, 0).unwrap().is_even_second());
        assert!(!ClockReading::new(0, 0, 59).unwrap().is_even_second());
    }

    #[test]
    fn from_chrono_time() {
        let t = NaiveTime::from_hms_opt(13, 35, 42).unwrap();
        assert_eq!(
            ClockReading::from_timelike(&t),
            ClockReading::new(13, 35, 42).unwrap()
        );
    }

    #[test]
    fn leap_second_reads_as_59() {
        let t = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert_eq!(ClockReading::from_timelike(&t).second(), 59);
    }

    #[test]
    fn local_clock_is_in_range() {
        let r = LocalClock.now();
        assert!(r.hour() < 24 && r.minute() < 60 && r.second() < 60);
    }
}
