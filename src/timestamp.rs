// This is a part of datefmt.
// See README.md and LICENSE.txt for details.

//! The combined date and time, stored as microseconds since the Unix epoch.

use core::fmt;

use num_integer::div_mod_floor;

use crate::date::Date;
use crate::error::Error;
use crate::time::{Time, MICROS_PER_DAY};

/// An ISO 8601 date and time without a time zone, at microsecond precision.
///
/// Internally a count of microseconds since 1970-01-01 00:00:00, the
/// representation the columnar executor stores in TIMESTAMP vectors.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
pub struct Timestamp {
    micros: i64,
}

impl Timestamp {
    /// Combines a date and a time of day into a timestamp.
    ///
    /// Returns [`Error::OutOfRange`] when the microsecond count overflows.
    pub fn new(date: Date, time: Time) -> Result<Timestamp, Error> {
        i64::from(date.days())
            .checked_mul(MICROS_PER_DAY)
            .and_then(|day_micros| day_micros.checked_add(time.micros()))
            .map(|micros| Timestamp { micros })
            .ok_or(Error::OutOfRange)
    }

    /// Splits the timestamp into its date and time-of-day components.
    ///
    /// The split floors towards negative infinity, so timestamps before the
    /// epoch still produce a non-negative time of day.
    pub fn split(&self) -> (Date, Time) {
        let (days, micros) = div_mod_floor(self.micros, MICROS_PER_DAY);
        (Date::from_days(days as i32), Time::from_micros(micros))
    }

    /// The date component.
    pub fn date(&self) -> Date {
        self.split().0
    }

    /// The time-of-day component.
    pub fn time(&self) -> Time {
        self.split().1
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (date, time) = self.split();
        write!(f, "{} {}", date, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        let date = Date::from_ymd(y, mo, d).unwrap();
        let time = Time::from_hms_micro(h, mi, s, 0).unwrap();
        Timestamp::new(date, time).unwrap()
    }

    #[test]
    fn test_split_roundtrip() {
        let ts = ymd_hms(1992, 3, 2, 7, 8, 9);
        let (date, time) = ts.split();
        assert_eq!(date.to_ymd(), (1992, 3, 2));
        assert_eq!(time.convert(), (7, 8, 9, 0));
    }

    #[test]
    fn test_split_before_epoch() {
        let ts = ymd_hms(1969, 12, 31, 23, 59, 59);
        let (date, time) = ts.split();
        assert_eq!(date.to_ymd(), (1969, 12, 31));
        assert_eq!(time.convert(), (23, 59, 59, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(ymd_hms(1992, 3, 2, 7, 8, 9).to_string(), "1992-03-02 07:08:09");
    }
}
