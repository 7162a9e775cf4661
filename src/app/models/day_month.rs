//! Zero-indexed day-of-month dates in the map script `D.M` notation.

use crate::constants::{MAX_DAY, MAX_MONTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A zero-indexed day of the month and month of the year.
///
/// The source data writes these as `D.M`, so `0.0` is the 1st of January
/// and `4.11` is the 5th of December. Despite the look of the literal this
/// is not a decimal fraction: `4.1` and `4.10` are different dates, which
/// is why the loader keeps the two components instead of an f64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayMonth {
    /// Zero-indexed day of the month (0-30)
    pub day: u8,
    /// Zero-indexed month of the year (0-11)
    pub month: u8,
}

impl DayMonth {
    /// Create a day/month pair, rejecting out-of-range components
    pub fn new(day: u8, month: u8) -> Result<Self, DayMonthParseError> {
        if day > MAX_DAY || month > MAX_MONTH {
            return Err(DayMonthParseError);
        }
        Ok(Self { day, month })
    }
}

/// Error parsing a `D.M` date literal
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected a zero-indexed 'D.M' date with day 0-30 and month 0-11")]
pub struct DayMonthParseError;

impl FromStr for DayMonth {
    type Err = DayMonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, month) = s.split_once('.').ok_or(DayMonthParseError)?;
        let day = day.parse::<u8>().map_err(|_| DayMonthParseError)?;
        let month = month.parse::<u8>().map_err(|_| DayMonthParseError)?;
        Self::new(day, month)
    }
}

impl fmt::Display for DayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.day, self.month)
    }
}
