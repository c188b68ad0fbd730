//! Wall-clock times of day in `HH:MM` form.
//!
//! Run start times and promised delivery times arrive as `HH:MM` strings.
//! [HhMm] stores them as minutes since midnight and handles the midnight wrap
//! when computing how long a delivery window is.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day, stored as minutes since midnight (`0..1440`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HhMm(u32);

impl HhMm {
    /// Build from hour (0-23) and minute (0-59).
    pub fn new(hour: u32, minute: u32) -> Result<Self, ParseTimeError> {
        if hour > 23 {
            return Err(ParseTimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ParseTimeError::MinuteOutOfRange(minute));
        }
        Ok(Self(hour * 60 + minute))
    }

    pub fn hour(&self) -> u32 {
        self.0 / 60
    }

    pub fn minute(&self) -> u32 {
        self.0 % 60
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// Minutes from `self` until `deadline`, wrapping past midnight.
    ///
    /// A deadline at or before `self` falls on the next day, so the result is
    /// always in `1..=1440`.
    pub fn minutes_until(&self, deadline: HhMm) -> u32 {
        let delta = deadline.0 as i64 - self.0 as i64;
        if delta <= 0 {
            (delta + MINUTES_PER_DAY as i64) as u32
        } else {
            delta as u32
        }
    }
}

impl fmt::Display for HhMm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for HhMm {
    type Err = ParseTimeError;

    /// Strict `HH:MM` parse: 1-2 digit hour, exactly 2 digit minute.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseTimeError::BadFormat(s.to_string());
        let (hour_part, minute_part) = s.split_once(':').ok_or_else(bad)?;
        if hour_part.is_empty()
            || hour_part.len() > 2
            || minute_part.len() != 2
            || !hour_part.bytes().all(|b| b.is_ascii_digit())
            || !minute_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(bad());
        }
        let hour: u32 = hour_part.parse().map_err(|_| bad())?;
        let minute: u32 = minute_part.parse().map_err(|_| bad())?;
        Self::new(hour, minute)
    }
}

impl Serialize for HhMm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HhMm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(DeError::custom)
    }
}

/// Rejected `HH:MM` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTimeError {
    BadFormat(String),
    HourOutOfRange(u32),
    MinuteOutOfRange(u32),
}

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTimeError::BadFormat(s) => write!(f, "expected HH:MM, got {s:?}"),
            ParseTimeError::HourOutOfRange(h) => write!(f, "hour {h} out of range 0-23"),
            ParseTimeError::MinuteOutOfRange(m) => write!(f, "minute {m} out of range 0-59"),
        }
    }
}

impl std::error::Error for ParseTimeError {}
