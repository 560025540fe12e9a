use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::errors::AppError;
use crate::utils::time::parse_time;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A wall-clock time within one day, stored as minutes since midnight.
/// Always in `[0, 1440)`; the only constructors are validated ones, so a
/// held value never needs re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    pub fn from_naive(t: NaiveTime) -> Self {
        Self {
            minutes: (t.hour() * 60 + t.minute()) as u16,
        }
    }

    pub fn hour(&self) -> u32 {
        (self.minutes / 60) as u32
    }

    pub fn minute(&self) -> u32 {
        (self.minutes % 60) as u32
    }

    pub fn minutes_since_midnight(&self) -> i64 {
        self.minutes as i64
    }
}

impl FromStr for TimeOfDay {
    type Err = AppError;

    /// Parse `"HH:MM"` (24-hour). Malformed input is an error, never
    /// coerced to midnight.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
            .map(Self::from_naive)
            .ok_or_else(|| AppError::InvalidTime(s.to_string()))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
