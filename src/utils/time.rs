//! Time utilities: parsing HH:MM and wrap-aware duration computation.

use chrono::NaiveTime;

use crate::models::time_of_day::{MINUTES_PER_DAY, TimeOfDay};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Minutes from `start` to `end` on the log sheet. An end before the start
/// crosses midnight: the span runs to 24:00 and continues from 00:00.
pub fn minutes_between(start: TimeOfDay, end: TimeOfDay) -> i64 {
    let s = start.minutes_since_midnight();
    let e = end.minutes_since_midnight();

    if e < s { (MINUTES_PER_DAY - s) + e } else { e - s }
}
