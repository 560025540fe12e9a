use chrono::NaiveDate;
use serde::Serialize;

use super::{duty_status::DutyStatus, time_of_day::TimeOfDay};

/// One contiguous duty period on a daily log sheet.
///
/// An `end` numerically below `start` means the period runs past midnight
/// into the next day. `start == end` is an instantaneous status marker.
#[derive(Debug, Clone, Serialize)]
pub struct DutyInterval {
    pub date: NaiveDate,
    pub status: DutyStatus,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub location: String,
}

impl DutyInterval {
    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }

    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }
}
