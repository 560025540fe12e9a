use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;

use super::{duty_interval::DutyInterval, duty_status::DutyStatus, time_of_day::TimeOfDay};

/// Raw log entry as the trip API emits it, before any validation.
/// Times stay strings here; [`LogRecord::to_interval`] is the single place
/// they are parsed and checked, so downstream code never re-parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub date: String,
    pub status: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: String,
}

impl LogRecord {
    pub fn to_interval(&self) -> AppResult<DutyInterval> {
        let date =
            parse_date(&self.date).ok_or_else(|| AppError::InvalidDate(self.date.clone()))?;
        let status = DutyStatus::from_tag(&self.status)
            .ok_or_else(|| AppError::InvalidStatus(self.status.clone()))?;
        let start: TimeOfDay = self.start_time.parse()?;
        let end: TimeOfDay = self.end_time.parse()?;

        Ok(DutyInterval {
            date,
            status,
            start,
            end,
            location: self.location.clone(),
        })
    }
}
