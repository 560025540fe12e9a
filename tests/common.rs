#![allow(dead_code)]
use chrono::NaiveDate;
use eldcore::models::duty_interval::DutyInterval;
use eldcore::models::duty_status::DutyStatus;
use eldcore::models::time_of_day::TimeOfDay;

/// Fixed log sheet date shared by tests that don't care about the calendar.
pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 12).expect("valid date")
}

pub fn t(s: &str) -> TimeOfDay {
    s.parse().expect("valid HH:MM")
}

pub fn interval(status: DutyStatus, start: &str, end: &str) -> DutyInterval {
    DutyInterval {
        date: day(),
        status,
        start: t(start),
        end: t(end),
        location: "Springfield, IL".to_string(),
    }
}

pub fn interval_on(date: NaiveDate, status: DutyStatus, start: &str, end: &str) -> DutyInterval {
    DutyInterval {
        date,
        status,
        start: t(start),
        end: t(end),
        location: "Springfield, IL".to_string(),
    }
}
