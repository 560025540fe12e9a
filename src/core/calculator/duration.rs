//! Per-status elapsed time across a day's intervals.

use crate::models::duty_interval::DutyInterval;
use crate::models::duty_status::DutyStatus;
use crate::utils::formatting::mins2hours1;
use crate::utils::time::minutes_between;

/// Elapsed minutes covered by one interval, wrap-aware: an end before the
/// start runs to midnight and continues from 00:00.
pub fn interval_minutes(interval: &DutyInterval) -> i64 {
    minutes_between(interval.start, interval.end)
}

/// Total minutes spent in `status` across the day.
pub fn status_minutes(intervals: &[DutyInterval], status: DutyStatus) -> i64 {
    intervals
        .iter()
        .filter(|iv| iv.status == status)
        .map(interval_minutes)
        .sum()
}

/// Accumulated minutes per duty status. Minutes stay integral; hours are
/// derived only when read, so no rounding error accumulates across many
/// short intervals.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusTotals {
    minutes: [i64; DutyStatus::COUNT],
}

impl StatusTotals {
    pub fn compute(intervals: &[DutyInterval]) -> Self {
        let mut minutes = [0i64; DutyStatus::COUNT];

        for iv in intervals {
            minutes[iv.status.index()] += interval_minutes(iv);
        }

        Self { minutes }
    }

    pub fn minutes(&self, status: DutyStatus) -> i64 {
        self.minutes[status.index()]
    }

    pub fn hours(&self, status: DutyStatus) -> f64 {
        self.minutes(status) as f64 / 60.0
    }

    /// One-decimal display figure, e.g. `"7.5"`.
    pub fn hours_display(&self, status: DutyStatus) -> String {
        mins2hours1(self.minutes(status))
    }

    /// Driving plus on-duty-not-driving time.
    pub fn total_on_duty_minutes(&self) -> i64 {
        self.minutes(DutyStatus::Driving) + self.minutes(DutyStatus::OnDutyNotDriving)
    }

    pub fn total_on_duty_hours(&self) -> f64 {
        self.total_on_duty_minutes() as f64 / 60.0
    }
}
