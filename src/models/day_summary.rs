use chrono::NaiveDate;

use crate::core::calculator::duration::StatusTotals;
use crate::core::calculator::grid::DutyGrid;
use crate::utils::formatting::hours1;

/// One rendered day of the driver's log: the 24-hour grid rows, per-status
/// totals, and the cycle arithmetic shown under the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub grid: DutyGrid,
    pub totals: StatusTotals,
    pub total_on_duty_hours: f64,
    pub remaining_cycle_hours: f64,
}

impl DaySummary {
    pub fn total_on_duty_display(&self) -> String {
        hours1(self.total_on_duty_hours)
    }

    pub fn remaining_cycle_display(&self) -> String {
        hours1(self.remaining_cycle_hours)
    }
}
