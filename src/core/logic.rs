use chrono::NaiveDate;

use crate::core::calculator::{duration::StatusTotals, grid};
use crate::models::budget_state::MAX_CYCLE_HOURS;
use crate::models::{day_summary::DaySummary, duty_interval::DutyInterval};

pub struct Core;

impl Core {
    /// Assemble one day's log sheet: grid rows, per-status totals, and the
    /// remaining 70-hour allowance given the hours already used this cycle.
    pub fn build_day_summary(
        date: NaiveDate,
        intervals: &[DutyInterval],
        current_hours_used: f64,
    ) -> DaySummary {
        let grid = grid::build_grid(intervals);
        let totals = StatusTotals::compute(intervals);

        let total_on_duty_hours = totals.total_on_duty_hours();
        // Floored at zero: an overdrawn cycle shows as 0.0, never negative.
        let remaining_cycle_hours =
            (MAX_CYCLE_HOURS - current_hours_used - total_on_duty_hours).max(0.0);

        DaySummary {
            date,
            grid,
            totals,
            total_on_duty_hours,
            remaining_cycle_hours,
        }
    }
}
