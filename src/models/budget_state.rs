use serde::Serialize;

/// Daily driving limit, restored by a 10-hour rest.
pub const MAX_DRIVING_HOURS: f64 = 11.0;
/// Duty window after coming on duty, restored by a 10-hour rest.
pub const MAX_DUTY_WINDOW_HOURS: f64 = 14.0;
/// Rolling 8-day duty budget, restored by a 34-hour rest.
pub const MAX_CYCLE_HOURS: f64 = 70.0;
/// Driving hours after which a 30-minute break is mandatory.
pub const BREAK_AFTER_DRIVING_HOURS: f64 = 8.0;

/// Remaining legal duty-time budget for one driver at a point in time.
/// A committed state never holds a negative field; limits are checked
/// before any transition is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetState {
    pub driving_hours_left: f64,
    pub duty_window_left: f64,
    pub cycle_hours_left: f64,
    pub hours_since_last_break: f64,
}

impl BudgetState {
    /// Budget at session start, from the hours already spent this cycle.
    /// Callers own the `[0, 70]` range of `current_hours_used`; values
    /// outside it simply shrink the budgets past their floors.
    pub fn from_hours_used(current_hours_used: f64) -> Self {
        Self {
            driving_hours_left: MAX_DRIVING_HOURS - current_hours_used,
            duty_window_left: MAX_DUTY_WINDOW_HOURS - current_hours_used,
            cycle_hours_left: MAX_CYCLE_HOURS - current_hours_used,
            hours_since_last_break: 0.0,
        }
    }

    pub fn needs_break(&self) -> bool {
        self.hours_since_last_break >= BREAK_AFTER_DRIVING_HOURS
    }
}

/// Post-operation view returned by every engine operation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BudgetSnapshot {
    pub driving_hours_left: f64,
    pub duty_window_left: f64,
    pub cycle_hours_left: f64,
    pub hours_since_last_break: f64,
    pub break_needed: bool,
}

impl BudgetSnapshot {
    pub fn of(state: &BudgetState) -> Self {
        Self {
            driving_hours_left: state.driving_hours_left,
            duty_window_left: state.duty_window_left,
            cycle_hours_left: state.cycle_hours_left,
            hours_since_last_break: state.hours_since_last_break,
            break_needed: state.needs_break(),
        }
    }
}

/// Full status report for the presentation layer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BudgetStatus {
    pub current_hours_used: f64,
    pub driving_hours_left: f64,
    pub duty_window_left: f64,
    pub cycle_hours_left: f64,
    pub hours_since_last_break: f64,
    pub needs_break: bool,
}
