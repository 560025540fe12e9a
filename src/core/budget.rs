//! HOS budget engine: state transitions over [`BudgetState`].
//!
//! Every transition is a pure function from the current state to a new
//! one. A rejected operation returns an error and produces no successor
//! state, so a failed call cannot leave the budget half-updated.

use crate::errors::{AppError, AppResult};
use crate::models::budget_state::{
    BREAK_AFTER_DRIVING_HOURS, BudgetSnapshot, BudgetState, BudgetStatus, MAX_CYCLE_HOURS,
    MAX_DRIVING_HOURS, MAX_DUTY_WINDOW_HOURS,
};

/// One request against the duty-time budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetOp {
    Drive(f64),
    OnDuty(f64),
    Rest(f64),
}

/// Whether `hours` of driving is currently legal. Pure predicate; the
/// caller must still commit the time through [`apply`].
pub fn can_drive(state: &BudgetState, hours: f64) -> bool {
    // A zero or negative request is a no-op and always permitted.
    if hours <= 0.0 {
        return true;
    }

    if state.driving_hours_left <= 0.0 {
        return false;
    }

    if state.duty_window_left <= 0.0 {
        return false;
    }

    // 30-minute break overdue after 8 h of driving.
    if state.hours_since_last_break >= BREAK_AFTER_DRIVING_HOURS {
        return false;
    }

    if state.cycle_hours_left <= 0.0 {
        return false;
    }

    hours <= state.driving_hours_left
}

/// Apply one operation to a budget state, returning the successor state.
pub fn apply(state: &BudgetState, op: BudgetOp) -> AppResult<BudgetState> {
    match op {
        BudgetOp::Drive(hours) => {
            if !can_drive(state, hours) {
                return Err(AppError::HosViolation(hours));
            }
            Ok(BudgetState {
                driving_hours_left: state.driving_hours_left - hours,
                duty_window_left: state.duty_window_left - hours,
                cycle_hours_left: state.cycle_hours_left - hours,
                hours_since_last_break: state.hours_since_last_break + hours,
            })
        }
        BudgetOp::OnDuty(hours) => {
            if state.duty_window_left <= 0.0 {
                return Err(AppError::DutyWindowExpired);
            }
            // Cycle hours are spent but not gated here: only driving time
            // checks the 70-hour limit. On-duty time also leaves the break
            // clock alone, since only rest resets it.
            Ok(BudgetState {
                duty_window_left: state.duty_window_left - hours,
                cycle_hours_left: state.cycle_hours_left - hours,
                ..*state
            })
        }
        BudgetOp::Rest(hours) => Ok(rest(state, hours)),
    }
}

/// Rest never violates a limit. Thresholds are evaluated independently and
/// in ascending order, so a longer rest implies every shorter reset.
fn rest(state: &BudgetState, hours: f64) -> BudgetState {
    let mut next = *state;

    // 30-minute break resets the break clock.
    if hours >= 0.5 {
        next.hours_since_last_break = 0.0;
    }

    // 10-hour rest restores the daily driving limit and duty window.
    if hours >= 10.0 {
        next.driving_hours_left = MAX_DRIVING_HOURS;
        next.duty_window_left = MAX_DUTY_WINDOW_HOURS;
    }

    // 34-hour restart restores the 8-day cycle.
    if hours >= 34.0 {
        next.cycle_hours_left = MAX_CYCLE_HOURS;
    }

    next
}

/// One driver session's budget. Owns its state, commits successful
/// transitions, and is never shared across sessions.
#[derive(Debug, Clone)]
pub struct HosBudget {
    current_hours_used: f64,
    state: BudgetState,
}

impl HosBudget {
    /// Start a session from the hours already spent this cycle.
    /// Callers own the `[0, 70]` range of `current_hours_used`.
    pub fn new(current_hours_used: f64) -> Self {
        Self {
            current_hours_used,
            state: BudgetState::from_hours_used(current_hours_used),
        }
    }

    pub fn can_drive(&self, hours: f64) -> bool {
        can_drive(&self.state, hours)
    }

    /// Commit driving time. Fails with [`AppError::HosViolation`] when
    /// [`Self::can_drive`] does not hold, leaving the state untouched.
    pub fn add_driving_time(&mut self, hours: f64) -> AppResult<BudgetSnapshot> {
        self.state = apply(&self.state, BudgetOp::Drive(hours))?;
        Ok(BudgetSnapshot::of(&self.state))
    }

    /// Commit on-duty (not driving) time. Fails with
    /// [`AppError::DutyWindowExpired`] once the 14-hour window is gone.
    pub fn add_on_duty_time(&mut self, hours: f64) -> AppResult<BudgetSnapshot> {
        self.state = apply(&self.state, BudgetOp::OnDuty(hours))?;
        Ok(BudgetSnapshot::of(&self.state))
    }

    /// Commit rest time. Always legal.
    pub fn take_break(&mut self, hours: f64) -> BudgetSnapshot {
        self.state = rest(&self.state, hours);
        BudgetSnapshot::of(&self.state)
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Side-effect-free status report.
    pub fn status(&self) -> BudgetStatus {
        BudgetStatus {
            current_hours_used: self.current_hours_used,
            driving_hours_left: self.state.driving_hours_left,
            duty_window_left: self.state.duty_window_left,
            cycle_hours_left: self.state.cycle_hours_left,
            hours_since_last_break: self.state.hours_since_last_break,
            needs_break: self.state.needs_break(),
        }
    }
}
