pub mod budget_state;
pub mod day_summary;
pub mod duty_interval;
pub mod duty_status;
pub mod log_record;
pub mod time_of_day;
pub mod trip;
