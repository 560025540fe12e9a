//! Conversion of raw API payloads into validated model types.
//! All string parsing happens here, once, at the boundary.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::errors::AppResult;
use crate::models::{duty_interval::DutyInterval, log_record::LogRecord, trip::Trip};

/// Validate a batch of raw records; the first malformed one aborts the
/// batch so a bad payload never half-loads.
pub fn parse_log_records(records: &[LogRecord]) -> AppResult<Vec<DutyInterval>> {
    records.iter().map(LogRecord::to_interval).collect()
}

/// Parse the JSON array returned by `/trips/{id}/logs/`.
pub fn logs_from_json(payload: &str) -> AppResult<Vec<DutyInterval>> {
    let records: Vec<LogRecord> = serde_json::from_str(payload)?;
    parse_log_records(&records)
}

/// Parse the JSON object returned by `/trips/{id}/`.
pub fn trip_from_json(payload: &str) -> AppResult<Trip> {
    Ok(serde_json::from_str(payload)?)
}

/// Group a trip's intervals into per-day log sheets, ordered by date.
/// Within a day the input order is preserved.
pub fn group_by_date(intervals: Vec<DutyInterval>) -> BTreeMap<NaiveDate, Vec<DutyInterval>> {
    let mut days: BTreeMap<NaiveDate, Vec<DutyInterval>> = BTreeMap::new();

    for iv in intervals {
        days.entry(iv.date).or_default().push(iv);
    }

    days
}
