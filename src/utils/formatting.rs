//! Formatting utilities for log sheet display values.

/// Render minutes as decimal hours with one digit, e.g. 450 → "7.5".
/// Rounding happens here only; accumulation upstream stays in minutes.
pub fn mins2hours1(mins: i64) -> String {
    format!("{:.1}", mins as f64 / 60.0)
}

/// Render an hour quantity with one digit, e.g. 9.25 → "9.3".
pub fn hours1(hours: f64) -> String {
    format!("{hours:.1}")
}
