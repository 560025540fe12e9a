//! Unified application error type.
//! All modules (core, models, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid duty status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // HOS rule violations
    // ---------------------------
    #[error("Cannot drive {0} h under HOS regulations")]
    HosViolation(f64),

    #[error("14-hour duty window expired")]
    DutyWindowExpired,

    // ---------------------------
    // Ingestion errors
    // ---------------------------
    #[error("Malformed log payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
