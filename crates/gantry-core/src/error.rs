use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to load tasks from '{source_name}': {reason}")]
    Load { source_name: String, reason: String },

    #[error("No date selected")]
    Selection,

    #[error("No events on {0}")]
    EmptyResult(NaiveDate),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid recurrence for task '{id}': interval must be a positive number of days, got {interval}")]
    InvalidRecurrence { id: String, interval: i64 },

    #[error("Invalid chart window: {0} days (allowed: 0 to 3650)")]
    InvalidWindow(i64),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}
