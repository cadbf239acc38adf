//! Error types for calendar-core operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    /// A draft failed validation. Messages are in rule order.
    #[error("Invalid event: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid hour: {0} (expected 0-23)")]
    InvalidHour(u32),

    #[error("No event is open for editing")]
    NoEditor,

    /// The edited event left the store while its editor was open.
    #[error("No event with id {0}")]
    NotFound(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
