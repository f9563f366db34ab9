//! Error types for calendar-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
