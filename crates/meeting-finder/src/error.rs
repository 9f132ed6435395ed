//! Error types for meeting-finder operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinderError {
    #[error("Inverted time range: end {end} is before start {start}")]
    InvertedRange { start: u32, end: u32 },

    #[error("Time range ends at minute {end}, past the end of the day")]
    OutOfDay { end: u32 },

    #[error("Invalid meeting duration: {0} minutes")]
    InvalidDuration(i64),

    #[error("Invalid clock time: {0}")]
    InvalidClock(String),
}

pub type Result<T> = std::result::Result<T, FinderError>;
