//! Date parser port.
//!
//! MemberPress renders timestamps as strings. Views delegate the conversion
//! to a `DateParser` so that the accepted formats live in one adapter.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failure to interpret a date string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// The input was empty or whitespace.
    #[error("empty date string")]
    Empty,

    /// The sender's "no date" placeholder (`0000-00-00 00:00:00`).
    #[error("zero date placeholder")]
    ZeroDate,

    /// None of the accepted formats matched.
    #[error("unrecognised date format: {0}")]
    Unrecognised(String),
}

/// Converts a date string into a UTC timestamp.
pub trait DateParser: Send + Sync {
    /// Parses `raw`, failing on malformed input.
    fn parse(&self, raw: &str) -> Result<DateTime<Utc>, DateParseError>;
}
