//! Chrono-backed implementation of the `DateParser` port.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::ports::{DateParseError, DateParser};

/// Format MemberPress uses for every timestamp it emits.
const MEMBERPRESS_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-only form used by some reminder payloads.
const MEMBERPRESS_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses MemberPress date strings.
///
/// Accepts, in order:
/// - `YYYY-MM-DD HH:MM:SS` interpreted as UTC
/// - RFC 3339 (`2024-01-31T10:00:00+02:00`), converted to UTC
/// - `YYYY-MM-DD` at midnight UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDateParser;

impl ChronoDateParser {
    pub fn new() -> Self {
        Self
    }
}

impl DateParser for ChronoDateParser {
    fn parse(&self, raw: &str) -> Result<DateTime<Utc>, DateParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DateParseError::Empty);
        }
        if raw.starts_with("0000-00-00") {
            return Err(DateParseError::ZeroDate);
        }

        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, MEMBERPRESS_DATETIME_FORMAT) {
            return Ok(naive.and_utc());
        }
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Ok(parsed.with_timezone(&Utc));
        }
        if let Some(midnight) = NaiveDate::parse_from_str(raw, MEMBERPRESS_DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Ok(midnight.and_utc());
        }

        Err(DateParseError::Unrecognised(raw.to_string()))
    }
}
