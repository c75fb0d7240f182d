//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the event views and the outside world. Adapters implement these ports.
//!
//! - `DateParser` - Converts MemberPress date strings into UTC timestamps
//! - `EmailFormatValidator` - Syntactic email address check

mod date_parser;
mod email_validator;

pub use date_parser::{DateParseError, DateParser};
pub use email_validator::EmailFormatValidator;
