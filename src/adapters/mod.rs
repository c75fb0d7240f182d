//! Adapters - Implementations of port interfaces.
//!
//! - `ChronoDateParser` - MemberPress date strings via `chrono`
//! - `ValidatorEmailFormat` - Email syntax via the `validator` crate

mod chrono_date_parser;
mod validator_email;

use std::sync::Arc;

pub use chrono_date_parser::ChronoDateParser;
pub use validator_email::ValidatorEmailFormat;

use crate::domain::events::EventServices;

/// Collaborators wired to the production adapters.
pub fn default_services() -> EventServices {
    EventServices::new(Arc::new(ChronoDateParser), Arc::new(ValidatorEmailFormat))
}
