//! Errors raised while classifying a webhook payload.

use thiserror::Error;

/// Hard failures of event lookup.
///
/// Structural problems with a payload never surface here; they leave the
/// resulting view invalid instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// The payload names an event outside the catalogue.
    #[error("Unknown MemberPress event '{0}'")]
    UnknownEvent(String),
}
