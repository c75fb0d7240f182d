//! MemberPress Events - Classification of MemberPress webhook payloads
//!
//! This crate turns the JSON bodies MemberPress posts to webhook endpoints
//! into validated, typed event views with total accessors over their data.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

use serde_json::Value;

pub use domain::events::{Category, EventError, EventName, EventRegistry, EventView};

/// Resolves `payload` with the production date and email adapters.
///
/// # Errors
///
/// Returns [`EventError::UnknownEvent`] when the payload names an event
/// outside the catalogue.
pub fn resolve(payload: Value) -> Result<EventView, EventError> {
    EventRegistry::new(adapters::default_services()).resolve(payload)
}
