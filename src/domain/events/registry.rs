//! Dispatch from a raw payload to its event view.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use super::descriptor::EventDescriptor;
use super::errors::EventError;
use super::event_name::EventName;
use super::event_view::EventView;
use super::services::EventServices;

/// Every descriptor, keyed by wire name. Built once, read-only afterwards.
static CATALOGUE: Lazy<HashMap<&'static str, EventDescriptor>> = Lazy::new(|| {
    EventName::ALL
        .iter()
        .map(|name| (name.as_str(), EventDescriptor::for_event(*name)))
        .collect()
});

/// Looks up the descriptor registered under a wire name.
pub fn descriptor_for(wire_name: &str) -> Option<&'static EventDescriptor> {
    CATALOGUE.get(wire_name)
}

/// Returns true for values that name no event: `null`, `false`, zero and
/// empty strings, arrays or objects.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}

/// Resolves raw webhook payloads into validated [`EventView`]s.
#[derive(Debug, Clone)]
pub struct EventRegistry {
    services: EventServices,
}

impl EventRegistry {
    pub fn new(services: EventServices) -> Self {
        Self { services }
    }

    /// Classifies `payload` and validates it against its variant.
    ///
    /// A payload with no event name (missing or blank) resolves to
    /// the catch-all variant. A name outside the catalogue is an error.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownEvent`] when the payload names an event
    /// that is not registered.
    pub fn resolve(&self, payload: Value) -> Result<EventView, EventError> {
        let wire_name = match payload.get("event") {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            Some(other) if !is_blank(other) => other.to_string(),
            _ => EventName::UnidentifiedEvent.as_str().to_string(),
        };

        let descriptor = descriptor_for(&wire_name).ok_or_else(|| {
            tracing::warn!(event = %wire_name, "no view registered for event");
            EventError::UnknownEvent(wire_name.clone())
        })?;

        let mut view = EventView::new(descriptor, payload, self.services.clone());
        let is_valid = view.validate();
        tracing::debug!(event = %descriptor.name(), is_valid, "resolved webhook event");

        Ok(view)
    }
}
