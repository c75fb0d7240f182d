//! ClassifyWebhookHandler - Command handler for incoming MemberPress webhook bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::domain::events::{EventError, EventName, EventRegistry, EventView};

/// Command to classify a webhook body.
#[derive(Debug, Clone)]
pub struct ClassifyWebhookCommand {
    /// Raw request body as received.
    pub body: Vec<u8>,
}

/// Errors that stop a body from being classified at all.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Webhook body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error(transparent)]
    Event(#[from] EventError),
}

impl ClassifyError {
    /// Returns true if redelivering the same body could succeed.
    ///
    /// Both failures are properties of the body itself.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Compact, serialisable digest of a classified event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummary {
    pub event: EventName,
    pub event_type: &'static str,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscr_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub amount: f64,
    pub rebill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<&EventView> for EventSummary {
    fn from(view: &EventView) -> Self {
        let owned = |s: Option<&str>| s.map(str::to_string);
        let member = view.member();

        Self {
            event: view.event_name(),
            event_type: view.event_type_tag(),
            is_valid: view.is_valid(),
            id: view.id(),
            username: owned(member.and_then(|m| m.username())),
            email: owned(view.email()).or_else(|| owned(member.and_then(|m| m.email()))),
            membership: owned(view.membership().and_then(|m| m.title())),
            trans_num: owned(view.trans_num())
                .or_else(|| owned(view.transaction().and_then(|t| t.trans_num()))),
            subscr_id: owned(view.subscr_id())
                .or_else(|| owned(view.subscription().and_then(|s| s.subscr_id()))),
            status: owned(view.status()),
            amount: view.amount(),
            rebill: view.rebill(),
            created_at: view.created_at(),
            expires_at: view.expires_at(),
        }
    }
}

/// Handler that turns webhook bodies into event views.
pub struct ClassifyWebhookHandler {
    registry: EventRegistry,
}

impl ClassifyWebhookHandler {
    pub fn new(registry: EventRegistry) -> Self {
        Self { registry }
    }

    /// Parses and resolves the body.
    ///
    /// A structurally invalid event is still `Ok`; check
    /// [`EventView::is_valid`].
    pub fn handle(&self, cmd: ClassifyWebhookCommand) -> Result<EventView, ClassifyError> {
        let payload: serde_json::Value = serde_json::from_slice(&cmd.body).map_err(|e| {
            tracing::warn!(error = %e, bytes = cmd.body.len(), "rejected non-JSON webhook body");
            ClassifyError::InvalidJson(e)
        })?;

        let view = self.registry.resolve(payload)?;
        if !view.is_valid() {
            tracing::warn!(event = %view.event_name(), "classified webhook failed validation");
        }
        Ok(view)
    }

    /// Like [`handle`](Self::handle), reduced to an [`EventSummary`].
    pub fn summarize(&self, cmd: ClassifyWebhookCommand) -> Result<EventSummary, ClassifyError> {
        self.handle(cmd).map(|view| EventSummary::from(&view))
    }
}
