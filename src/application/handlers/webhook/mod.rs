//! Webhook handlers.
//!
//! Classification of MemberPress webhook deliveries into typed event views.

mod classify_webhook;

pub use classify_webhook::{
    ClassifyError, ClassifyWebhookCommand, ClassifyWebhookHandler, EventSummary,
};
