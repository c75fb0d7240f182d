//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod webhook;

pub use webhook::{ClassifyError, ClassifyWebhookCommand, ClassifyWebhookHandler, EventSummary};
