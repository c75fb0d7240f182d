//! Application layer - Command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{ClassifyError, ClassifyWebhookCommand, ClassifyWebhookHandler, EventSummary};
