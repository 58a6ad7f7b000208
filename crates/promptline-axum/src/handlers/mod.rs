//! HTTP request handlers.
//!
//! Handlers are thin wrappers that delegate to the core services. Each one
//! runs inside a span carrying a fresh `request_id`.

pub mod monitoring;
pub mod prompt;

use tracing::{Span, info_span};
use uuid::Uuid;

/// Span for one request to `route`.
pub(crate) fn request_span(route: &'static str) -> Span {
    info_span!("request", route, request_id = %Uuid::new_v4())
}
