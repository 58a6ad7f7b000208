//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the pipelines expect from the
//! collaborator services. They contain no transport details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or HTTP types in any signature
//! - One attempt per call; retries are never the port's concern
//! - Every collaborator failure is a [`CollaboratorError`]

pub mod completion;
pub mod grammar;
pub mod metrics_source;
pub mod observer;
pub mod safety;

use std::time::Duration;

use thiserror::Error;

pub use completion::{CompletionPort, CompletionRequest};
pub use grammar::GrammarAnalyzerPort;
pub use metrics_source::{MetricsError, MetricsSourcePort};
pub use observer::{GenerationReport, NoopObserver, PipelineObserver, ValidationReport};
pub use safety::ContentSafetyPort;

/// Failure of a call to an external collaborator.
///
/// The pipelines never propagate these; each step maps them onto its
/// fallback policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// Endpoint or credentials are missing.
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// The call did not finish within the per-call timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection, TLS or other transport failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Service returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The service answered but the body was unusable.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl CollaboratorError {
    /// Whether the collaborator was never reachable because it lacks configuration.
    #[must_use]
    pub const fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured(_))
    }
}
