//! Domain types for the prompt pipeline.
//!
//! Every type here is a transient per-request value. Nothing is persisted
//! and nothing is mutated once constructed.

pub mod analysis;
pub mod metrics;
pub mod prompt;

pub use analysis::{GrammarResult, Issue, SEVERITY_THRESHOLD, SafetyVerdict, UNKNOWN_LANGUAGE};
pub use metrics::MetricsSnapshot;
pub use prompt::{
    GeneratedResponse, PromptRequest, SafetyRejection, ValidationOutcome, ValidationResult,
};
