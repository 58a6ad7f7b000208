#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    GeneratedResponse, GrammarResult, Issue, MetricsSnapshot, PromptRequest, SEVERITY_THRESHOLD,
    SafetyRejection, SafetyVerdict, UNKNOWN_LANGUAGE, ValidationOutcome, ValidationResult,
};
pub use error::PipelineError;
pub use ports::{
    CollaboratorError, CompletionPort, CompletionRequest, ContentSafetyPort, GenerationReport,
    GrammarAnalyzerPort, MetricsError, MetricsSourcePort, NoopObserver, PipelineObserver,
    ValidationReport,
};
pub use services::{
    FALLBACK_RESPONSE, MetricsService, PipelineTelemetry, PromptValidationService,
    ResponseGenerationService, StepOutcome,
};
pub use settings::{
    DEFAULT_COLLABORATOR_TIMEOUT, GenerationParams, PipelineSettings, SafetyFailurePolicy,
    SettingsError, validate_settings,
};

// Used by the tests only
#[cfg(test)]
use serde_json as _;
