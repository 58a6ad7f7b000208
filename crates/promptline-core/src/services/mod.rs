//! Core services - the pipeline logic.
//!
//! Services here are pure orchestrators over the ports. They don't know
//! about HTTP clients, environment variables or the web framework.

mod generation;
mod metrics;
mod step;
mod telemetry;
pub mod templates;
mod validation;

pub use generation::{FALLBACK_RESPONSE, ResponseGenerationService};
pub use metrics::MetricsService;
pub use step::StepOutcome;
pub use telemetry::PipelineTelemetry;
pub use validation::{FLAGGED_REASON, PromptValidationService, UNVERIFIED_REASON};
