//! Response generation pipeline.
//!
//! Forwards an already-validated prompt to the response deployment. No
//! safety check happens here; callers are expected to have run the
//! validation pipeline first.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use super::step::{StepOutcome, bounded};
use crate::domain::GeneratedResponse;
use crate::error::PipelineError;
use crate::ports::{
    CollaboratorError, CompletionPort, CompletionRequest, GenerationReport, NoopObserver,
    PipelineObserver,
};
use crate::settings::PipelineSettings;

/// Text returned when the completion collaborator fails.
pub const FALLBACK_RESPONSE: &str =
    "A response could not be generated at this time. Please try again later.";

/// Service generating the final answer for a corrected prompt.
pub struct ResponseGenerationService {
    completion: Arc<dyn CompletionPort>,
    observer: Arc<dyn PipelineObserver>,
    settings: PipelineSettings,
}

impl ResponseGenerationService {
    pub fn new(completion: Arc<dyn CompletionPort>, settings: PipelineSettings) -> Self {
        Self {
            completion,
            observer: Arc::new(NoopObserver::new()),
            settings,
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Generate a response.
    ///
    /// Collaborator failures yield [`FALLBACK_RESPONSE`] rather than an error.
    pub async fn generate(&self, corrected_prompt: &str) -> Result<GeneratedResponse, PipelineError> {
        if corrected_prompt.trim().is_empty() {
            return Err(PipelineError::empty_prompt());
        }

        let started = Instant::now();
        let request = CompletionRequest {
            prompt: corrected_prompt.to_string(),
            max_tokens: self.settings.response.max_tokens,
            temperature: self.settings.response.temperature,
        };
        let result = bounded(self.settings.collaborator_timeout, self.completion.complete(&request))
            .await
            .and_then(|text| {
                if text.trim().is_empty() {
                    Err(CollaboratorError::InvalidResponse(
                        "empty completion".to_string(),
                    ))
                } else {
                    Ok(GeneratedResponse::generated(text))
                }
            });
        let outcome = StepOutcome::from_result(result, |e| {
            warn!(step = "response", error = %e, "Response generation failed; returning fallback");
            GeneratedResponse::fallback(FALLBACK_RESPONSE)
        });

        let response = outcome.into_value();
        let report = GenerationReport {
            latency: started.elapsed(),
            degraded: response.degraded,
        };
        debug!(
            latency_ms = report.latency.as_millis(),
            degraded = report.degraded,
            "Generation finished"
        );
        self.observer.generation_finished(&report);

        Ok(response)
    }
}
