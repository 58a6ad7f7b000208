//! Prompt validation pipeline.
//!
//! Runs grammar analysis, rewrite, safety check and suggestion generation in
//! a fixed order:
//!
//! 1. grammar check on the raw prompt
//! 2. rewrite of the raw prompt
//! 3. safety check on the *corrected* prompt (short-circuits when flagged)
//! 4. suggestions for the *raw* prompt
//!
//! Only the safety step can end the run early. Every other collaborator
//! failure is replaced by the step's default and the run continues.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::step::{StepOutcome, StepTally, bounded};
use super::templates::{parse_suggestions, rewrite_prompt, suggestions_prompt};
use crate::domain::{
    GrammarResult, PromptRequest, SafetyRejection, SafetyVerdict, ValidationOutcome,
    ValidationResult,
};
use crate::error::PipelineError;
use crate::ports::{
    CollaboratorError, CompletionPort, CompletionRequest, ContentSafetyPort, GrammarAnalyzerPort,
    NoopObserver, PipelineObserver, ValidationReport,
};
use crate::settings::{PipelineSettings, SafetyFailurePolicy};

/// Reason attached to rejections from a flagged verdict.
pub const FLAGGED_REASON: &str = "Content was flagged as inappropriate";

/// Reason attached to rejections when the safety check could not run.
pub const UNVERIFIED_REASON: &str = "Content safety check could not be completed";

/// Service orchestrating prompt validation.
pub struct PromptValidationService {
    grammar: Arc<dyn GrammarAnalyzerPort>,
    safety: Arc<dyn ContentSafetyPort>,
    completion: Arc<dyn CompletionPort>,
    observer: Arc<dyn PipelineObserver>,
    settings: PipelineSettings,
}

impl PromptValidationService {
    /// Create a validation service.
    ///
    /// `completion` is the rewrite deployment; it serves both the rewrite and
    /// the suggestion steps.
    pub fn new(
        grammar: Arc<dyn GrammarAnalyzerPort>,
        safety: Arc<dyn ContentSafetyPort>,
        completion: Arc<dyn CompletionPort>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            grammar,
            safety,
            completion,
            observer: Arc::new(NoopObserver::new()),
            settings,
        }
    }

    /// Report every run to `observer`.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub const fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Validate a prompt.
    ///
    /// Fails only with [`PipelineError::InvalidInput`] for a blank prompt.
    /// A safety rejection is returned as [`ValidationOutcome::Rejected`].
    pub async fn validate(
        &self,
        request: &PromptRequest,
    ) -> Result<ValidationOutcome, PipelineError> {
        if request.is_blank() {
            return Err(PipelineError::empty_prompt());
        }

        let started = Instant::now();
        let text = request.text.as_str();
        let mut tally = StepTally::default();
        debug!(prompt_len = text.len(), "Validating prompt");

        let grammar = self.check_grammar(text).await;
        tally.record(&grammar);
        let issues_detected = grammar.value().issues.len();

        let corrected = self.rewrite(text, grammar.value()).await;
        tally.record(&corrected);
        let corrected_prompt = corrected.into_value();

        let safety = self.check_safety(&corrected_prompt).await;
        tally.record(&safety);

        if safety.value().flagged {
            let reason = if safety.is_fallback() {
                UNVERIFIED_REASON
            } else {
                FLAGGED_REASON
            };
            info!(
                categories = ?safety.value().category_severities,
                unverified = safety.is_fallback(),
                "Prompt rejected by safety check"
            );
            self.report(started, issues_detected, tally, true);
            return Ok(ValidationOutcome::Rejected(SafetyRejection {
                reason: reason.to_string(),
                category_severities: safety.into_value().category_severities,
            }));
        }

        let suggestions = self.suggest(text).await;
        tally.record(&suggestions);

        self.report(started, issues_detected, tally, false);
        Ok(ValidationOutcome::Accepted(ValidationResult {
            corrected_prompt,
            suggestions: suggestions.into_value(),
        }))
    }

    async fn check_grammar(&self, text: &str) -> StepOutcome<GrammarResult> {
        let result = bounded(self.settings.collaborator_timeout, self.grammar.analyze(text)).await;
        StepOutcome::from_result(result, |e| {
            warn!(step = "grammar", error = %e, "Grammar check failed; using neutral result");
            GrammarResult::neutral()
        })
    }

    async fn rewrite(&self, text: &str, grammar: &GrammarResult) -> StepOutcome<String> {
        let request = CompletionRequest {
            prompt: rewrite_prompt(text, grammar),
            max_tokens: self.settings.rewrite.max_tokens,
            temperature: self.settings.rewrite.temperature,
        };
        let result = bounded(self.settings.collaborator_timeout, self.completion.complete(&request))
            .await
            .and_then(|raw| non_empty(&raw));
        StepOutcome::from_result(result, |e| {
            warn!(step = "rewrite", error = %e, "Rewrite failed; keeping original prompt");
            text.to_string()
        })
    }

    async fn check_safety(&self, corrected: &str) -> StepOutcome<SafetyVerdict> {
        let result = bounded(self.settings.collaborator_timeout, self.safety.classify(corrected)).await;
        let policy = self.settings.safety_policy;
        StepOutcome::from_result(result, |e| {
            if e.is_not_configured() || policy == SafetyFailurePolicy::FailClosed {
                warn!(step = "safety", error = %e, %policy, "Safety check failed; treating as flagged");
                SafetyVerdict::unverified()
            } else {
                warn!(step = "safety", error = %e, %policy, "Safety check failed; letting prompt through");
                SafetyVerdict::clear()
            }
        })
    }

    async fn suggest(&self, text: &str) -> StepOutcome<Vec<String>> {
        let request = CompletionRequest {
            prompt: suggestions_prompt(text),
            max_tokens: self.settings.suggestions.max_tokens,
            temperature: self.settings.suggestions.temperature,
        };
        let result = bounded(self.settings.collaborator_timeout, self.completion.complete(&request))
            .await
            .map(|raw| parse_suggestions(&raw));
        StepOutcome::from_result(result, |e| {
            warn!(step = "suggestions", error = %e, "Suggestion generation failed; returning none");
            Vec::new()
        })
    }

    fn report(&self, started: Instant, issues_detected: usize, tally: StepTally, rejected: bool) {
        let report = ValidationReport {
            latency: started.elapsed(),
            issues_detected,
            steps_completed: tally.completed,
            steps_degraded: tally.degraded,
            rejected,
        };
        debug!(
            latency_ms = report.latency.as_millis(),
            degraded = report.steps_degraded,
            rejected,
            "Validation finished"
        );
        self.observer.validation_finished(&report);
    }
}

fn non_empty(raw: &str) -> Result<String, CollaboratorError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(CollaboratorError::InvalidResponse(
            "empty completion".to_string(),
        ))
    } else {
        Ok(trimmed.to_string())
    }
}
