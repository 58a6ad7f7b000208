//! Pipeline observer port.
//!
//! The pipelines report a summary of every run to an observer. The
//! telemetry recorder behind `/monitoring` is the main implementation.

use std::time::Duration;

/// Summary of one prompt validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Wall-clock duration of the whole run.
    pub latency: Duration,
    /// Number of grammar issues the analysis step reported.
    pub issues_detected: usize,
    /// Collaborator steps that completed normally.
    pub steps_completed: u32,
    /// Collaborator steps that fell back to a default.
    pub steps_degraded: u32,
    /// Whether the prompt was rejected by the safety check.
    pub rejected: bool,
}

/// Summary of one response generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub latency: Duration,
    /// Whether the fallback message was returned.
    pub degraded: bool,
}

/// Trait for observing pipeline runs.
///
/// # Implementations
///
/// - `NoopObserver` - For tests and one-shot CLI commands
/// - `PipelineTelemetry` - In-process counters feeding the metrics endpoint
pub trait PipelineObserver: Send + Sync {
    /// Called once per validation that reached a verdict.
    fn validation_finished(&self, report: &ValidationReport);

    /// Called once per generation request that reached the collaborator.
    fn generation_finished(&self, report: &GenerationReport);
}

/// An observer that discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl NoopObserver {
    pub const fn new() -> Self {
        Self
    }
}

impl PipelineObserver for NoopObserver {
    fn validation_finished(&self, _report: &ValidationReport) {}

    fn generation_finished(&self, _report: &GenerationReport) {}
}
