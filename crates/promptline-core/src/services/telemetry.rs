//! In-process pipeline telemetry.
//!
//! Lock-free counters fed by the pipelines through [`PipelineObserver`] and
//! read back through [`MetricsSourcePort`]. Counters live for the lifetime
//! of the process; nothing is persisted.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::MetricsSnapshot;
use crate::ports::{
    GenerationReport, MetricsError, MetricsSourcePort, PipelineObserver, ValidationReport,
};

#[derive(Debug, Default)]
pub struct PipelineTelemetry {
    validations: AtomicU64,
    validation_micros: AtomicU64,
    steps_completed: AtomicU64,
    steps_degraded: AtomicU64,
    issues_detected: AtomicU64,
}

impl PipelineTelemetry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PipelineObserver for PipelineTelemetry {
    fn validation_finished(&self, report: &ValidationReport) {
        let micros = u64::try_from(report.latency.as_micros()).unwrap_or(u64::MAX);
        self.validations.fetch_add(1, Ordering::Relaxed);
        self.validation_micros.fetch_add(micros, Ordering::Relaxed);
        self.steps_completed
            .fetch_add(u64::from(report.steps_completed), Ordering::Relaxed);
        self.steps_degraded
            .fetch_add(u64::from(report.steps_degraded), Ordering::Relaxed);
        self.issues_detected
            .fetch_add(report.issues_detected as u64, Ordering::Relaxed);
    }

    fn generation_finished(&self, report: &GenerationReport) {
        let counter = if report.degraded {
            &self.steps_degraded
        } else {
            &self.steps_completed
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl MetricsSourcePort for PipelineTelemetry {
    #[allow(clippy::cast_precision_loss)] // counters stay far below 2^52
    fn snapshot(&self) -> Result<MetricsSnapshot, MetricsError> {
        let validations = self.validations.load(Ordering::Relaxed);
        let micros = self.validation_micros.load(Ordering::Relaxed);
        let completed = self.steps_completed.load(Ordering::Relaxed);
        let degraded = self.steps_degraded.load(Ordering::Relaxed);

        let latency_ms = if validations == 0 {
            0.0
        } else {
            micros as f64 / validations as f64 / 1000.0
        };
        let total_steps = completed + degraded;
        let accuracy_pct = if total_steps == 0 {
            0.0
        } else {
            completed as f64 * 100.0 / total_steps as f64
        };

        Ok(MetricsSnapshot {
            latency_ms,
            accuracy_pct,
            issues_detected: self.issues_detected.load(Ordering::Relaxed),
        })
    }
}
