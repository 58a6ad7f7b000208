//! Metrics service - the only reader of the metrics source.

use std::sync::Arc;

use tracing::warn;

use crate::domain::MetricsSnapshot;
use crate::ports::MetricsSourcePort;

/// Service producing operational snapshots. Never fails.
pub struct MetricsService {
    source: Arc<dyn MetricsSourcePort>,
}

impl MetricsService {
    pub fn new(source: Arc<dyn MetricsSourcePort>) -> Self {
        Self { source }
    }

    /// Current snapshot, or [`MetricsSnapshot::zeroed`] if the source fails.
    pub fn snapshot(&self) -> MetricsSnapshot {
        match self.source.snapshot() {
            Ok(snapshot) => snapshot.sanitized(),
            Err(e) => {
                warn!(error = %e, "Metrics source failed; returning zeroed snapshot");
                MetricsSnapshot::zeroed()
            }
        }
    }
}
