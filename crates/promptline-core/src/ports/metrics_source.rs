//! Metrics source port.
//!
//! The `/monitoring` surface reads its numbers through this port so the
//! backing telemetry store can be swapped without touching the handlers.

use thiserror::Error;

use crate::domain::MetricsSnapshot;

/// Errors a metrics source may report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// The telemetry backend could not be read.
    #[error("Metrics source unavailable: {0}")]
    Unavailable(String),
}

/// Port for reading a point-in-time metrics snapshot.
#[cfg_attr(test, mockall::automock)]
pub trait MetricsSourcePort: Send + Sync {
    fn snapshot(&self) -> Result<MetricsSnapshot, MetricsError>;
}
