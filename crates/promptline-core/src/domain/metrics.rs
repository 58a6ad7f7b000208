//! Operational metrics snapshot.

use serde::{Deserialize, Serialize};

/// Point-in-time operational metrics. Recomputed on every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub latency_ms: f64,
    pub accuracy_pct: f64,
    pub issues_detected: u64,
}

impl MetricsSnapshot {
    /// The documented default returned when the metrics source fails.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            latency_ms: 0.0,
            accuracy_pct: 0.0,
            issues_detected: 0,
        }
    }

    /// Clamp negative or non-finite values to zero.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            latency_ms: non_negative(self.latency_ms),
            accuracy_pct: non_negative(self.accuracy_pct).min(100.0),
            issues_detected: self.issues_detected,
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_clamps_bad_values() {
        let snapshot = MetricsSnapshot {
            latency_ms: -4.0,
            accuracy_pct: f64::NAN,
            issues_detected: 2,
        }
        .sanitized();
        assert_eq!(snapshot.latency_ms, 0.0);
        assert_eq!(snapshot.accuracy_pct, 0.0);
        assert_eq!(snapshot.issues_detected, 2);

        let capped = MetricsSnapshot {
            latency_ms: 12.5,
            accuracy_pct: 140.0,
            issues_detected: 0,
        }
        .sanitized();
        assert_eq!(capped.latency_ms, 12.5);
        assert_eq!(capped.accuracy_pct, 100.0);
    }
}
