//! Per-step results for the pipelines.
//!
//! Every collaborator call produces a [`StepOutcome`], so the fallback taken
//! by each step is spelled out where the step runs.

use std::future::Future;
use std::time::Duration;

use crate::ports::CollaboratorError;

/// Result of one pipeline step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome<T> {
    /// The collaborator answered and its value is used as-is.
    Completed(T),
    /// The collaborator failed; `value` is the step's documented default.
    Fallback { value: T, error: CollaboratorError },
}

impl<T> StepOutcome<T> {
    /// Keep the value on success, otherwise build the fallback.
    pub fn from_result(
        result: Result<T, CollaboratorError>,
        fallback: impl FnOnce(&CollaboratorError) -> T,
    ) -> Self {
        match result {
            Ok(value) => Self::Completed(value),
            Err(error) => Self::Fallback {
                value: fallback(&error),
                error,
            },
        }
    }

    pub const fn value(&self) -> &T {
        match self {
            Self::Completed(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Completed(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub const fn error(&self) -> Option<&CollaboratorError> {
        match self {
            Self::Completed(_) => None,
            Self::Fallback { error, .. } => Some(error),
        }
    }
}

/// Tally of completed and degraded steps within one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct StepTally {
    pub completed: u32,
    pub degraded: u32,
}

impl StepTally {
    pub fn record<T>(&mut self, outcome: &StepOutcome<T>) {
        if outcome.is_fallback() {
            self.degraded += 1;
        } else {
            self.completed += 1;
        }
    }
}

/// Run a collaborator call under the per-call timeout.
pub(crate) async fn bounded<T, F>(timeout: Duration, call: F) -> Result<T, CollaboratorError>
where
    F: Future<Output = Result<T, CollaboratorError>>,
{
    tokio::time::timeout(timeout, call)
        .await
        .unwrap_or(Err(CollaboratorError::Timeout(timeout)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_keeps_success() {
        let outcome = StepOutcome::from_result(Ok::<_, CollaboratorError>(3), |_| 0);
        assert_eq!(outcome, StepOutcome::Completed(3));
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_from_result_uses_fallback() {
        let err = CollaboratorError::Transport("reset".to_string());
        let outcome = StepOutcome::from_result(Err::<i32, _>(err.clone()), |_| 7);
        assert!(outcome.is_fallback());
        assert_eq!(*outcome.value(), 7);
        assert_eq!(outcome.error(), Some(&err));
    }

    #[test]
    fn test_tally() {
        let mut tally = StepTally::default();
        tally.record(&StepOutcome::Completed(()));
        tally.record(&StepOutcome::Fallback {
            value: (),
            error: CollaboratorError::Timeout(Duration::from_secs(1)),
        });
        tally.record(&StepOutcome::Completed(()));
        assert_eq!(
            tally,
            StepTally {
                completed: 2,
                degraded: 1
            }
        );
    }

    #[tokio::test]
    async fn test_bounded_times_out() {
        let timeout = Duration::from_millis(20);
        let result: Result<(), _> = bounded(timeout, async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        assert_eq!(result, Err(CollaboratorError::Timeout(timeout)));
    }

    #[tokio::test]
    async fn test_bounded_passes_through() {
        let result = bounded(Duration::from_secs(1), async { Ok::<_, CollaboratorError>(5) }).await;
        assert_eq!(result, Ok(5));
    }
}
