//! Content-safety classification port.
//!
//! Implementations must return [`CollaboratorError::NotConfigured`] when they
//! lack credentials so the pipeline can fail closed regardless of policy.
//!
//! [`CollaboratorError::NotConfigured`]: super::CollaboratorError::NotConfigured

use async_trait::async_trait;

use super::CollaboratorError;
use crate::domain::SafetyVerdict;

/// Port for classifying text against content-safety categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSafetyPort: Send + Sync {
    /// Classify the text and return per-category severities.
    async fn classify(&self, text: &str) -> Result<SafetyVerdict, CollaboratorError>;
}
