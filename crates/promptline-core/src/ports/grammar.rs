//! Grammar and language analysis port.

use async_trait::async_trait;

use super::CollaboratorError;
use crate::domain::GrammarResult;

/// Port for analyzing a prompt's language and grammar issues.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GrammarAnalyzerPort: Send + Sync {
    /// Analyze the raw prompt text.
    async fn analyze(&self, text: &str) -> Result<GrammarResult, CollaboratorError>;
}
