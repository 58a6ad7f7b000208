//! Errors surfaced by the pipeline services.
//!
//! Collaborator failures never appear here: each step absorbs them into its
//! fallback. What remains are client errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Missing or empty prompt.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PipelineError {
    pub(crate) fn empty_prompt() -> Self {
        Self::InvalidInput("prompt is required".to_string())
    }
}
