//! Text completion port.
//!
//! Backed by a large-language-model chat completion API. The rewrite,
//! suggestion and response steps all go through this port, usually with
//! separate deployments for rewriting and for final responses.

use async_trait::async_trait;

use super::CollaboratorError;

/// A single completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Full prompt sent as the user message.
    pub prompt: String,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

/// Port for generating text from a prompt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Generate text for the request. Returns the raw generated text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CollaboratorError>;
}
