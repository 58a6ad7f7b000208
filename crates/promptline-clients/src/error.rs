//! Internal error types for the collaborator clients.
//!
//! These errors are mapped to the core `CollaboratorError` at the port
//! boundary (see `port.rs`).

use std::time::Duration;

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The client was built without credentials.
    #[error("{service} credentials are not configured")]
    NotConfigured { service: &'static str },

    /// The configured endpoint cannot be turned into a request URL.
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The service answered with an HTTP error status.
    #[error("API request failed with status {status}: {message}")]
    ApiRequestFailed { status: u16, message: String },

    /// The HTTP client gave up waiting.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The body parsed but did not contain what we need.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ClientError {
    pub(crate) fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}
