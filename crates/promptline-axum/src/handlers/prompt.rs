//! Prompt handlers - validation and response generation.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use promptline_core::{PromptRequest, ValidationOutcome};
use tracing::{Instrument, info, warn};

use super::request_span;
use crate::dto::{GenerateResponse, PromptBody, ValidateResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// Decode a prompt body. The `Content-Type` header is not consulted.
fn read_body(bytes: &Bytes, context: &str) -> Result<PromptBody, HttpError> {
    serde_json::from_slice(bytes).map_err(|err| {
        warn!(category = ?err.classify(), line = err.line(), column = err.column(), "Unreadable request body");
        HttpError::unreadable_body(context, &err)
    })
}

/// Validate, rewrite and safety-check a prompt.
pub async fn validate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ValidateResponse>, HttpError> {
    async move {
        let body = read_body(&body, "Failed to process the prompt")?;
        let request = PromptRequest::new(body.prompt.unwrap_or_default());
        info!(prompt_len = request.text.len(), "Validating prompt");

        match state.validation.validate(&request).await? {
            ValidationOutcome::Accepted(result) => Ok(Json(result.into())),
            ValidationOutcome::Rejected(rejection) => {
                info!(reason = %rejection.reason, "Prompt rejected");
                Err(rejection.into())
            }
        }
    }
    .instrument(request_span("validatePrompt"))
    .await
}

/// Generate a response for an already validated prompt.
pub async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, HttpError> {
    async move {
        let body = read_body(&body, "Failed to generate a response")?;
        let prompt = body.prompt.unwrap_or_default();
        info!(prompt_len = prompt.len(), "Generating response");

        let generated = state.generation.generate(&prompt).await?;
        Ok(Json(generated.into()))
    }
    .instrument(request_span("generateResponse"))
    .await
}
