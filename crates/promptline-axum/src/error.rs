//! Axum-specific error types and mappings.
//!
//! Maps pipeline errors, safety rejections and unreadable bodies to HTTP
//! status codes and `{"error", "details"?}` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use promptline_core::{PipelineError, SafetyRejection};
use serde::Serialize;
use serde_json::error::Category;
use serde_json::{Value, json};
use thiserror::Error;

/// `error` of a 400 for JSON that is not a `{"prompt": string}` object.
pub const INVALID_BODY: &str = "request body must be a JSON object with a string prompt";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input or rejected content).
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        details: Option<Value>,
    },

    /// Internal server error.
    #[error("Internal error: {message}")]
    Internal { message: String, details: String },
}

impl HttpError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            details: None,
        }
    }

    /// A request body that could not be decoded into a prompt body.
    ///
    /// JSON of the wrong shape (`{"prompt": 42}`, a bare string) is a 400. A body
    /// that is not JSON at all, or is empty, is a 500 carrying `context`.
    pub fn unreadable_body(context: &str, err: &serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::BadRequest {
                message: INVALID_BODY.to_string(),
                details: Some(Value::String(err.to_string())),
            },
            Category::Io | Category::Syntax | Category::Eof => Self::Internal {
                message: context.to_string(),
                details: err.to_string(),
            },
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::BadRequest { message, details } => ErrorBody {
                error: message,
                details,
            },
            Self::Internal { message, details } => ErrorBody {
                error: message,
                details: Some(Value::String(details)),
            },
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<PipelineError> for HttpError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::InvalidInput(msg) => Self::bad_request(msg),
        }
    }
}

impl From<SafetyRejection> for HttpError {
    fn from(rejection: SafetyRejection) -> Self {
        Self::BadRequest {
            details: Some(json!({
                "reason": rejection.reason,
                "categorySeverities": rejection.category_severities,
            })),
            message: rejection.reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_pipeline_error_is_bad_request() {
        let err = HttpError::from(PipelineError::InvalidInput("prompt is required".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Bad request: prompt is required");
    }

    #[test]
    fn test_rejection_carries_severities() {
        let rejection = SafetyRejection {
            reason: "Content was flagged as inappropriate".to_string(),
            category_severities: BTreeMap::from([("Violence".to_string(), 6)]),
        };

        match HttpError::from(rejection) {
            HttpError::BadRequest { message, details } => {
                assert_eq!(message, "Content was flagged as inappropriate");
                let details = details.unwrap();
                assert_eq!(details["categorySeverities"]["Violence"], 6);
                assert_eq!(details["reason"], "Content was flagged as inappropriate");
            }
            other @ HttpError::Internal { .. } => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_wrong_shaped_json_is_bad_request() {
        for body in [r#"{"prompt": 42}"#, "true", r#""hello""#] {
            let err = serde_json::from_slice::<crate::dto::PromptBody>(body.as_bytes()).unwrap_err();
            let err = HttpError::unreadable_body("Failed to process the prompt", &err);
            assert_eq!(err.status(), StatusCode::BAD_REQUEST, "body {body}");
        }
    }

    #[test]
    fn test_unparseable_body_is_internal() {
        for body in ["{not json", "", r#"{"prompt": "unterminated"#] {
            let err = serde_json::from_slice::<crate::dto::PromptBody>(body.as_bytes()).unwrap_err();
            match HttpError::unreadable_body("Failed to process the prompt", &err) {
                HttpError::Internal { message, details } => {
                    assert_eq!(message, "Failed to process the prompt");
                    assert!(!details.is_empty());
                }
                other @ HttpError::BadRequest { .. } => panic!("unexpected {other:?} for {body:?}"),
            }
        }
    }

    #[test]
    fn test_status_codes() {
        let response = HttpError::bad_request("nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = HttpError::Internal {
            message: "boom".to_string(),
            details: "stack".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
