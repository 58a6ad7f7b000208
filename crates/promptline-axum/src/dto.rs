//! Request and response bodies for the HTTP routes.

use promptline_core::{GeneratedResponse, MetricsSnapshot, ValidationResult};
use serde::{Deserialize, Serialize};

/// Body of both prompt routes.
///
/// `prompt` is optional here so a missing field is a 400, not a body
/// rejection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PromptBody {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// `200` body of `POST /validatePrompt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub corrected_prompt: String,
    pub suggestions: Vec<String>,
}

impl From<ValidationResult> for ValidateResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            corrected_prompt: result.corrected_prompt,
            suggestions: result.suggestions,
        }
    }
}

/// `200` body of `POST /generateResponse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

impl From<GeneratedResponse> for GenerateResponse {
    fn from(generated: GeneratedResponse) -> Self {
        Self {
            response: generated.text,
        }
    }
}

/// `200` body of `GET /monitoring`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringResponse {
    pub metrics: MetricsDto,
}

/// Display-formatted metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsDto {
    /// e.g. `"120ms"`
    pub latency: String,
    /// e.g. `"95.0%"`
    pub accuracy: String,
    pub issues_detected: String,
}

impl From<MetricsSnapshot> for MetricsDto {
    fn from(snapshot: MetricsSnapshot) -> Self {
        Self {
            latency: format!("{:.0}ms", snapshot.latency_ms),
            accuracy: format!("{:.1}%", snapshot.accuracy_pct),
            issues_detected: snapshot.issues_detected.to_string(),
        }
    }
}

impl From<MetricsSnapshot> for MonitoringResponse {
    fn from(snapshot: MetricsSnapshot) -> Self {
        Self {
            metrics: snapshot.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metrics_formatting() {
        let snapshot = MetricsSnapshot {
            latency_ms: 123.6,
            accuracy_pct: 87.5,
            issues_detected: 4,
        };

        let body = serde_json::to_value(MonitoringResponse::from(snapshot)).unwrap();
        assert_eq!(
            body,
            json!({"metrics": {"latency": "124ms", "accuracy": "87.5%", "issuesDetected": "4"}})
        );
    }

    #[test]
    fn test_zeroed_metrics() {
        let dto = MetricsDto::from(MetricsSnapshot::zeroed());
        assert_eq!(dto.latency, "0ms");
        assert_eq!(dto.accuracy, "0.0%");
        assert_eq!(dto.issues_detected, "0");
    }

    #[test]
    fn test_prompt_body_accepts_missing_field() {
        let body: PromptBody = serde_json::from_value(json!({})).unwrap();
        assert!(body.prompt.is_none());
    }

    #[test]
    fn test_validate_response_is_camel_case() {
        let body = serde_json::to_value(ValidateResponse {
            corrected_prompt: "What is the weather?".to_string(),
            suggestions: vec![],
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"correctedPrompt": "What is the weather?", "suggestions": []})
        );
    }
}
