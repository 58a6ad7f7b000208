//! Request and result types of the two pipelines.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An inbound prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub text: String,
}

impl PromptRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Whether the prompt has any non-whitespace content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Successful output of prompt validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Rewritten prompt, or the original text when rewriting failed.
    pub corrected_prompt: String,
    /// Alternative phrasings of the original prompt; empty when generation failed.
    pub suggestions: Vec<String>,
}

/// A prompt rejected by the safety check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRejection {
    pub reason: String,
    pub category_severities: BTreeMap<String, i32>,
}

/// Outcome of prompt validation. Rejection is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted(ValidationResult),
    Rejected(SafetyRejection),
}

impl ValidationOutcome {
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Output of response generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedResponse {
    pub text: String,
    /// True when `text` is the fixed fallback message.
    #[serde(skip)]
    pub degraded: bool,
}

impl GeneratedResponse {
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            degraded: false,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            degraded: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_prompt_detection() {
        assert!(PromptRequest::new("").is_blank());
        assert!(PromptRequest::new("  \n\t").is_blank());
        assert!(!PromptRequest::new(" hi ").is_blank());
    }

    #[test]
    fn test_validation_result_wire_shape() {
        let result = ValidationResult {
            corrected_prompt: "What is the weather?".to_string(),
            suggestions: vec!["Forecast?".to_string()],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["correctedPrompt"], "What is the weather?");
        assert_eq!(json["suggestions"][0], "Forecast?");
    }

    #[test]
    fn test_generated_response_hides_degraded_flag() {
        let json = serde_json::to_value(GeneratedResponse::fallback("sorry")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "sorry" }));
    }
}
