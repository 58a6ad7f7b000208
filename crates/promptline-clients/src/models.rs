//! Internal wire types for the collaborator APIs.
//!
//! These types are internal to `promptline-clients`. Consumers see only the
//! domain types from `promptline-core`.

use serde::{Deserialize, Serialize};

// ============================================================================
// Content Safety
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTextRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTextResponse {
    #[serde(default)]
    pub categories_analysis: Vec<CategoryAnalysis>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryAnalysis {
    pub category: String,
    /// Absent when the service skipped the category.
    #[serde(default)]
    pub severity: Option<i32>,
}

// ============================================================================
// Language detection
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRequest<'a> {
    pub kind: &'static str,
    pub analysis_input: AnalysisInput<'a>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisInput<'a> {
    pub documents: Vec<InputDocument<'a>>,
}

#[derive(Debug, Serialize)]
pub struct InputDocument<'a> {
    pub id: &'static str,
    pub text: &'a str,
}

impl<'a> LanguageRequest<'a> {
    pub fn detection(text: &'a str) -> Self {
        Self {
            kind: "LanguageDetection",
            analysis_input: AnalysisInput {
                documents: vec![InputDocument { id: "1", text }],
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LanguageResponse {
    pub results: LanguageResults,
}

#[derive(Debug, Deserialize)]
pub struct LanguageResults {
    #[serde(default)]
    pub documents: Vec<LanguageDocument>,
    #[serde(default)]
    pub errors: Vec<DocumentError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDocument {
    pub detected_language: DetectedLanguage,
    #[serde(default)]
    pub warnings: Vec<ServiceWarning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedLanguage {
    /// ISO 639-1 code, or `(Unknown)`.
    pub iso6391_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ServiceWarning {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct DocumentError {
    pub error: ServiceWarning,
}

// ============================================================================
// Chat completions (Azure OpenAI and OpenAI share the shape)
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    /// Only sent to OpenAI; Azure routes by deployment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'a str>,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}
