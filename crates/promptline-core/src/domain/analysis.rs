//! Results returned by the analysis collaborators (grammar and safety).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Language code used when the grammar service could not detect one.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// A category is flagged when its severity is strictly greater than this.
pub const SEVERITY_THRESHOLD: i32 = 3;

/// A single issue reported by the grammar service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Service-defined issue code.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl Issue {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Output of the grammar/language analysis step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarResult {
    /// Issues in the order the service reported them.
    pub issues: Vec<Issue>,
    /// ISO 639-1 code, or [`UNKNOWN_LANGUAGE`].
    pub detected_language: String,
}

impl GrammarResult {
    pub fn new(issues: Vec<Issue>, detected_language: impl Into<String>) -> Self {
        Self {
            issues,
            detected_language: detected_language.into(),
        }
    }

    /// Neutral result used when the grammar service fails.
    #[must_use]
    pub fn neutral() -> Self {
        Self::new(Vec::new(), UNKNOWN_LANGUAGE)
    }

    /// Whether a concrete language was detected.
    #[must_use]
    pub fn has_language(&self) -> bool {
        !self.detected_language.is_empty() && self.detected_language != UNKNOWN_LANGUAGE
    }
}

impl Default for GrammarResult {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Verdict of the content-safety classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyVerdict {
    /// True iff any category severity exceeds [`SEVERITY_THRESHOLD`].
    pub flagged: bool,
    /// Severity per category name.
    pub category_severities: BTreeMap<String, i32>,
}

impl SafetyVerdict {
    /// Build a verdict from raw category severities.
    #[must_use]
    pub fn from_severities(category_severities: BTreeMap<String, i32>) -> Self {
        let flagged = category_severities
            .values()
            .any(|&severity| severity > SEVERITY_THRESHOLD);
        Self {
            flagged,
            category_severities,
        }
    }

    /// A clean verdict with no categories.
    #[must_use]
    pub fn clear() -> Self {
        Self::default()
    }

    /// A flagged verdict with no category detail, used when the check
    /// itself could not be completed.
    #[must_use]
    pub fn unverified() -> Self {
        Self {
            flagged: true,
            category_severities: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn severities(pairs: &[(&str, i32)]) -> BTreeMap<String, i32> {
        pairs
            .iter()
            .map(|(name, severity)| ((*name).to_string(), *severity))
            .collect()
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let verdict = SafetyVerdict::from_severities(severities(&[("Hate", 3), ("Violence", 0)]));
        assert!(!verdict.flagged);

        let verdict = SafetyVerdict::from_severities(severities(&[("Hate", 0), ("Violence", 4)]));
        assert!(verdict.flagged);
        assert_eq!(verdict.category_severities["Violence"], 4);
    }

    #[test]
    fn test_empty_severities_are_not_flagged() {
        assert!(!SafetyVerdict::from_severities(BTreeMap::new()).flagged);
        assert!(SafetyVerdict::unverified().flagged);
    }

    #[test]
    fn test_neutral_grammar_result() {
        let neutral = GrammarResult::neutral();
        assert!(neutral.issues.is_empty());
        assert_eq!(neutral.detected_language, "unknown");
        assert!(!neutral.has_language());
        assert!(GrammarResult::new(vec![], "en").has_language());
    }

    #[test]
    fn test_verdict_serialization() {
        let verdict = SafetyVerdict::from_severities(severities(&[("SelfHarm", 6)]));
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["flagged"], true);
        assert_eq!(json["categorySeverities"]["SelfHarm"], 6);
    }
}
