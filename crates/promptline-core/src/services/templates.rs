//! Instruction templates for the completion-backed steps.

use crate::domain::GrammarResult;

/// Delimiter the suggestion step asks the model to place between phrasings.
pub const SUGGESTION_DELIMITER: char = '|';

/// Number of alternative phrasings requested.
pub const SUGGESTION_COUNT: usize = 2;

/// Build the rewrite instruction for the raw prompt.
///
/// Grammar analysis only sharpens the instruction; the text itself is always
/// embedded verbatim.
pub fn rewrite_prompt(text: &str, grammar: &GrammarResult) -> String {
    let mut prompt = String::from(
        "Improve the clarity and grammar of the following text without changing its meaning. \
         Return only the improved text, with no explanations or quotes.",
    );

    if grammar.has_language() {
        prompt.push_str(&format!(
            "\nThe text is written in language '{}'. Keep it in that language.",
            grammar.detected_language
        ));
    }

    if !grammar.issues.is_empty() {
        prompt.push_str("\nReported issues:");
        for issue in &grammar.issues {
            prompt.push_str(&format!("\n- {}", issue.message));
        }
    }

    prompt.push_str("\n\nText: ");
    prompt.push_str(text);
    prompt
}

/// Build the suggestion instruction for the original prompt.
pub fn suggestions_prompt(text: &str) -> String {
    format!(
        "Suggest exactly {SUGGESTION_COUNT} alternative ways to phrase the following prompt. \
         Separate the alternatives with '{SUGGESTION_DELIMITER}' and return nothing else.\n\n\
         Prompt: {text}"
    )
}

/// Split a suggestion completion into trimmed, non-empty phrasings.
pub fn parse_suggestions(raw: &str) -> Vec<String> {
    raw.split(SUGGESTION_DELIMITER)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(String::from)
        .collect()
}
