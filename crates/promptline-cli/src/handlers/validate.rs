//! `validate` - run the validation pipeline once.

use anyhow::Result;
use promptline_axum::dto::ValidateResponse;
use promptline_axum::{AppConfig, bootstrap};
use promptline_core::{PromptRequest, ValidationOutcome};
use serde_json::{Value, json};

/// JSON printed for an outcome, matching the HTTP bodies.
pub fn render(outcome: ValidationOutcome) -> Result<Value> {
    Ok(match outcome {
        ValidationOutcome::Accepted(result) => serde_json::to_value(ValidateResponse::from(result))?,
        ValidationOutcome::Rejected(rejection) => json!({
            "error": rejection.reason,
            "details": {
                "reason": rejection.reason,
                "categorySeverities": rejection.category_severities,
            },
        }),
    })
}

/// Returns whether the prompt was accepted.
pub async fn execute(config: &AppConfig, prompt: &str) -> Result<bool> {
    let ctx = bootstrap(config)?;
    let outcome = ctx.validation.validate(&PromptRequest::new(prompt)).await?;
    let accepted = !outcome.is_rejected();

    println!("{}", serde_json::to_string_pretty(&render(outcome)?)?);
    Ok(accepted)
}
