//! `generate` - run the response pipeline once.

use anyhow::Result;
use promptline_axum::dto::GenerateResponse;
use promptline_axum::{AppConfig, bootstrap};
use tracing::warn;

pub async fn execute(config: &AppConfig, prompt: &str) -> Result<()> {
    let ctx = bootstrap(config)?;
    let generated = ctx.generation.generate(prompt).await?;
    if generated.degraded {
        warn!("Completion failed; printing the fallback response");
    }

    let body = GenerateResponse::from(generated);
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
