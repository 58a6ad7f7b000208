//! CLI entry point.
//!
//! Reads the configuration once, then dispatches to a handler. All service
//! wiring happens in the axum crate's bootstrap.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use promptline_axum::AppConfig;
use promptline_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = AppConfig::from_env()?;

    match command {
        Commands::Serve { host, port } => {
            handlers::serve::execute(config, host, port).await?;
        }
        Commands::Validate { prompt } => {
            if !handlers::validate::execute(&config, &prompt).await? {
                return Ok(ExitCode::from(2));
            }
        }
        Commands::Generate { prompt } => {
            handlers::generate::execute(&config, &prompt).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
