//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Prompt validation and generation service.
#[derive(Parser)]
#[command(name = "promptline")]
#[command(about = "Validate, rewrite and answer prompts through Azure AI services")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output (ignored when RUST_LOG is set)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
