//! Available subcommands.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Listen address (overrides PROMPTLINE_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Listen port (overrides PROMPTLINE_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate a prompt and print the corrected prompt and suggestions
    Validate {
        /// Prompt text
        prompt: String,
    },

    /// Generate a response for a prompt
    Generate {
        /// Prompt text (normally the corrected prompt from `validate`)
        prompt: String,
    },
}
