//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use url::Url;

/// Command-line client for the Invoicr backend.
#[derive(Debug, Parser)]
#[command(name = "invoicr-client")]
#[command(about = "Command-line client for the Invoicr backend", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in with email and password and print the session.
    Login {
        /// Account email.
        #[arg(long)]
        email: String,
        /// Account password.
        #[arg(long, env = "INVOICR_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the settings row of the token's owner.
    Settings {
        /// Access token from a previous login.
        #[arg(long, env = "INVOICR_ACCESS_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// List the invoices of the token's owner.
    Invoices {
        /// Access token from a previous login.
        #[arg(long, env = "INVOICR_ACCESS_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Print the sitemap for a public base URL.
    Sitemap {
        /// Public site URL.
        #[arg(long, env = "APP_BASE_URL", default_value = "http://localhost:3000")]
        base_url: Url,
    },
}
