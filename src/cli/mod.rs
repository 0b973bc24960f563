//! Command-line interface.

pub mod completions;
pub mod export;
pub mod import;
pub mod output;

use clap::{Parser, Subcommand};

use crate::core::record::Scope;

/// Ghvars - sync GitHub Actions secrets and variables between an
/// organization and CSV sheets.
#[derive(Parser)]
#[command(
    name = "ghvars",
    about = "Sync GitHub Actions secrets and variables between an organization and CSV sheets",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Fetch secrets and variables into CSV sheets
    Fetch {
        /// GitHub organization name
        #[arg(long)]
        org: String,

        /// GitHub personal access token
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        /// Also fetch variable values (one extra request per org variable)
        #[arg(long)]
        fetch_values: bool,

        /// Scope to fetch
        #[arg(long, value_enum, default_value_t = Scope::Both)]
        scope: Scope,

        /// Output directory for the sheet files (default: <org>_output)
        #[arg(long)]
        output: Option<String>,
    },

    /// Upload secrets and variables from a CSV file
    Update {
        /// GitHub organization name
        #[arg(long)]
        org: String,

        /// GitHub personal access token
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        /// Scope to update
        #[arg(long, value_enum, default_value_t = Scope::Both)]
        scope: Scope,

        /// Path to the CSV file containing secrets and variables
        #[arg(long)]
        csv: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    match command {
        Command::Fetch {
            org,
            token,
            fetch_values,
            scope,
            output,
        } => export::execute(&org, &token, fetch_values, scope, output.as_deref()),
        Command::Update {
            org,
            token,
            scope,
            csv,
        } => import::execute(&org, &token, scope, &csv),
        Command::Completions { shell } => completions::execute(shell),
    }
}
