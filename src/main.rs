//! Ghvars - sync GitHub Actions secrets and variables between an
//! organization and CSV sheets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghvars::cli::output;
use ghvars::cli::{execute, Cli};
use ghvars::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GHVARS_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ghvars=debug")
        } else {
            EnvFilter::new("ghvars=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Auth(_) => Some("check the token passed via --token or GITHUB_TOKEN"),
            Error::OrgNotFound(_) => {
                Some("check the organization name and the token's access to it")
            }
            Error::NotCsv(_) => Some("pass a .csv file via --csv"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
