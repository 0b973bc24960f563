//! Update command - upload secrets and variables from a CSV file.

use tracing::info;

use crate::cli::output;
use crate::core::record::Scope;
use crate::core::{importer, sync};
use crate::error::Result;
use crate::remote::GitHubClient;

/// Upload a CSV batch into the organization.
///
/// The file is parsed and schema-checked before the first remote mutation;
/// schema problems abort the whole run.
pub fn execute(org: &str, token: &str, scope: Scope, csv_path: &str) -> Result<()> {
    let records = importer::read_file(csv_path, scope)?;

    let client = GitHubClient::new(token, org)?;
    client.verify()?;
    info!(org, scope = scope.as_str(), rows = records.len(), "updating data");

    let summary = sync::import(&client, scope, &records)?;

    output::success(&format!("processed {} records", summary.total()));
    output::kv("created", summary.created);
    output::kv("skipped", summary.skipped);
    if summary.failed > 0 {
        output::warn(&format!("{} records failed, see log output", summary.failed));
    }
    Ok(())
}
