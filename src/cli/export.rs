//! Fetch command - export remote state into CSV sheets.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::output;
use crate::core::record::Scope;
use crate::core::sheet::Sheet;
use crate::core::sync;
use crate::error::Result;
use crate::remote::GitHubClient;

/// Fetch secrets and variables into one CSV file per sheet.
pub fn execute(
    org: &str,
    token: &str,
    fetch_values: bool,
    scope: Scope,
    output_dir: Option<&str>,
) -> Result<()> {
    let client = GitHubClient::new(token, org)?;
    client.verify()?;
    info!(org, scope = scope.as_str(), "fetching data");

    let sheets = sync::export(&client, scope, fetch_values)?;

    let dir = resolve_output_dir(org, output_dir);
    std::fs::create_dir_all(&dir)?;
    for sheet in &sheets {
        write_sheet(&dir, sheet)?;
    }

    let total_rows: usize = sheets.iter().map(|s| s.rows.len()).sum();
    output::success(&format!(
        "exported {} sheets ({} rows)",
        sheets.len(),
        total_rows
    ));
    println!("  output: {}", output::path(&dir.display().to_string()));
    Ok(())
}

/// Default to `<org>_output`, and never overwrite an earlier export: an
/// existing directory gets a timestamp suffix instead.
fn resolve_output_dir(org: &str, explicit: Option<&str>) -> PathBuf {
    let base = match explicit {
        Some(dir) => dir.to_string(),
        None => format!("{org}_output"),
    };
    let path = PathBuf::from(&base);
    if !path.exists() {
        return path;
    }
    let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    PathBuf::from(format!("{base}_{timestamp}"))
}

fn write_sheet(dir: &Path, sheet: &Sheet) -> Result<()> {
    let path = dir.join(format!("{}.csv", sheet.name));
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(&sheet.columns)?;
    for row in &sheet.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
