//! Sync orchestration.
//!
//! Drives the remote reader across the requested scope breadth for export,
//! and the upsert engine across classified batches for import. Thin glue:
//! all policy lives in the components it calls.

use tracing::info;

use crate::core::reader;
use crate::core::record::{ItemKind, Record, Scope};
use crate::core::sheet::{self, Sheet};
use crate::core::upsert::{self, Outcome, Target};
use crate::error::Result;
use crate::remote::Remote;

/// Aggregated result of one import run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ImportSummary {
    fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Created => self.created += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.created + self.skipped + self.failed
    }
}

/// Read remote state across the requested scope breadth into export sheets.
pub fn export(remote: &dyn Remote, scope: Scope, fetch_values: bool) -> Result<Vec<Sheet>> {
    let mut sheets = Vec::new();

    if scope.includes_org() {
        for kind in [ItemKind::Variables, ItemKind::Secrets] {
            let records = reader::read_org(remote, kind, fetch_values);
            sheets.push(sheet::org_sheet(kind, fetch_values, &records));
        }
    }

    if scope.includes_repo() {
        let repos = remote.repositories()?;
        info!(total = repos.len(), "enumerating repositories");

        let mut repo_variables = Vec::new();
        let mut repo_secrets = Vec::new();
        let mut env_variables = Vec::new();
        let mut env_secrets = Vec::new();

        for (count, repo) in repos.iter().enumerate() {
            info!("{}: {}", count + 1, repo.name);
            repo_variables.extend(reader::read_repo(
                remote,
                &repo.name,
                ItemKind::Variables,
                fetch_values,
            ));
            repo_secrets.extend(reader::read_repo(
                remote,
                &repo.name,
                ItemKind::Secrets,
                fetch_values,
            ));
            env_variables.extend(reader::read_repo_envs(
                remote,
                &repo.name,
                ItemKind::Variables,
                fetch_values,
            ));
            env_secrets.extend(reader::read_repo_envs(
                remote,
                &repo.name,
                ItemKind::Secrets,
                fetch_values,
            ));
        }

        sheets.push(sheet::repo_sheet(ItemKind::Variables, fetch_values, &repo_variables));
        sheets.push(sheet::repo_sheet(ItemKind::Secrets, fetch_values, &repo_secrets));
        sheets.push(sheet::repo_env_sheet(
            ItemKind::Variables,
            fetch_values,
            &env_variables,
        ));
        sheets.push(sheet::repo_env_sheet(
            ItemKind::Secrets,
            fetch_values,
            &env_secrets,
        ));
    }

    Ok(sheets)
}

/// Upsert classified records across the requested scope breadth.
///
/// Organization batches go first (secrets, then variables), then each
/// repository gets the rows addressed to it by name.
pub fn import(remote: &dyn Remote, scope: Scope, records: &[Record]) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    if scope.includes_org() {
        for record in records
            .iter()
            .filter(|r| matches!(r, Record::OrgSecret { .. }))
        {
            summary.tally(upsert::upsert(remote, &Target::Org, record));
        }
        for record in records
            .iter()
            .filter(|r| matches!(r, Record::OrgVariable { .. }))
        {
            summary.tally(upsert::upsert(remote, &Target::Org, record));
        }
    }

    if scope.includes_repo() {
        for repo in remote.repositories()? {
            let target = Target::Repo(repo.clone());
            for record in records.iter().filter(|r| {
                matches!(r, Record::RepoSecret { .. })
                    && r.repository() == Some(repo.name.as_str())
            }) {
                summary.tally(upsert::upsert(remote, &target, record));
            }
            for record in records.iter().filter(|r| {
                matches!(r, Record::RepoVariable { .. })
                    && r.repository() == Some(repo.name.as_str())
            }) {
                summary.tally(upsert::upsert(remote, &target, record));
            }
        }
    }

    Ok(summary)
}
