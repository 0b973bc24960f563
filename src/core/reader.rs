//! Remote reader.
//!
//! Pulls existing items from one scope container into records. Enumeration
//! failures are caught at the container boundary, logged with the container
//! identity, and yield an empty sequence so sibling containers keep going.

use tracing::error;

use crate::core::record::{ItemKind, Record};
use crate::core::visibility::Visibility;
use crate::error::Result;
use crate::remote::Remote;

/// Read organization-level items of one kind.
///
/// When `fetch_values` is set for variables, each value costs one dedicated
/// request; a failed fetch leaves that record's value absent and the rest of
/// the batch continues. `fetch_values` is a no-op for secrets.
pub fn read_org(remote: &dyn Remote, kind: ItemKind, fetch_values: bool) -> Vec<Record> {
    match org_records(remote, kind, fetch_values) {
        Ok(records) => records,
        Err(e) => {
            error!(
                org = remote.org(),
                kind = kind.as_str(),
                error = %e,
                "failed to list organization items"
            );
            Vec::new()
        }
    }
}

fn org_records(remote: &dyn Remote, kind: ItemKind, fetch_values: bool) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for item in remote.org_items(kind)? {
        let visibility = Visibility::from_raw(item.visibility.as_deref().unwrap_or(""));

        let selected_repositories = if visibility == Visibility::Selected {
            match remote.selected_repositories(kind, &item.name) {
                Ok(names) => names,
                Err(e) => {
                    error!(
                        name = %item.name,
                        org = remote.org(),
                        error = %e,
                        "failed to list selected repositories"
                    );
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let record = match kind {
            ItemKind::Secrets => Record::OrgSecret {
                name: item.name,
                value: None,
                visibility,
                selected_repositories,
            },
            ItemKind::Variables => {
                let value = if fetch_values {
                    match remote.org_variable_value(&item.name) {
                        Ok(value) => Some(value),
                        Err(e) => {
                            error!(
                                name = %item.name,
                                org = remote.org(),
                                error = %e,
                                "failed to fetch variable value"
                            );
                            None
                        }
                    }
                } else {
                    None
                };
                Record::OrgVariable {
                    name: item.name,
                    value,
                    visibility,
                    selected_repositories,
                }
            }
        };
        records.push(record);
    }
    Ok(records)
}

/// Read repository-level items of one kind.
///
/// Variable values come straight off the listing when `fetch_values` is
/// set; no extra round-trips at this scope.
pub fn read_repo(
    remote: &dyn Remote,
    repo: &str,
    kind: ItemKind,
    fetch_values: bool,
) -> Vec<Record> {
    let items = match remote.repo_items(repo, kind) {
        Ok(items) => items,
        Err(e) => {
            error!(repo, kind = kind.as_str(), error = %e, "failed to list repository items");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .map(|item| match kind {
            ItemKind::Secrets => Record::RepoSecret {
                repository: repo.to_string(),
                name: item.name,
                value: None,
            },
            ItemKind::Variables => Record::RepoVariable {
                repository: repo.to_string(),
                name: item.name,
                value: if fetch_values { item.value } else { None },
            },
        })
        .collect()
}

/// Read items of one kind across every environment of a repository.
///
/// A repository without environments yields an empty sequence. A failing
/// environment is logged and skipped without aborting its siblings.
pub fn read_repo_envs(
    remote: &dyn Remote,
    repo: &str,
    kind: ItemKind,
    fetch_values: bool,
) -> Vec<Record> {
    let environments = match remote.environments(repo) {
        Ok(environments) => environments,
        Err(e) => {
            error!(repo, error = %e, "failed to list environments");
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for environment in environments {
        let items = match remote.env_items(repo, &environment, kind) {
            Ok(items) => items,
            Err(e) => {
                error!(
                    repo,
                    environment = %environment,
                    kind = kind.as_str(),
                    error = %e,
                    "failed to list environment items"
                );
                continue;
            }
        };
        for item in items {
            records.push(match kind {
                ItemKind::Secrets => Record::RepoEnvSecret {
                    repository: repo.to_string(),
                    environment: environment.clone(),
                    name: item.name,
                },
                ItemKind::Variables => Record::RepoEnvVariable {
                    repository: repo.to_string(),
                    environment: environment.clone(),
                    name: item.name,
                    value: if fetch_values { item.value } else { None },
                },
            });
        }
    }
    records
}
