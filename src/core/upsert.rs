//! Upsert engine.
//!
//! Create-if-absent, never-overwrite. Each record is probed by name first;
//! an existing item whose name matches case-insensitively is skipped, never
//! updated. The probe-then-create pair is not atomic against concurrent
//! external mutation; this tool runs single-threaded against a
//! human-operated store and accepts that race.

use std::fmt;

use tracing::{error, info, warn};

use crate::core::record::{ItemKind, Record};
use crate::core::visibility::{self, Visibility};
use crate::error::{Error, Result};
use crate::remote::{Remote, RepoHandle};

/// The container an upsert is aimed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Org,
    Repo(RepoHandle),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Org => f.write_str("organization"),
            Target::Repo(repo) => write!(f, "repository {}", repo.name),
        }
    }
}

/// Per-record upsert result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Skipped,
    Failed(String),
}

/// Upsert one record into the target container.
///
/// Failures stay confined to this record; a `Failed` outcome never stops
/// the caller from processing the rest of the batch.
pub fn upsert(remote: &dyn Remote, target: &Target, record: &Record) -> Outcome {
    let kind = record.kind();
    let name = record.name();

    let existing = match probe(remote, target, kind, name) {
        Ok(existing) => existing,
        Err(e) => {
            error!(name, target = %target, error = %e, "existence probe failed");
            return Outcome::Failed(e.to_string());
        }
    };

    if let Some(existing_name) = existing {
        if existing_name.eq_ignore_ascii_case(name) {
            warn!(
                name,
                target = %target,
                "{} already exists, skipping",
                kind.singular()
            );
            return Outcome::Skipped;
        }
    }

    match create(remote, target, record) {
        Ok(()) => {
            info!(name, target = %target, "uploaded {}", kind.singular());
            Outcome::Created
        }
        Err(e) => {
            error!(
                name,
                target = %target,
                error = %e,
                "failed to upload {}",
                kind.singular()
            );
            Outcome::Failed(e.to_string())
        }
    }
}

/// Look for an existing same-named item. `Ok(None)` means the name is free.
fn probe(
    remote: &dyn Remote,
    target: &Target,
    kind: ItemKind,
    name: &str,
) -> Result<Option<String>> {
    let item = match target {
        Target::Org => remote.find_org_item(kind, name)?,
        Target::Repo(repo) => remote.find_repo_item(&repo.name, kind, name)?,
    };
    Ok(item.map(|item| item.name))
}

fn create(remote: &dyn Remote, target: &Target, record: &Record) -> Result<()> {
    let value = record.value().unwrap_or_default();
    match (target, record) {
        (
            Target::Org,
            Record::OrgSecret {
                name,
                visibility,
                selected_repositories,
                ..
            }
            | Record::OrgVariable {
                name,
                visibility,
                selected_repositories,
                ..
            },
        ) => {
            let handles = if *visibility == Visibility::Selected {
                visibility::resolve_selected(selected_repositories, |repo_name| {
                    remote.resolve_repository(repo_name)
                })
            } else {
                Vec::new()
            };
            remote.create_org_item(record.kind(), name, value, *visibility, &handles)
        }
        (
            Target::Repo(repo),
            Record::RepoSecret { name, .. } | Record::RepoVariable { name, .. },
        ) => remote.create_repo_item(&repo.name, record.kind(), name, value),
        _ => Err(Error::ScopeMismatch),
    }
}
