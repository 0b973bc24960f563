//! Record model.
//!
//! A `Record` is the uniform in-memory shape of one secret or variable
//! entry, at any nesting level. One variant per scope keeps illegal field
//! combinations unrepresentable: only org-scope entries carry visibility,
//! only env-scope entries carry an environment name.

use std::fmt;

use crate::core::visibility::Visibility;

/// Breadth selector for export and import runs.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Organization-level entries only
    Org,
    /// Repository-level entries only
    Repo,
    /// Both organization and repository level
    Both,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Org => "org",
            Scope::Repo => "repo",
            Scope::Both => "both",
        }
    }

    pub fn includes_org(&self) -> bool {
        matches!(self, Scope::Org | Scope::Both)
    }

    pub fn includes_repo(&self) -> bool {
        matches!(self, Scope::Repo | Scope::Both)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two item families exposed by the remote store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKind {
    Secrets,
    Variables,
}

impl ItemKind {
    /// Plural form, as used in API paths and sheet names.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Secrets => "secrets",
            ItemKind::Variables => "variables",
        }
    }

    /// Singular form, for log messages.
    pub fn singular(&self) -> &'static str {
        match self {
            ItemKind::Secrets => "secret",
            ItemKind::Variables => "variable",
        }
    }
}

/// One configuration entry, shaped by its scope.
///
/// `value` is always present for variables, and for secrets only on import;
/// the remote store never exposes secret values on export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    OrgSecret {
        name: String,
        value: Option<String>,
        visibility: Visibility,
        selected_repositories: Vec<String>,
    },
    OrgVariable {
        name: String,
        value: Option<String>,
        visibility: Visibility,
        selected_repositories: Vec<String>,
    },
    RepoSecret {
        repository: String,
        name: String,
        value: Option<String>,
    },
    RepoVariable {
        repository: String,
        name: String,
        value: Option<String>,
    },
    RepoEnvSecret {
        repository: String,
        environment: String,
        name: String,
    },
    RepoEnvVariable {
        repository: String,
        environment: String,
        name: String,
        value: Option<String>,
    },
}

impl Record {
    /// The entry name, case-sensitive as stored remotely.
    pub fn name(&self) -> &str {
        match self {
            Record::OrgSecret { name, .. }
            | Record::OrgVariable { name, .. }
            | Record::RepoSecret { name, .. }
            | Record::RepoVariable { name, .. }
            | Record::RepoEnvSecret { name, .. }
            | Record::RepoEnvVariable { name, .. } => name,
        }
    }

    /// The entry value, when one is carried.
    pub fn value(&self) -> Option<&str> {
        match self {
            Record::OrgSecret { value, .. }
            | Record::OrgVariable { value, .. }
            | Record::RepoSecret { value, .. }
            | Record::RepoVariable { value, .. }
            | Record::RepoEnvVariable { value, .. } => value.as_deref(),
            Record::RepoEnvSecret { .. } => None,
        }
    }

    /// Which item family this record belongs to.
    pub fn kind(&self) -> ItemKind {
        match self {
            Record::OrgSecret { .. }
            | Record::RepoSecret { .. }
            | Record::RepoEnvSecret { .. } => ItemKind::Secrets,
            Record::OrgVariable { .. }
            | Record::RepoVariable { .. }
            | Record::RepoEnvVariable { .. } => ItemKind::Variables,
        }
    }

    /// The owning repository name, for repo- and env-scope records.
    pub fn repository(&self) -> Option<&str> {
        match self {
            Record::RepoSecret { repository, .. }
            | Record::RepoVariable { repository, .. }
            | Record::RepoEnvSecret { repository, .. }
            | Record::RepoEnvVariable { repository, .. } => Some(repository),
            Record::OrgSecret { .. } | Record::OrgVariable { .. } => None,
        }
    }
}
