//! Remote store boundary.
//!
//! The `Remote` trait is the seam between the reconciliation engine and the
//! GitHub REST API. The engine only ever talks to this trait, so tests can
//! substitute an in-memory double and the production client stays an
//! explicitly passed handle rather than process-global state.

pub mod github;
#[cfg(test)]
pub mod mock;
pub mod seal;
pub mod types;

pub use github::GitHubClient;

use crate::core::record::ItemKind;
use crate::core::visibility::Visibility;
use crate::error::Result;

/// A repository name resolved to a concrete remote reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoHandle {
    pub id: u64,
    pub name: String,
}

/// One item as listed by the remote store.
///
/// `visibility` is populated at organization scope only; `value` only for
/// repository and environment variables, whose listings carry it inline.
#[derive(Debug, Clone, Default)]
pub struct ListedItem {
    pub name: String,
    pub visibility: Option<String>,
    pub value: Option<String>,
}

/// Capabilities of the remote configuration store, bound to one
/// organization.
pub trait Remote {
    /// The organization this handle is bound to.
    fn org(&self) -> &str;

    /// List organization-level items of one kind.
    fn org_items(&self, kind: ItemKind) -> Result<Vec<ListedItem>>;

    /// List the repository names an org item with `selected` visibility is
    /// shared with.
    fn selected_repositories(&self, kind: ItemKind, name: &str) -> Result<Vec<String>>;

    /// Fetch one organization variable's value by name. Values are not
    /// present on the org-level listing and cost one request each.
    fn org_variable_value(&self, name: &str) -> Result<String>;

    /// List every repository of the organization.
    fn repositories(&self) -> Result<Vec<RepoHandle>>;

    /// List repository-level items of one kind.
    fn repo_items(&self, repo: &str, kind: ItemKind) -> Result<Vec<ListedItem>>;

    /// List a repository's deployment environments.
    fn environments(&self, repo: &str) -> Result<Vec<String>>;

    /// List environment-level items of one kind.
    fn env_items(&self, repo: &str, environment: &str, kind: ItemKind)
        -> Result<Vec<ListedItem>>;

    /// Look up a single org item by name. `Ok(None)` means not found;
    /// any `Err` is a real lookup failure.
    fn find_org_item(&self, kind: ItemKind, name: &str) -> Result<Option<ListedItem>>;

    /// Look up a single repository item by name. `Ok(None)` means not found.
    fn find_repo_item(&self, repo: &str, kind: ItemKind, name: &str)
        -> Result<Option<ListedItem>>;

    /// Resolve a repository name to a handle, failing distinguishably with
    /// `Error::RepoNotFound` when it does not exist.
    fn resolve_repository(&self, name: &str) -> Result<RepoHandle>;

    /// Create an organization-level item. `selected` is consulted only when
    /// `visibility` is `Selected`.
    fn create_org_item(
        &self,
        kind: ItemKind,
        name: &str,
        value: &str,
        visibility: Visibility,
        selected: &[RepoHandle],
    ) -> Result<()>;

    /// Create a repository-level item. Visibility does not apply below
    /// organization scope.
    fn create_repo_item(&self, repo: &str, kind: ItemKind, name: &str, value: &str) -> Result<()>;
}
