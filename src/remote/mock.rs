//! In-memory `Remote` double for unit tests.
//!
//! Emulates the store's observable behavior: listings per container,
//! case-insensitive single-item lookup, and creations that become visible
//! to later probes. Failure knobs let tests exercise the isolation paths.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::core::record::ItemKind;
use crate::core::visibility::Visibility;
use crate::error::{Error, Result};
use crate::remote::{ListedItem, Remote, RepoHandle};

/// Container coordinate inside the mock store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Container {
    Org,
    Repo(String),
    Env(String, String),
}

/// One creation observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    /// "organization" or the repository name.
    pub container: String,
    pub kind: ItemKind,
    pub name: String,
    pub value: String,
    pub visibility: Option<Visibility>,
    pub selected_ids: Vec<u64>,
}

#[derive(Default)]
pub struct MockRemote {
    org_name: String,
    pub repos: Vec<RepoHandle>,
    pub environments: BTreeMap<String, Vec<String>>,
    pub variable_values: BTreeMap<String, String>,
    pub selected_names: BTreeMap<String, Vec<String>>,
    items: RefCell<BTreeMap<(Container, ItemKind), Vec<ListedItem>>>,
    pub created: RefCell<Vec<Created>>,
    pub fail_org_listing: bool,
    pub fail_repo_listing: BTreeSet<String>,
    pub fail_value_fetch: BTreeSet<String>,
    pub fail_find: BTreeSet<String>,
}

impl MockRemote {
    pub fn new(org: &str) -> Self {
        Self {
            org_name: org.to_string(),
            ..Default::default()
        }
    }

    pub fn with_repo(mut self, id: u64, name: &str) -> Self {
        self.repos.push(RepoHandle {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn add_org_item(&self, kind: ItemKind, item: ListedItem) {
        self.items
            .borrow_mut()
            .entry((Container::Org, kind))
            .or_default()
            .push(item);
    }

    pub fn add_repo_item(&self, repo: &str, kind: ItemKind, item: ListedItem) {
        self.items
            .borrow_mut()
            .entry((Container::Repo(repo.to_string()), kind))
            .or_default()
            .push(item);
    }

    pub fn add_env_item(&self, repo: &str, environment: &str, kind: ItemKind, item: ListedItem) {
        self.items
            .borrow_mut()
            .entry((
                Container::Env(repo.to_string(), environment.to_string()),
                kind,
            ))
            .or_default()
            .push(item);
    }

    pub fn created_items(&self) -> Vec<Created> {
        self.created.borrow().clone()
    }

    fn listing(&self, container: Container, kind: ItemKind) -> Vec<ListedItem> {
        self.items
            .borrow()
            .get(&(container, kind))
            .cloned()
            .unwrap_or_default()
    }

    fn find_in(&self, container: Container, kind: ItemKind, name: &str) -> Option<ListedItem> {
        // The real store looks item names up case-insensitively.
        self.listing(container, kind)
            .into_iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    fn injected_failure(&self, context: &str) -> Error {
        Error::Api {
            status: 500,
            message: format!("injected failure: {context}"),
        }
    }
}

impl Remote for MockRemote {
    fn org(&self) -> &str {
        &self.org_name
    }

    fn org_items(&self, kind: ItemKind) -> Result<Vec<ListedItem>> {
        if self.fail_org_listing {
            return Err(self.injected_failure("org listing"));
        }
        Ok(self.listing(Container::Org, kind))
    }

    fn selected_repositories(&self, _kind: ItemKind, name: &str) -> Result<Vec<String>> {
        Ok(self.selected_names.get(name).cloned().unwrap_or_default())
    }

    fn org_variable_value(&self, name: &str) -> Result<String> {
        if self.fail_value_fetch.contains(name) {
            return Err(self.injected_failure("value fetch"));
        }
        self.variable_values
            .get(name)
            .cloned()
            .ok_or_else(|| Error::Api {
                status: 404,
                message: format!("no value for {name}"),
            })
    }

    fn repositories(&self) -> Result<Vec<RepoHandle>> {
        Ok(self.repos.clone())
    }

    fn repo_items(&self, repo: &str, kind: ItemKind) -> Result<Vec<ListedItem>> {
        if self.fail_repo_listing.contains(repo) {
            return Err(self.injected_failure("repo listing"));
        }
        Ok(self.listing(Container::Repo(repo.to_string()), kind))
    }

    fn environments(&self, repo: &str) -> Result<Vec<String>> {
        Ok(self.environments.get(repo).cloned().unwrap_or_default())
    }

    fn env_items(
        &self,
        repo: &str,
        environment: &str,
        kind: ItemKind,
    ) -> Result<Vec<ListedItem>> {
        Ok(self.listing(
            Container::Env(repo.to_string(), environment.to_string()),
            kind,
        ))
    }

    fn find_org_item(&self, kind: ItemKind, name: &str) -> Result<Option<ListedItem>> {
        if self.fail_find.contains(name) {
            return Err(self.injected_failure("find"));
        }
        Ok(self.find_in(Container::Org, kind, name))
    }

    fn find_repo_item(
        &self,
        repo: &str,
        kind: ItemKind,
        name: &str,
    ) -> Result<Option<ListedItem>> {
        if self.fail_find.contains(name) {
            return Err(self.injected_failure("find"));
        }
        Ok(self.find_in(Container::Repo(repo.to_string()), kind, name))
    }

    fn resolve_repository(&self, name: &str) -> Result<RepoHandle> {
        self.repos
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .ok_or_else(|| Error::RepoNotFound(name.to_string()))
    }

    fn create_org_item(
        &self,
        kind: ItemKind,
        name: &str,
        value: &str,
        visibility: Visibility,
        selected: &[RepoHandle],
    ) -> Result<()> {
        self.add_org_item(
            kind,
            ListedItem {
                name: name.to_string(),
                visibility: Some(visibility.as_str().to_string()),
                value: None,
            },
        );
        self.created.borrow_mut().push(Created {
            container: "organization".to_string(),
            kind,
            name: name.to_string(),
            value: value.to_string(),
            visibility: Some(visibility),
            selected_ids: selected.iter().map(|r| r.id).collect(),
        });
        Ok(())
    }

    fn create_repo_item(&self, repo: &str, kind: ItemKind, name: &str, value: &str) -> Result<()> {
        self.add_repo_item(
            repo,
            kind,
            ListedItem {
                name: name.to_string(),
                visibility: None,
                value: None,
            },
        );
        self.created.borrow_mut().push(Created {
            container: repo.to_string(),
            kind,
            name: name.to_string(),
            value: value.to_string(),
            visibility: None,
            selected_ids: Vec::new(),
        });
        Ok(())
    }
}
