//! GitHub REST client.
//!
//! Blocking reqwest client bound to one organization and token. Every call
//! is synchronous; there is no retry and no timeout beyond reqwest's
//! defaults. 404 on single-item lookups maps to `Ok(None)` so the upsert
//! engine can treat "not found" as the go-ahead to create.

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::record::ItemKind;
use crate::core::visibility::Visibility;
use crate::error::{Error, Result};
use crate::remote::types::{
    CreateSecretBody, CreateVariableBody, EnvironmentsPage, ItemWire, PublicKeyWire, RepoWire,
    RepositoriesPage, SecretsPage, VariableValueWire, VariablesPage,
};
use crate::remote::{seal, ListedItem, Remote, RepoHandle};

const API_BASE: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";
const PER_PAGE: usize = 100;

/// Handle to the GitHub API, bound to one organization.
pub struct GitHubClient {
    http: Client,
    base: String,
    org: String,
}

impl GitHubClient {
    /// Build a client for `org` authenticated with `token`.
    pub fn new(token: &str, org: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| Error::Auth("token contains invalid header characters".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(API_VERSION),
        );

        let http = Client::builder()
            .user_agent(concat!("ghvars/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base: API_BASE.to_string(),
            org: org.to_string(),
        })
    }

    /// Check token and organization up front, so a bad setup fails the run
    /// before any sync work starts.
    pub fn verify(&self) -> Result<()> {
        let url = format!("{}/orgs/{}", self.base, self.org);
        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(Error::Auth(error_message(resp)))
        } else if status == StatusCode::NOT_FOUND {
            Err(Error::OrgNotFound(self.org.clone()))
        } else {
            Err(api_error(resp))
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GET");
        let resp = checked(self.http.get(url).send()?)?;
        Ok(resp.json()?)
    }

    /// GET where 404 is an expected outcome rather than a failure.
    fn get_optional<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        debug!(url, "GET");
        let resp = self.http.get(url).send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(checked(resp)?.json()?))
    }

    /// Page through an items listing of either kind.
    fn list_items(&self, base_url: &str, kind: ItemKind) -> Result<Vec<ListedItem>> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let url = format!("{base_url}?per_page={PER_PAGE}&page={page}");
            let batch: Vec<ItemWire> = match kind {
                ItemKind::Secrets => self.get_json::<SecretsPage>(&url)?.secrets,
                ItemKind::Variables => self.get_json::<VariablesPage>(&url)?.variables,
            };
            let len = batch.len();
            items.extend(batch.into_iter().map(|item| ListedItem {
                name: item.name,
                visibility: item.visibility,
                value: item.value,
            }));
            if len < PER_PAGE {
                return Ok(items);
            }
            page += 1;
        }
    }

    fn org_public_key(&self) -> Result<PublicKeyWire> {
        let url = format!("{}/orgs/{}/actions/secrets/public-key", self.base, self.org);
        self.get_json(&url)
    }

    fn repo_public_key(&self, repo: &str) -> Result<PublicKeyWire> {
        let url = format!(
            "{}/repos/{}/{}/actions/secrets/public-key",
            self.base, self.org, repo
        );
        self.get_json(&url)
    }
}

impl Remote for GitHubClient {
    fn org(&self) -> &str {
        &self.org
    }

    fn org_items(&self, kind: ItemKind) -> Result<Vec<ListedItem>> {
        let url = format!("{}/orgs/{}/actions/{}", self.base, self.org, kind.as_str());
        // Values are dropped here even when the listing carries them; org
        // variable values go through org_variable_value.
        let items = self.list_items(&url, kind)?;
        Ok(items
            .into_iter()
            .map(|item| ListedItem {
                value: None,
                ..item
            })
            .collect())
    }

    fn selected_repositories(&self, kind: ItemKind, name: &str) -> Result<Vec<String>> {
        let url = format!(
            "{}/orgs/{}/actions/{}/{}/repositories",
            self.base,
            self.org,
            kind.as_str(),
            name
        );
        let page: RepositoriesPage = self.get_json(&url)?;
        Ok(page.repositories.into_iter().map(|r| r.name).collect())
    }

    fn org_variable_value(&self, name: &str) -> Result<String> {
        let url = format!(
            "{}/orgs/{}/actions/variables/{}",
            self.base, self.org, name
        );
        let wire: VariableValueWire = self.get_json(&url)?;
        Ok(wire.value)
    }

    fn repositories(&self) -> Result<Vec<RepoHandle>> {
        let mut repos = Vec::new();
        let mut page = 1;
        loop {
            let url = format!(
                "{}/orgs/{}/repos?per_page={PER_PAGE}&page={page}",
                self.base, self.org
            );
            let batch: Vec<RepoWire> = self.get_json(&url)?;
            let len = batch.len();
            repos.extend(batch.into_iter().map(|r| RepoHandle {
                id: r.id,
                name: r.name,
            }));
            if len < PER_PAGE {
                return Ok(repos);
            }
            page += 1;
        }
    }

    fn repo_items(&self, repo: &str, kind: ItemKind) -> Result<Vec<ListedItem>> {
        let url = format!(
            "{}/repos/{}/{}/actions/{}",
            self.base,
            self.org,
            repo,
            kind.as_str()
        );
        self.list_items(&url, kind)
    }

    fn environments(&self, repo: &str) -> Result<Vec<String>> {
        let url = format!("{}/repos/{}/{}/environments", self.base, self.org, repo);
        // Repos without deployments can answer 404 here; that is an empty
        // environment set, not a failure.
        let page: EnvironmentsPage = self.get_optional(&url)?.unwrap_or_default();
        Ok(page.environments.into_iter().map(|e| e.name).collect())
    }

    fn env_items(
        &self,
        repo: &str,
        environment: &str,
        kind: ItemKind,
    ) -> Result<Vec<ListedItem>> {
        let url = format!(
            "{}/repos/{}/{}/environments/{}/{}",
            self.base,
            self.org,
            repo,
            environment,
            kind.as_str()
        );
        self.list_items(&url, kind)
    }

    fn find_org_item(&self, kind: ItemKind, name: &str) -> Result<Option<ListedItem>> {
        let url = format!(
            "{}/orgs/{}/actions/{}/{}",
            self.base,
            self.org,
            kind.as_str(),
            name
        );
        let item: Option<ItemWire> = self.get_optional(&url)?;
        Ok(item.map(|item| ListedItem {
            name: item.name,
            visibility: item.visibility,
            value: item.value,
        }))
    }

    fn find_repo_item(
        &self,
        repo: &str,
        kind: ItemKind,
        name: &str,
    ) -> Result<Option<ListedItem>> {
        let url = format!(
            "{}/repos/{}/{}/actions/{}/{}",
            self.base,
            self.org,
            repo,
            kind.as_str(),
            name
        );
        let item: Option<ItemWire> = self.get_optional(&url)?;
        Ok(item.map(|item| ListedItem {
            name: item.name,
            visibility: item.visibility,
            value: item.value,
        }))
    }

    fn resolve_repository(&self, name: &str) -> Result<RepoHandle> {
        let url = format!("{}/repos/{}/{}", self.base, self.org, name);
        let repo: Option<RepoWire> = self.get_optional(&url)?;
        match repo {
            Some(r) => Ok(RepoHandle {
                id: r.id,
                name: r.name,
            }),
            None => Err(Error::RepoNotFound(name.to_string())),
        }
    }

    fn create_org_item(
        &self,
        kind: ItemKind,
        name: &str,
        value: &str,
        visibility: Visibility,
        selected: &[RepoHandle],
    ) -> Result<()> {
        let selected_ids = (visibility == Visibility::Selected)
            .then(|| selected.iter().map(|r| r.id).collect::<Vec<_>>());

        match kind {
            ItemKind::Secrets => {
                let key = self.org_public_key()?;
                let body = CreateSecretBody {
                    encrypted_value: seal::seal(&key.key, value)?,
                    key_id: &key.key_id,
                    visibility: Some(visibility.as_str()),
                    selected_repository_ids: selected_ids,
                };
                let url = format!(
                    "{}/orgs/{}/actions/secrets/{}",
                    self.base, self.org, name
                );
                checked(self.http.put(&url).json(&body).send()?)?;
            }
            ItemKind::Variables => {
                let body = CreateVariableBody {
                    name,
                    value,
                    visibility: Some(visibility.as_str()),
                    selected_repository_ids: selected_ids,
                };
                let url = format!("{}/orgs/{}/actions/variables", self.base, self.org);
                checked(self.http.post(&url).json(&body).send()?)?;
            }
        }
        Ok(())
    }

    fn create_repo_item(&self, repo: &str, kind: ItemKind, name: &str, value: &str) -> Result<()> {
        match kind {
            ItemKind::Secrets => {
                let key = self.repo_public_key(repo)?;
                let body = CreateSecretBody {
                    encrypted_value: seal::seal(&key.key, value)?,
                    key_id: &key.key_id,
                    visibility: None,
                    selected_repository_ids: None,
                };
                let url = format!(
                    "{}/repos/{}/{}/actions/secrets/{}",
                    self.base, self.org, repo, name
                );
                checked(self.http.put(&url).json(&body).send()?)?;
            }
            ItemKind::Variables => {
                let body = CreateVariableBody {
                    name,
                    value,
                    visibility: None,
                    selected_repository_ids: None,
                };
                let url = format!(
                    "{}/repos/{}/{}/actions/variables",
                    self.base, self.org, repo
                );
                checked(self.http.post(&url).json(&body).send()?)?;
            }
        }
        Ok(())
    }
}

/// Pass a successful response through, turn anything else into `Error::Api`.
fn checked(resp: Response) -> Result<Response> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(api_error(resp))
    }
}

fn api_error(resp: Response) -> Error {
    let status = resp.status().as_u16();
    Error::Api {
        status,
        message: error_message(resp),
    }
}

fn error_message(resp: Response) -> String {
    resp.json::<crate::remote::types::ApiErrorWire>()
        .map(|e| e.message)
        .unwrap_or_else(|_| "no error details".to_string())
}
