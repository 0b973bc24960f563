//! Serde wire types for the GitHub REST API.

use serde::{Deserialize, Serialize};

/// One secret or variable as it appears in listing and single-item
/// responses. Visibility is only present at organization scope, values only
/// on variable objects.
#[derive(Debug, Deserialize)]
pub struct ItemWire {
    pub name: String,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Paged listing of secrets.
#[derive(Debug, Deserialize)]
pub struct SecretsPage {
    pub secrets: Vec<ItemWire>,
}

/// Paged listing of variables.
#[derive(Debug, Deserialize)]
pub struct VariablesPage {
    pub variables: Vec<ItemWire>,
}

/// A repository reference.
#[derive(Debug, Deserialize)]
pub struct RepoWire {
    pub id: u64,
    pub name: String,
}

/// Selected-repositories listing for an org item.
#[derive(Debug, Deserialize)]
pub struct RepositoriesPage {
    pub repositories: Vec<RepoWire>,
}

/// Deployment environments listing.
#[derive(Debug, Default, Deserialize)]
pub struct EnvironmentsPage {
    #[serde(default)]
    pub environments: Vec<EnvironmentWire>,
}

#[derive(Debug, Deserialize)]
pub struct EnvironmentWire {
    pub name: String,
}

/// Response of the single-variable endpoint; the value is always present
/// there, unlike on org-level listings.
#[derive(Debug, Deserialize)]
pub struct VariableValueWire {
    pub value: String,
}

/// Actions public key used to seal secret values.
#[derive(Debug, Deserialize)]
pub struct PublicKeyWire {
    pub key_id: String,
    pub key: String,
}

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
pub struct ApiErrorWire {
    pub message: String,
}

/// Body of the secret-creation PUT.
#[derive(Debug, Serialize)]
pub struct CreateSecretBody<'a> {
    pub encrypted_value: String,
    pub key_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_repository_ids: Option<Vec<u64>>,
}

/// Body of the variable-creation POST.
#[derive(Debug, Serialize)]
pub struct CreateVariableBody<'a> {
    pub name: &'a str,
    pub value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_repository_ids: Option<Vec<u64>>,
}
