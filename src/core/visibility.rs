//! Visibility normalization and selected-repository resolution.
//!
//! Organization-scope entries carry an access policy: `all` (every
//! repository), `private` (none), or `selected` (an explicit repository
//! list). Free-form input is coerced into that closed set, and selected
//! repository names are resolved best-effort into remote handles.

use std::fmt;

use tracing::error;

use crate::error::Result;
use crate::remote::RepoHandle;

/// Organization-level access policy for a secret or variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    All,
    Private,
    Selected,
}

impl Visibility {
    /// Normalize free-form input. Matching is case-insensitive and anything
    /// outside the closed set falls back to `All`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "private" => Visibility::Private,
            "selected" => Visibility::Selected,
            _ => Visibility::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::All => "all",
            Visibility::Private => "private",
            Visibility::Selected => "selected",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a comma-separated repository list into trimmed, non-empty names.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve selected-repository names into remote handles.
///
/// A name that fails to resolve is logged and dropped; it never aborts
/// resolution of the remaining names. An empty result under `selected`
/// visibility is a valid zero-repository selection, not an error.
pub fn resolve_selected<F>(names: &[String], mut lookup: F) -> Vec<RepoHandle>
where
    F: FnMut(&str) -> Result<RepoHandle>,
{
    let mut handles = Vec::new();
    for name in names {
        match lookup(name) {
            Ok(handle) => handles.push(handle),
            Err(e) => {
                error!(repository = %name, error = %e, "failed to resolve selected repository")
            }
        }
    }
    handles
}
