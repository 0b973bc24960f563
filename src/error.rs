use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("organization not found: {0}")]
    OrgNotFound(String),

    #[error("repository not found: {0}")]
    RepoNotFound(String),

    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid source file: {0} (expected a .csv file)")]
    NotCsv(String),

    #[error("missing required columns for scope '{scope}': {missing}")]
    MissingColumns { scope: &'static str, missing: String },

    #[error("invalid type '{ty}' in row {row}: valid types for scope '{scope}' are [{valid}]")]
    InvalidRowType {
        ty: String,
        row: usize,
        scope: &'static str,
        valid: String,
    },

    #[error("record scope does not match target container")]
    ScopeMismatch,

    #[error("failed to seal secret value: {0}")]
    Seal(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
