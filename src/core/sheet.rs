//! Export sheets.
//!
//! A `Sheet` is one flat table per (scope, item kind) pair, carrying only
//! the record fields relevant to that scope. Absent values render as empty
//! cells. Writing the tables to disk is the CLI's business.

use crate::core::record::{ItemKind, Record};

/// One flat export table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    fn new(name: String, columns: Vec<&'static str>) -> Self {
        Self {
            name,
            columns,
            rows: Vec::new(),
        }
    }
}

/// Variables sheets carry a Value column only when values were requested;
/// secrets sheets never do.
fn with_value(kind: ItemKind, fetch_values: bool) -> bool {
    fetch_values && kind == ItemKind::Variables
}

/// Build the `org_secrets` / `org_variables` sheet.
pub fn org_sheet(kind: ItemKind, fetch_values: bool, records: &[Record]) -> Sheet {
    let value_column = with_value(kind, fetch_values);
    let mut columns = vec!["Name", "Visibility", "SelectedRepositories"];
    if value_column {
        columns.push("Value");
    }
    let mut sheet = Sheet::new(format!("org_{}", kind.as_str()), columns);

    for record in records {
        if let Record::OrgSecret {
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
        } = record
        {
            let mut row = vec![
                name.clone(),
                visibility.to_string(),
                selected_repositories.join(","),
            ];
            if value_column {
                row.push(record.value().unwrap_or_default().to_string());
            }
            sheet.rows.push(row);
        }
    }
    sheet
}

/// Build the `repo_secrets` / `repo_variables` sheet.
pub fn repo_sheet(kind: ItemKind, fetch_values: bool, records: &[Record]) -> Sheet {
    let value_column = with_value(kind, fetch_values);
    let mut columns = vec!["Repository", "Name"];
    if value_column {
        columns.push("Value");
    }
    let mut sheet = Sheet::new(format!("repo_{}", kind.as_str()), columns);

    for record in records {
        if let Record::RepoSecret {
            repository, name, ..
        }
        | Record::RepoVariable {
            repository, name, ..
        } = record
        {
            let mut row = vec![repository.clone(), name.clone()];
            if value_column {
                row.push(record.value().unwrap_or_default().to_string());
            }
            sheet.rows.push(row);
        }
    }
    sheet
}

/// Build the `repo_env_secrets` / `repo_env_variables` sheet.
pub fn repo_env_sheet(kind: ItemKind, fetch_values: bool, records: &[Record]) -> Sheet {
    let value_column = with_value(kind, fetch_values);
    let mut columns = vec!["Repository", "Environment", "Name"];
    if value_column {
        columns.push("Value");
    }
    let mut sheet = Sheet::new(format!("repo_env_{}", kind.as_str()), columns);

    for record in records {
        if let Record::RepoEnvSecret {
            repository,
            environment,
            name,
        }
        | Record::RepoEnvVariable {
            repository,
            environment,
            name,
            ..
        } = record
        {
            let mut row = vec![repository.clone(), environment.clone(), name.clone()];
            if value_column {
                row.push(record.value().unwrap_or_default().to_string());
            }
            sheet.rows.push(row);
        }
    }
    sheet
}
