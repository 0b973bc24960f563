//! Tabular importer.
//!
//! Parses CSV rows into records for upload. Schema problems (wrong file
//! extension, missing columns, a row type outside the scope's admitted set)
//! reject the whole batch before any remote mutation: a malformed source
//! file means operator error, not transient failure. Structurally broken
//! lines, in contrast, are skipped with a warning.

use std::io::Read;
use std::path::Path;

use tracing::warn;

use crate::core::record::{Record, Scope};
use crate::core::visibility::{self, Visibility};
use crate::error::{Error, Result};

const ORG_COLUMNS: [&str; 5] = ["type", "name", "value", "visibility", "selectedrepositories"];
const REPO_COLUMNS: [&str; 4] = ["type", "name", "value", "repository"];

/// Read and classify an import batch from a CSV file.
pub fn read_file(path: &str, scope: Scope) -> Result<Vec<Record>> {
    let is_csv = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(Error::NotCsv(path.to_string()));
    }
    parse(std::fs::File::open(path)?, scope)
}

/// Parse and classify an import batch from any byte source.
pub fn parse<R: Read>(source: R, scope: Scope) -> Result<Vec<Record>> {
    // Strict field counts: a ragged row surfaces as a per-row error below
    // and is skipped, it does not poison the batch.
    let mut reader = csv::Reader::from_reader(source);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();
    check_columns(&headers, scope)?;
    let column = |name: &str| headers.iter().position(|h| h == name);

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        // Row 1 is the header line
        let row_number = index + 2;
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(row = row_number, error = %e, "skipping malformed row");
                continue;
            }
        };
        let field =
            |name: &str| column(name).and_then(|i| row.get(i)).unwrap_or("").trim();

        let ty = field("type").to_ascii_lowercase();
        let record = match ty.as_str() {
            "org_secret" | "org_variable" if scope.includes_org() => {
                let name = field("name").to_string();
                let value = Some(field("value").to_string());
                let visibility = Visibility::from_raw(field("visibility"));
                let selected_repositories =
                    visibility::split_names(field("selectedrepositories"));
                if ty == "org_secret" {
                    Record::OrgSecret {
                        name,
                        value,
                        visibility,
                        selected_repositories,
                    }
                } else {
                    Record::OrgVariable {
                        name,
                        value,
                        visibility,
                        selected_repositories,
                    }
                }
            }
            "repo_secret" | "repo_variable" if scope.includes_repo() => {
                let repository = field("repository").to_string();
                let name = field("name").to_string();
                let value = Some(field("value").to_string());
                if ty == "repo_secret" {
                    Record::RepoSecret {
                        repository,
                        name,
                        value,
                    }
                } else {
                    Record::RepoVariable {
                        repository,
                        name,
                        value,
                    }
                }
            }
            _ => {
                return Err(Error::InvalidRowType {
                    ty,
                    row: row_number,
                    scope: scope.as_str(),
                    valid: admitted_types(scope).join(", "),
                })
            }
        };
        records.push(record);
    }

    Ok(records)
}

fn admitted_types(scope: Scope) -> Vec<&'static str> {
    let mut types = Vec::new();
    if scope.includes_org() {
        types.extend(["org_secret", "org_variable"]);
    }
    if scope.includes_repo() {
        types.extend(["repo_secret", "repo_variable"]);
    }
    types
}

fn check_columns(headers: &[String], scope: Scope) -> Result<()> {
    let mut required: Vec<&str> = Vec::new();
    if scope.includes_org() {
        required.extend(ORG_COLUMNS);
    }
    if scope.includes_repo() {
        required.extend(REPO_COLUMNS);
    }

    let mut missing: Vec<&str> = required
        .into_iter()
        .filter(|c| !headers.iter().any(|h| h == c))
        .collect();
    missing.sort_unstable();
    missing.dedup();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingColumns {
            scope: scope.as_str(),
            missing: missing.join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(csv: &str, scope: Scope) -> Result<Vec<Record>> {
        parse(csv.as_bytes(), scope)
    }

    #[test]
    fn test_classifies_all_four_types() {
        let csv = "\
type,name,value,visibility,selectedrepositories,repository
org_secret,TOKEN,abc,selected,\"svc, web\",
org_variable,ENV,prod,all,,
repo_secret,API_KEY,xyz,,,svc
repo_variable,REGION,eu,,,svc
";
        let records = parse_str(csv, Scope::Both).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(
            records[0],
            Record::OrgSecret {
                name: "TOKEN".to_string(),
                value: Some("abc".to_string()),
                visibility: Visibility::Selected,
                selected_repositories: vec!["svc".to_string(), "web".to_string()],
            }
        );
        assert_eq!(records[3].repository(), Some("svc"));
    }

    #[test]
    fn test_headers_matched_case_insensitively() {
        let csv = "Type,Name,Value,Visibility,SelectedRepositories\norg_variable,ENV,x,all,\n";
        let records = parse_str(csv, Scope::Org).unwrap();
        assert_eq!(records[0].name(), "ENV");
    }

    #[test]
    fn test_missing_column_rejects_batch() {
        // org scope without the visibility column: zero records, batch error,
        // even though every type value is valid
        let csv = "type,name,value,selectedrepositories\norg_variable,ENV,x,\n";
        let err = parse_str(csv, Scope::Org).unwrap_err();
        assert!(matches!(err, Error::MissingColumns { scope: "org", .. }));
    }

    #[test]
    fn test_both_scope_requires_union_of_columns() {
        let csv = "type,name,value,visibility,selectedrepositories\norg_variable,ENV,x,all,\n";
        let err = parse_str(csv, Scope::Both).unwrap_err();
        match err {
            Error::MissingColumns { scope, missing } => {
                assert_eq!(scope, "both");
                assert_eq!(missing, "repository");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_out_of_scope_type_rejects_whole_batch() {
        // one org row inside a repo-scope batch is not silently dropped
        let csv = "\
type,name,value,repository
repo_secret,API_KEY,x,svc
org_secret,TOKEN,y,
";
        let err = parse_str(csv, Scope::Repo).unwrap_err();
        match err {
            Error::InvalidRowType { ty, row, scope, .. } => {
                assert_eq!(ty, "org_secret");
                assert_eq!(row, 3);
                assert_eq!(scope, "repo");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_unknown_type_rejects_batch() {
        let csv = "type,name,value,visibility,selectedrepositories\nenv_secret,X,y,all,\n";
        assert!(matches!(
            parse_str(csv, Scope::Org),
            Err(Error::InvalidRowType { .. })
        ));
    }

    #[test]
    fn test_malformed_line_is_skipped_not_fatal() {
        // the ragged row has a stray extra field; the rest of the batch
        // survives
        let csv = "\
type,name,value,visibility,selectedrepositories
org_variable,ENV,prod,all,
org_variable,BROKEN,x,all,,stray
org_variable,REGION,eu,all,
";
        let records = parse_str(csv, Scope::Org).unwrap();
        let names: Vec<&str> = records.iter().map(Record::name).collect();
        assert_eq!(names, vec!["ENV", "REGION"]);
    }

    #[test]
    fn test_rejects_non_csv_extension() {
        assert!(matches!(
            read_file("secrets.xlsx", Scope::Org),
            Err(Error::NotCsv(_))
        ));
    }

    #[test]
    fn test_bogus_visibility_coerces_to_all() {
        let csv = "type,name,value,visibility,selectedrepositories\norg_secret,T,v,bogus,\n";
        let records = parse_str(csv, Scope::Org).unwrap();
        assert!(matches!(
            &records[0],
            Record::OrgSecret { visibility: Visibility::All, .. }
        ));
    }
}
