use crate::models::Page;
use crate::parsing::{ParsedPage, parse_pages};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Export file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed export JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid export: {0}")]
    InvalidExport(String),
}

/// A loaded export: the project name, if recorded, and its pages in file order.
#[derive(Debug, Clone)]
pub struct Export {
    pub project_name: Option<String>,
    pub pages: Vec<Page>,
}

impl Export {
    /// Runs the line classifier over every page.
    pub fn parse_pages(&self) -> Vec<ParsedPage> {
        parse_pages(&self.pages)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExport {
    project_name: Option<String>,
    #[serde(default)]
    pages: Vec<RawPage>,
}

#[derive(Deserialize)]
struct RawPage {
    title: String,
    #[serde(default)]
    lines: Vec<RawLine>,
}

/// Exports either store lines as strings or as objects carrying metadata
/// next to the `text`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLine {
    Plain(String),
    Rich { text: String },
}

impl RawLine {
    fn into_text(self) -> String {
        match self {
            RawLine::Plain(text) | RawLine::Rich { text } => text,
        }
    }
}

/// Read and validate an export file
pub fn load_export(path: &Path) -> Result<Export, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_export(&content)
}

/// Parse and validate export JSON held in memory
///
/// Pages must have a non-empty title. A repeated title keeps the first page
/// and drops the rest with a warning.
pub fn parse_export(content: &str) -> Result<Export, IoError> {
    let raw: RawExport = serde_json::from_str(content)?;

    let mut seen = HashSet::new();
    let mut pages = Vec::with_capacity(raw.pages.len());
    for (index, page) in raw.pages.into_iter().enumerate() {
        if page.title.is_empty() {
            return Err(IoError::InvalidExport(format!(
                "page {index} has an empty title"
            )));
        }
        if !seen.insert(page.title.clone()) {
            log::warn!("Skipping duplicate page title: {}", page.title);
            continue;
        }
        let lines = page.lines.into_iter().map(RawLine::into_text).collect();
        pages.push(Page::new(page.title, lines));
    }

    log::debug!("Loaded {} pages from export", pages.len());
    Ok(Export {
        project_name: raw.project_name,
        pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    const EXPORT: &str = r##"{
        "projectName": "notes",
        "pages": [
            { "title": "Home", "lines": ["Home", "see [Rust]"] },
            { "title": "Rust", "lines": [
                { "text": "Rust", "created": 1, "updated": 2 },
                { "text": "#lang", "userId": "u1" }
            ] },
            { "title": "Empty" }
        ]
    }"##;

    #[test]
    fn parses_plain_and_rich_lines() {
        let export = parse_export(EXPORT).unwrap();

        assert_eq!(export.project_name.as_deref(), Some("notes"));
        assert_eq!(export.pages.len(), 3);
        assert_eq!(export.pages[0].lines(), ["Home", "see [Rust]"]);
        assert_eq!(export.pages[1].lines(), ["Rust", "#lang"]);
        assert!(export.pages[2].lines().is_empty());
    }

    #[test]
    fn parse_pages_runs_classifier() {
        let export = parse_export(EXPORT).unwrap();
        let parsed = export.parse_pages();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[1].parsed[1].plain_text(), "lang");
    }

    #[test]
    fn rejects_empty_title() {
        let result = parse_export(r#"{ "pages": [ { "title": "", "lines": [] } ] }"#);
        assert!(matches!(result, Err(IoError::InvalidExport(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        let result = parse_export("{ not json");
        assert!(matches!(result, Err(IoError::Json(_))));
    }

    #[test]
    fn duplicate_titles_keep_first() {
        let export = parse_export(
            r#"{ "pages": [
                { "title": "A", "lines": ["first"] },
                { "title": "A", "lines": ["second"] }
            ] }"#,
        )
        .unwrap();
        assert_eq!(export.pages.len(), 1);
        assert_eq!(export.pages[0].lines(), ["first"]);
    }

    #[test]
    fn missing_pages_is_empty_export() {
        let export = parse_export("{}").unwrap();
        assert!(export.pages.is_empty());
        assert!(export.project_name.is_none());
    }

    #[test]
    fn load_export_from_file() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "export.json", EXPORT);

        let export = load_export(&path).unwrap();
        assert_eq!(export.pages.len(), 3);
    }

    #[test]
    fn load_export_missing_file() {
        let dir = create_test_dir();
        let result = load_export(&dir.path().join("missing.json"));

        assert!(matches!(result, Err(IoError::NotFound(_))));
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
