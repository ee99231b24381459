use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::models::Page;
use crate::parsing::ParsedPage;

/// Create a temporary directory for file-based tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Parse a page whose first line is its title
pub fn parsed_page(title: &str, body: &[&str]) -> ParsedPage {
    let lines = std::iter::once(title)
        .chain(body.iter().copied())
        .map(str::to_string)
        .collect();
    ParsedPage::parse(&Page::new(title, lines))
}
