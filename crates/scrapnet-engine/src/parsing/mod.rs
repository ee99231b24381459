pub mod inline;
pub mod lines;

use crate::models::Page;
use inline::InlineNode;
use lines::{ParsedLine, classify};

pub use lines::parse_line;

/// A page with every line parsed, keeping the raw lines for context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    pub title: String,
    pub lines: Vec<String>,
    pub parsed: Vec<ParsedLine>,
}

impl ParsedPage {
    pub fn parse(page: &Page) -> Self {
        Self {
            title: page.title().to_string(),
            lines: page.lines().to_vec(),
            parsed: classify(page.lines()),
        }
    }

    /// Raw line paired with its parse.
    pub fn iter_lines(&self) -> impl Iterator<Item = (&str, &ParsedLine)> {
        self.lines.iter().map(String::as_str).zip(&self.parsed)
    }

    /// Plain text of every line, joined with newlines.
    pub fn plain_text(&self) -> String {
        self.parsed
            .iter()
            .map(ParsedLine::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Distinct image URLs in order of first appearance.
    pub fn image_urls(&self) -> Vec<String> {
        let mut out = vec![];
        for line in &self.parsed {
            collect_image_urls(&line.nodes, &mut out);
        }
        out
    }
}

/// Parses a whole export.
pub fn parse_pages(pages: &[Page]) -> Vec<ParsedPage> {
    pages.iter().map(ParsedPage::parse).collect()
}

/// Distinct image URLs across all pages, in order of first appearance.
pub fn image_urls(pages: &[ParsedPage]) -> Vec<String> {
    let mut out = vec![];
    for page in pages {
        for line in &page.parsed {
            collect_image_urls(&line.nodes, &mut out);
        }
    }
    out
}

fn collect_image_urls(nodes: &[InlineNode], out: &mut Vec<String>) {
    for node in nodes {
        match node {
            InlineNode::Image { url } => {
                if !out.contains(url) {
                    out.push(url.clone());
                }
            }
            other => collect_image_urls(other.children(), out),
        }
    }
}
