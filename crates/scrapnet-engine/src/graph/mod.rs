//! # Link Graph
//!
//! Page-to-page links aggregated over a whole export.
//!
//! - **`extract`**: per-page link targets with their source lines
//! - **`builder`**: `LinkGraphBuilder`, seeded with every page title, folds
//!   pages in and freezes into a read-only [`LinkGraph`]
//! - **`query`**: one-hop, two-hop and backlink neighborhoods
//!
//! Links to titles outside the export are kept as dangling edges.

pub mod builder;
pub mod extract;
pub mod query;

use std::collections::{BTreeMap, BTreeSet};

pub use builder::LinkGraphBuilder;
pub use extract::{PageLinks, extract_links};
pub use query::OneHop;

use crate::parsing::ParsedPage;

static EMPTY: BTreeSet<String> = BTreeSet::new();

/// Read-only link graph. Build it with [`LinkGraph::build`] or
/// [`LinkGraphBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGraph {
    forward_links: BTreeMap<String, BTreeSet<String>>,
    back_links: BTreeMap<String, BTreeSet<String>>,
    link_contexts: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    existing_pages: BTreeSet<String>,
}

impl LinkGraph {
    /// Seeds every page, then folds in each page's links.
    pub fn build(pages: &[ParsedPage]) -> Self {
        let mut builder = LinkGraphBuilder::new(pages.iter().map(|p| p.title.as_str()));
        for page in pages {
            builder.add_page(page);
        }
        builder.finish()
    }

    /// Titles the page links to. Empty for unknown titles.
    pub fn forward_links(&self, title: &str) -> &BTreeSet<String> {
        self.forward_links.get(title).unwrap_or(&EMPTY)
    }

    /// Titles of pages linking to `title`. Empty for unknown titles.
    pub fn back_links(&self, title: &str) -> &BTreeSet<String> {
        self.back_links.get(title).unwrap_or(&EMPTY)
    }

    pub fn has_forward_entry(&self, title: &str) -> bool {
        self.forward_links.contains_key(title)
    }

    pub fn has_back_entry(&self, title: &str) -> bool {
        self.back_links.contains_key(title)
    }

    /// Raw lines of `source` that link to `target`, in page order.
    pub fn link_contexts(&self, source: &str, target: &str) -> &[String] {
        self.link_contexts
            .get(source)
            .and_then(|targets| targets.get(target))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every outbound target of `source` with its context lines.
    pub fn contexts_from(&self, source: &str) -> impl Iterator<Item = (&str, &[String])> {
        self.link_contexts
            .get(source)
            .into_iter()
            .flatten()
            .map(|(target, lines)| (target.as_str(), lines.as_slice()))
    }

    pub fn existing_pages(&self) -> &BTreeSet<String> {
        &self.existing_pages
    }

    pub fn page_exists(&self, title: &str) -> bool {
        self.existing_pages.contains(title)
    }

    /// Number of distinct source -> target edges.
    pub fn edge_count(&self) -> usize {
        self.forward_links.values().map(BTreeSet::len).sum()
    }

    /// Link targets that are not pages of the export.
    pub fn dangling_targets(&self) -> impl Iterator<Item = &str> {
        self.back_links
            .keys()
            .filter(|t| !self.existing_pages.contains(*t))
            .map(String::as_str)
    }
}
