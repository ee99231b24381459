use super::{
    LinkGraph,
    extract::{PageLinks, extract_links},
};
use crate::parsing::ParsedPage;

/// Accumulates links into a [`LinkGraph`].
///
/// Seeding happens up front so that pages without any links still get empty
/// forward and back entries. Link extraction is independent per page; callers
/// that extract in parallel feed the results through [`Self::add_links`] one
/// page at a time.
pub struct LinkGraphBuilder {
    graph: LinkGraph,
}

impl LinkGraphBuilder {
    pub fn new<'a>(titles: impl IntoIterator<Item = &'a str>) -> Self {
        let mut graph = LinkGraph::default();
        for title in titles {
            graph.existing_pages.insert(title.to_string());
            graph.forward_links.entry(title.to_string()).or_default();
            graph.back_links.entry(title.to_string()).or_default();
            graph.link_contexts.entry(title.to_string()).or_default();
        }
        Self { graph }
    }

    pub fn add_page(&mut self, page: &ParsedPage) {
        self.add_links(&page.title, extract_links(page));
    }

    /// Records `source`'s outbound links.
    ///
    /// Edge sets dedupe; context lines accumulate, so a target mentioned on
    /// several lines keeps every line.
    pub fn add_links(&mut self, source: &str, links: PageLinks) {
        let graph = &mut self.graph;
        for (target, contexts) in links {
            graph
                .forward_links
                .entry(source.to_string())
                .or_default()
                .insert(target.clone());
            graph
                .back_links
                .entry(target.clone())
                .or_default()
                .insert(source.to_string());
            graph
                .link_contexts
                .entry(source.to_string())
                .or_default()
                .entry(target)
                .or_default()
                .extend(contexts);
        }
    }

    pub fn finish(self) -> LinkGraph {
        let graph = self.graph;
        log::debug!(
            "Built link graph: {} pages, {} edges, {} dangling targets",
            graph.existing_pages.len(),
            graph.edge_count(),
            graph.dangling_targets().count()
        );
        graph
    }
}
