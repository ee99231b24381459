use std::collections::HashSet;

use super::LinkGraph;

/// Direct neighbors of a page, kept apart by direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneHop<'a> {
    pub outgoing: Vec<&'a str>,
    pub incoming: Vec<&'a str>,
}

impl LinkGraph {
    pub fn one_hop(&self, title: &str) -> OneHop<'_> {
        OneHop {
            outgoing: self.forward_links(title).iter().map(String::as_str).collect(),
            incoming: self.back_links(title).iter().map(String::as_str).collect(),
        }
    }

    /// Pages one more edge away from any direct neighbor.
    ///
    /// Edges are followed in both directions at both steps. The page itself
    /// and its direct neighbors are excluded. Order is first discovery,
    /// walking outgoing neighbors before incoming ones.
    pub fn two_hop(&self, title: &str) -> Vec<&str> {
        let OneHop { outgoing, incoming } = self.one_hop(title);

        let mut excluded: HashSet<&str> = outgoing.iter().chain(&incoming).copied().collect();
        excluded.insert(title);

        let mut out = vec![];
        for neighbor in outgoing.iter().chain(&incoming) {
            let next = self
                .forward_links(neighbor)
                .iter()
                .chain(self.back_links(neighbor));
            for candidate in next {
                // `excluded` doubles as the seen set
                if excluded.insert(candidate.as_str()) {
                    out.push(candidate.as_str());
                }
            }
        }
        out
    }

    pub fn backlinks(&self, title: &str) -> Vec<&str> {
        self.back_links(title).iter().map(String::as_str).collect()
    }

    /// Two-hop pages that exist in the export, at most `limit` of them.
    pub fn related_pages(&self, title: &str, limit: usize) -> Vec<&str> {
        self.two_hop(title)
            .into_iter()
            .filter(|t| self.page_exists(t))
            .take(limit)
            .collect()
    }
}
