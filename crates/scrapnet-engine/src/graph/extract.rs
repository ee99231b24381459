use std::collections::HashMap;

use crate::parsing::{ParsedPage, inline::InlineNode};

/// Outbound links of one page: each target with the raw lines that mention it.
///
/// Targets are in discovery order (line order, then left to right).
pub type PageLinks = Vec<(String, Vec<String>)>;

/// Collects internal link titles and hashtags of a page.
///
/// Both kinds share one namespace, so `[rust]` and `#rust` are the same
/// target. A line mentioning a target several times is recorded once for it.
pub fn extract_links(page: &ParsedPage) -> PageLinks {
    let mut out: PageLinks = vec![];
    let mut index: HashMap<String, usize> = HashMap::new();

    for (raw, line) in page.iter_lines() {
        let mut targets = vec![];
        collect_targets(&line.nodes, &mut targets);

        for (seen, target) in targets.iter().enumerate() {
            if targets[..seen].contains(target) {
                continue;
            }
            let slot = *index.entry(target.to_string()).or_insert_with(|| {
                out.push((target.to_string(), vec![]));
                out.len() - 1
            });
            out[slot].1.push(raw.to_string());
        }
    }
    out
}

fn collect_targets<'a>(nodes: &'a [InlineNode], out: &mut Vec<&'a str>) {
    for node in nodes {
        match node {
            InlineNode::InternalLink { title } => out.push(title),
            InlineNode::Hashtag { tag } => out.push(tag),
            InlineNode::Bold { children, .. }
            | InlineNode::Italic { children }
            | InlineNode::Strikethrough { children }
            | InlineNode::Underline { children } => collect_targets(children, out),
            InlineNode::Text { .. }
            | InlineNode::ExternalLink { .. }
            | InlineNode::ExternalProjectLink { .. }
            | InlineNode::Image { .. }
            | InlineNode::Icon { .. }
            | InlineNode::Code { .. }
            | InlineNode::Math { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::parsed_page;
    use pretty_assertions::assert_eq;

    fn targets(links: &PageLinks) -> Vec<&str> {
        links.iter().map(|(t, _)| t.as_str()).collect()
    }

    #[test]
    fn discovery_order() {
        let page = parsed_page("A", &["[C] then #B", "[D] and [C]"]);
        let links = extract_links(&page);
        assert_eq!(targets(&links), vec!["C", "B", "D"]);
    }

    #[test]
    fn hashtag_and_link_share_namespace() {
        let page = parsed_page("A", &["[rust]", "#rust"]);
        let links = extract_links(&page);
        assert_eq!(
            links,
            vec![(
                "rust".to_string(),
                vec!["[rust]".to_string(), "#rust".to_string()]
            )]
        );
    }

    #[test]
    fn contexts_are_raw_lines() {
        let page = parsed_page("A", &["  indented [B] line", "> quoted #B"]);
        let links = extract_links(&page);
        assert_eq!(
            links[0].1,
            vec!["  indented [B] line".to_string(), "> quoted #B".to_string()]
        );
    }

    #[test]
    fn repeated_target_on_one_line_is_one_context() {
        let page = parsed_page("A", &["[B] [B] #B"]);
        let links = extract_links(&page);
        assert_eq!(links[0].1, vec!["[B] [B] #B".to_string()]);
    }

    #[test]
    fn links_inside_decorations_are_found() {
        let page = parsed_page("A", &["[[bold #inner]]", "[/ see #deep]"]);
        assert_eq!(targets(&extract_links(&page)), vec!["inner", "deep"]);
    }

    #[test]
    fn code_blocks_and_external_links_are_ignored() {
        let page = parsed_page(
            "A",
            &[
                "code:x.md",
                " [not a link] #no",
                "[https://example.com site] [/proj/page] `[x]` [$ [y]",
            ],
        );
        assert!(extract_links(&page).is_empty());
    }
}
