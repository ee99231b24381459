use serde::Serialize;

use crate::parsing::inline::InlineNode;

/// One parsed line of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedLine {
    /// Number of leading spaces and tabs.
    pub indent: usize,
    /// Inline content after the indentation (and quote prefix, if any).
    pub nodes: Vec<InlineNode>,
    /// The line is a `code:<name>` opener. `nodes` holds the name as text.
    pub is_code_block_start: bool,
    /// Extension of the code block name, empty if none.
    pub code_block_language: String,
    /// The line is literal content of an open code block.
    pub is_code_block_content: bool,
    /// The line starts with a single `>`.
    pub is_quote: bool,
}

impl ParsedLine {
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_plain_text(&mut out);
        }
        out
    }
}
