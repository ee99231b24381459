pub mod graph;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use graph::{LinkGraph, LinkGraphBuilder, OneHop, extract_links};
pub use io::{Export, IoError, load_export, parse_export};
pub use models::Page;
pub use parsing::{
    ParsedPage, image_urls,
    inline::InlineNode,
    lines::{LineClassifier, ParsedLine, classify},
    parse_line, parse_pages,
};
