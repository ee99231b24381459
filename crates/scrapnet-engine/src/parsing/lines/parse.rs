use crate::parsing::inline::{InlineNode, parse_inline};

use super::{
    kinds::{CodeBlock, Indent, Quote},
    types::ParsedLine,
};

/// Parses one raw line.
///
/// `inside_code_block` is the state threaded by [`super::LineClassifier`]: an
/// indented line inside an open block is kept verbatim.
///
/// Total: any string is accepted and every character ends up in a node or
/// was consumed as syntax.
pub fn parse_line(raw: &str, inside_code_block: bool) -> ParsedLine {
    let indent = Indent::measure(raw);
    let content = &raw[indent..];

    if inside_code_block && indent > 0 {
        return ParsedLine {
            indent,
            nodes: if content.is_empty() {
                vec![]
            } else {
                vec![InlineNode::text(content)]
            },
            is_code_block_content: true,
            ..ParsedLine::default()
        };
    }

    if let Some(start) = CodeBlock::start(content) {
        return ParsedLine {
            indent,
            nodes: vec![InlineNode::text(start.name)],
            is_code_block_start: true,
            code_block_language: start.language.to_string(),
            ..ParsedLine::default()
        };
    }

    if let Some(quoted) = Quote::strip_prefix(content) {
        return ParsedLine {
            indent,
            nodes: parse_inline(quoted),
            is_quote: true,
            ..ParsedLine::default()
        };
    }

    ParsedLine {
        indent,
        nodes: parse_inline(content),
        ..ParsedLine::default()
    }
}
