use super::{
    bracket::parse_bracket,
    cursor::Cursor,
    kinds::{Bracket, CodeSpan, Hashtag},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// At every position the constructs are tried in a fixed order and the first
/// match wins: `[[bold]]`, `[bracket]`, `` `code` ``, `#hashtag`. Anything
/// else accumulates into pending text, which is flushed as
/// `InlineNode::Text` when a construct interrupts it and at the end.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Unclosed constructs
/// stay in the surrounding text.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::text(&s[start..end]));
        }
    }

    while !cur.eof() {
        let start = cur.i;
        // Try constructs in precedence order
        let node = try_parse_double_bracket(&mut cur)
            .or_else(|| try_parse_bracket(&mut cur))
            .or_else(|| try_parse_code_span(&mut cur))
            .or_else(|| {
                if at_hashtag_boundary(&s[text_start..start], out.last()) {
                    try_parse_hashtag(&mut cur)
                } else {
                    None
                }
            });

        match node {
            Some(node) => {
                flush_text(&mut out, s, text_start, start);
                text_start = cur.i;
                out.push(node);
            }
            None => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, s, text_start, cur.i);
    out
}

/// Whether a `#` at the current position may open a hashtag.
///
/// `pending` is the text accumulated since the last emitted node.
fn at_hashtag_boundary(pending: &str, last: Option<&InlineNode>) -> bool {
    match pending.chars().next_back() {
        Some(c) => Hashtag::is_boundary(c),
        None => last.is_none_or(InlineNode::is_bracketed),
    }
}

/// Attempts to parse `[[...]]` as level-1 bold.
///
/// The interior must be non-empty and free of `]`. On failure the cursor is
/// left untouched so the single-bracket form can be tried.
fn try_parse_double_bracket(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Bracket::DOUBLE_OPEN) {
        return None;
    }
    let rest = &cur.rest()[Bracket::DOUBLE_OPEN.len()..];
    let close = rest.find(Bracket::CLOSE)?;
    if close == 0 || !rest[close..].starts_with(Bracket::DOUBLE_CLOSE) {
        return None;
    }
    let inner = &rest[..close];
    cur.bump_n(Bracket::DOUBLE_OPEN.len() + close + Bracket::DOUBLE_CLOSE.len());

    Some(InlineNode::Bold {
        level: 1,
        children: parse_inline(inner),
    })
}

/// Attempts to parse `[...]`, closing at the first `]`.
fn try_parse_bracket(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Bracket::OPEN) {
        return None;
    }
    let rest = &cur.rest()[Bracket::OPEN.len_utf8()..];
    let close = rest.find(Bracket::CLOSE)?;
    if close == 0 {
        return None;
    }
    let inner = &rest[..close];
    cur.bump_n(Bracket::OPEN.len_utf8() + close + Bracket::CLOSE.len_utf8());

    Some(parse_bracket(inner))
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty, or if it isn't
/// closed.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let rest = &cur.rest()[CodeSpan::TICK.len_utf8()..];
    let close = rest.find(CodeSpan::TICK)?;
    if close == 0 {
        return None;
    }
    let code = &rest[..close];
    cur.bump_n(2 * CodeSpan::TICK.len_utf8() + close);

    Some(InlineNode::Code {
        code: code.to_string(),
    })
}

/// Attempts to parse `#tag`. The caller has already checked the boundary.
fn try_parse_hashtag(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Hashtag::MARK) {
        return None;
    }
    let rest = &cur.rest()[Hashtag::MARK.len_utf8()..];
    let len = Hashtag::tag_len(rest);
    if len == 0 {
        return None;
    }
    let tag = &rest[..len];
    cur.bump_n(Hashtag::MARK.len_utf8() + len);

    Some(InlineNode::Hashtag {
        tag: tag.to_string(),
    })
}
