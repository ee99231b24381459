/// Hashtag syntax: `#token`.
pub struct Hashtag;

impl Hashtag {
    pub const MARK: char = '#';

    /// Characters after which a `#` may start a hashtag.
    ///
    /// Whitespace (including the ideographic space) and closing quote or
    /// bracket punctuation, half-width and full-width.
    pub const BOUNDARY: &'static [char] = &[
        ' ', '\t', '\u{3000}', '"', '\'', ')', '」', '』', '）', '】', '”', '’',
    ];

    pub fn is_boundary(c: char) -> bool {
        Self::BOUNDARY.contains(&c)
    }

    /// Whether `c` may appear inside a tag.
    pub fn is_tag_char(c: char) -> bool {
        !(c.is_whitespace() || c == '[' || c == ']' || c == Self::MARK)
    }

    /// Length in bytes of the tag at the start of `s` (after the `#`).
    pub fn tag_len(s: &str) -> usize {
        s.char_indices()
            .find(|&(_, c)| !Self::is_tag_char(c))
            .map_or(s.len(), |(i, _)| i)
    }
}
