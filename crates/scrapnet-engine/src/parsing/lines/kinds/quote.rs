/// Quote line type with owned delimiter constant.
pub struct Quote;

impl Quote {
    /// The quote prefix character.
    pub const PREFIX: char = '>';

    /// Strips a single `>` and at most one following space.
    ///
    /// Returns `None` when the content is not a quote, including `>>`.
    pub fn strip_prefix(s: &str) -> Option<&str> {
        let rest = s.strip_prefix(Self::PREFIX)?;
        if rest.starts_with(Self::PREFIX) {
            return None;
        }
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
