/// Leading indentation of a line.
pub struct Indent;

impl Indent {
    /// Counts the leading run of spaces and tabs.
    ///
    /// Each space or tab counts as one unit, so the depth is also the byte
    /// offset where content begins. The ideographic space is content, not
    /// indentation.
    pub fn measure(s: &str) -> usize {
        s.bytes().take_while(|b| matches!(b, b' ' | b'\t')).count()
    }
}
