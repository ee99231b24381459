/// The `code:<name>` line that opens a fenced code region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockStart<'a> {
    /// The token after `code:`, e.g. `main.rs`.
    pub name: &'a str,
    /// Text after the last `.` of the name, empty if it has none.
    pub language: &'a str,
}

pub struct CodeBlock;

impl CodeBlock {
    pub const PREFIX: &'static str = "code:";

    /// Detects a code block opener in post-indent content.
    ///
    /// The name must be non-empty and contain no whitespace.
    pub fn start(content: &str) -> Option<CodeBlockStart<'_>> {
        let name = content.strip_prefix(Self::PREFIX)?;
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return None;
        }
        let language = name.rsplit_once('.').map_or("", |(_, ext)| ext);
        Some(CodeBlockStart { name, language })
    }
}
