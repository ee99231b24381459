/// A titled page of raw lines, as handed over by the export loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: String,
    lines: Vec<String>,
}

impl Page {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
