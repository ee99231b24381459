use super::{kinds::Indent, parse::parse_line, types::ParsedLine};

#[derive(Debug, Clone, Copy)]
enum CodeState {
    Outside,
    Inside { indent: usize },
}

/// Classifies a page's lines in order, threading code block state.
///
/// A `code:<name>` line opens a block; the block stays open while lines are
/// indented deeper than the opener. Blank lines never close it.
pub struct LineClassifier {
    state: CodeState,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            state: CodeState::Outside,
        }
    }

    pub fn push(&mut self, raw: &str) -> ParsedLine {
        if let CodeState::Inside { indent } = self.state
            && !raw.trim().is_empty()
            && Indent::measure(raw) <= indent
        {
            self.state = CodeState::Outside;
        }

        let line = parse_line(raw, self.in_code_block());
        if line.is_code_block_start {
            self.state = CodeState::Inside {
                indent: line.indent,
            };
        }
        line
    }

    pub fn in_code_block(&self) -> bool {
        matches!(self.state, CodeState::Inside { .. })
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies every line of a page.
pub fn classify<S: AsRef<str>>(lines: &[S]) -> Vec<ParsedLine> {
    let mut classifier = LineClassifier::new();
    lines.iter().map(|l| classifier.push(l.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::InlineNode;

    fn flags(lines: &[ParsedLine]) -> Vec<(bool, bool)> {
        lines
            .iter()
            .map(|l| (l.is_code_block_start, l.is_code_block_content))
            .collect()
    }

    #[test]
    fn code_block_threading() {
        let lines = classify(&["code:a.js", " x=1", " y=2", "z"]);
        assert_eq!(
            flags(&lines),
            vec![(true, false), (false, true), (false, true), (false, false)]
        );
        assert_eq!(lines[0].code_block_language, "js");
    }

    #[test]
    fn nested_code_block_closes_at_opener_indent() {
        let lines = classify(&[" code:x.py", "  print()", " [after]", "  [plain]"]);
        assert_eq!(
            flags(&lines),
            vec![(true, false), (false, true), (false, false), (false, false)]
        );
        assert!(matches!(lines[2].nodes[0], InlineNode::InternalLink { .. }));
    }

    #[test]
    fn blank_line_does_not_close_block() {
        let lines = classify(&["code:a.sh", " echo 1", "", " echo 2"]);
        assert_eq!(
            flags(&lines),
            vec![(true, false), (false, true), (false, false), (false, true)]
        );
        assert!(lines[2].nodes.is_empty());
    }

    #[test]
    fn markup_inside_block_is_not_interpreted() {
        let lines = classify(&["code:md", " [not a link] #nor-a-tag"]);
        assert_eq!(
            lines[1].nodes,
            vec![InlineNode::text("[not a link] #nor-a-tag")]
        );
    }

    #[test]
    fn code_opener_inside_block_is_content() {
        let lines = classify(&["code:a", " code:b", "  x", "y"]);
        assert_eq!(
            flags(&lines),
            vec![(true, false), (false, true), (false, true), (false, false)]
        );
    }

    #[test]
    fn back_to_back_blocks() {
        let lines = classify(&["code:a", " 1", "code:b", " 2"]);
        assert_eq!(
            flags(&lines),
            vec![(true, false), (false, true), (true, false), (false, true)]
        );
    }

    #[test]
    fn classifier_state_is_observable() {
        let mut c = LineClassifier::new();
        assert!(!c.in_code_block());
        c.push("code:a");
        assert!(c.in_code_block());
        c.push("done");
        assert!(!c.in_code_block());
    }
}
