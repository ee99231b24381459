use serde::Serialize;

/// A parsed inline node.
///
/// Nodes own their text; a parsed line is independent of the string it was
/// parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text { text: String },
    /// `[Page title]`: a link to another page in the same export.
    InternalLink { title: String },
    /// `[https://example.com Title]` or a bare bracketed URL.
    ExternalLink { url: String, title: String },
    /// `[/project/page]`: a page in another project. `page` may be empty.
    ExternalProjectLink { project: String, page: String },
    /// An image reference (Gyazo, image file extension or a localized path).
    Image { url: String },
    /// `[name.icon]`
    Icon { user: String },
    /// `#tag`. Shares the page title namespace with internal links.
    Hashtag { tag: String },
    /// `[[text]]` (level 1) or `[** text]` (level = number of stars).
    ///
    /// The level is stored as written; renderers clamp it.
    Bold { level: usize, children: Vec<InlineNode> },
    /// `[/ text]`
    Italic { children: Vec<InlineNode> },
    /// `[- text]`
    Strikethrough { children: Vec<InlineNode> },
    /// `[_ text]`
    Underline { children: Vec<InlineNode> },
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    Code { code: String },
    /// `[$ formula]`. Raw, like code.
    Math { formula: String },
}

impl InlineNode {
    pub fn text(text: impl Into<String>) -> Self {
        InlineNode::Text { text: text.into() }
    }

    /// Child nodes of a decoration, empty for every other variant.
    pub fn children(&self) -> &[InlineNode] {
        match self {
            InlineNode::Bold { children, .. }
            | InlineNode::Italic { children }
            | InlineNode::Strikethrough { children }
            | InlineNode::Underline { children } => children,
            InlineNode::Text { .. }
            | InlineNode::InternalLink { .. }
            | InlineNode::ExternalLink { .. }
            | InlineNode::ExternalProjectLink { .. }
            | InlineNode::Image { .. }
            | InlineNode::Icon { .. }
            | InlineNode::Hashtag { .. }
            | InlineNode::Code { .. }
            | InlineNode::Math { .. } => &[],
        }
    }

    /// Whether the node was produced by a `[...]` construct.
    ///
    /// A hashtag may directly follow such a node without a separating space.
    pub fn is_bracketed(&self) -> bool {
        !matches!(
            self,
            InlineNode::Text { .. } | InlineNode::Hashtag { .. } | InlineNode::Code { .. }
        )
    }

    /// Appends the node's plain-text contribution to `out`.
    ///
    /// Images and icons contribute nothing.
    pub fn write_plain_text(&self, out: &mut String) {
        match self {
            InlineNode::Text { text } => out.push_str(text),
            InlineNode::InternalLink { title } => out.push_str(title),
            InlineNode::ExternalLink { title, .. } => out.push_str(title),
            InlineNode::ExternalProjectLink { project, page } => {
                out.push('/');
                out.push_str(project);
                out.push('/');
                out.push_str(page);
            }
            InlineNode::Image { .. } | InlineNode::Icon { .. } => {}
            InlineNode::Hashtag { tag } => out.push_str(tag),
            InlineNode::Bold { children, .. }
            | InlineNode::Italic { children }
            | InlineNode::Strikethrough { children }
            | InlineNode::Underline { children } => {
                for child in children {
                    child.write_plain_text(out);
                }
            }
            InlineNode::Code { code } => out.push_str(code),
            InlineNode::Math { formula } => out.push_str(formula),
        }
    }

    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }
}
