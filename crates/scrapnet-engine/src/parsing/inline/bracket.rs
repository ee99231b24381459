use std::sync::LazyLock;

use regex::Regex;

use super::{
    kinds::{Decoration, Url},
    parser::parse_inline,
    types::InlineNode,
};

static PROJECT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^/([^/\s]+)(?:/(.*))?$").expect("valid project link regex")
});
static ICON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^([^\s.]+){}$",
        regex::escape(Decoration::ICON_SUFFIX)
    ))
    .expect("valid icon regex")
});
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| marker_regex(&format!("({}+)", escaped(Decoration::BOLD))));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| marker_regex(&escaped(Decoration::ITALIC)));
static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| marker_regex(&escaped(Decoration::STRIKETHROUGH)));
static UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| marker_regex(&escaped(Decoration::UNDERLINE)));

fn escaped(marker: char) -> String {
    regex::escape(&marker.to_string())
}

/// `<marker> <content>` with at least one whitespace character between them.
fn marker_regex(marker: &str) -> Regex {
    Regex::new(&format!(r"(?s)^{marker}\s+(.+)$")).expect("valid decoration regex")
}

/// Turns the interior of a `[...]` pair into a node.
///
/// Never fails: anything unrecognised becomes an internal link whose title is
/// the interior verbatim.
pub fn parse_bracket(inner: &str) -> InlineNode {
    if let Some(caps) = PROJECT_LINK.captures(inner) {
        return InlineNode::ExternalProjectLink {
            project: caps[1].to_string(),
            page: caps.get(2).map_or("", |m| m.as_str()).to_string(),
        };
    }
    if let Some(caps) = ICON.captures(inner) {
        return InlineNode::Icon {
            user: caps[1].to_string(),
        };
    }
    if let Some(formula) = inner.strip_prefix(Decoration::MATH) {
        return InlineNode::Math {
            formula: formula.to_string(),
        };
    }
    if let Some(caps) = BOLD.captures(inner) {
        let content = &caps[2];
        // `[* https://gyazo.com/...]` decorates an image, not text.
        if is_image_reference(content.trim()) {
            return InlineNode::Image {
                url: content.trim().to_string(),
            };
        }
        return InlineNode::Bold {
            level: caps[1].len(),
            children: parse_inline(content),
        };
    }
    if let Some(caps) = ITALIC.captures(inner) {
        return InlineNode::Italic {
            children: parse_inline(&caps[1]),
        };
    }
    if let Some(caps) = STRIKETHROUGH.captures(inner) {
        return InlineNode::Strikethrough {
            children: parse_inline(&caps[1]),
        };
    }
    if let Some(caps) = UNDERLINE.captures(inner) {
        return InlineNode::Underline {
            children: parse_inline(&caps[1]),
        };
    }
    if Url::is_local_image_path(inner) {
        return InlineNode::Image {
            url: inner.to_string(),
        };
    }
    if let Some(found) = Url::find(inner) {
        return parse_url_bracket(inner, found);
    }
    InlineNode::InternalLink {
        title: inner.to_string(),
    }
}

fn is_image_reference(s: &str) -> bool {
    (Url::is_token(s) && Url::is_image(s)) || Url::is_local_image_path(s)
}

/// `[url]`, `[url title words]`, `[title words url]`.
fn parse_url_bracket(inner: &str, found: &str) -> InlineNode {
    let (url, title) = split_url_and_title(inner, found);
    if Url::is_image(&url) {
        return InlineNode::Image { url };
    }
    let title = if title.is_empty() { url.clone() } else { title };
    InlineNode::ExternalLink { url, title }
}

fn split_url_and_title(inner: &str, found: &str) -> (String, String) {
    if inner == found {
        return (found.to_string(), String::new());
    }

    let tokens: Vec<&str> = inner.split_whitespace().collect();
    let position = match (tokens.first(), tokens.last()) {
        (Some(first), _) if Url::is_token(first) => Some(0),
        (_, Some(last)) if Url::is_token(last) => Some(tokens.len() - 1),
        _ => tokens.iter().position(|t| Url::is_token(t)),
    };

    match position {
        Some(pos) => {
            let title: Vec<&str> = tokens
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != pos)
                .map(|(_, t)| *t)
                .collect();
            (tokens[pos].to_string(), title.join(" "))
        }
        None => {
            let remainder = inner.replacen(found, " ", 1);
            let title: Vec<&str> = remainder.split_whitespace().collect();
            (found.to_string(), title.join(" "))
        }
    }
}
