/// Bracket delimiters. A single bracket pair dispatches on its interior;
/// a double pair is always level-1 bold.
pub struct Bracket;

impl Bracket {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
    pub const DOUBLE_OPEN: &'static str = "[[";
    pub const DOUBLE_CLOSE: &'static str = "]]";
}

/// Markers recognised at the start of a bracket interior.
pub struct Decoration;

impl Decoration {
    pub const BOLD: char = '*';
    pub const ITALIC: char = '/';
    pub const STRIKETHROUGH: char = '-';
    pub const UNDERLINE: char = '_';
    pub const MATH: &'static str = "$ ";
    pub const ICON_SUFFIX: &'static str = ".icon";
}
