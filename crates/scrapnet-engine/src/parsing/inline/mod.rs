//! # Inline Parsing
//!
//! Cursor-based inline parsing of one line's content.
//!
//! ## Architecture
//!
//! The parser walks the content left to right. At each position it tries
//! the constructs in a fixed precedence and commits to the first that
//! matches; otherwise the character joins the pending text run.
//!
//! - `[[...]]` is level-1 bold
//! - `[...]` is dispatched on its interior (links, icons, math, decorations,
//!   images, URLs)
//! - `` `...` `` is a code span, a raw zone
//! - `#tag` is a hashtag, but only after a boundary
//!
//! Decorations recurse into `parse_inline` for their interior; code and math
//! never do.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum
//! - **`kinds`**: delimiter constants, hashtag and URL rules
//! - **`cursor`**: `Cursor` for character-by-character parsing
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//! - **`bracket`**: `parse_bracket()` interior dispatch

pub mod bracket;
pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
