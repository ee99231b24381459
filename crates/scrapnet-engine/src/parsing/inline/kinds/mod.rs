//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` TICK = '`' `` - raw zone that suppresses other parsing
//! - **`Bracket`** / **`Decoration`**: `[`, `[[`, and the interior markers
//!   (`*`, `/`, `-`, `_`, `$ `, `.icon`)
//! - **`Hashtag`**: `#` plus the boundary and tag character sets
//! - **`Url`**: URL discovery and the image-like test
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod bracket;
pub mod code_span;
pub mod hashtag;
pub mod url;

pub use bracket::{Bracket, Decoration};
pub use code_span::CodeSpan;
pub use hashtag::Hashtag;
pub use url::Url;
