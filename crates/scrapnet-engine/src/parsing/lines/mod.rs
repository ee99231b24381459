//! # Line Parsing
//!
//! Each raw line becomes a [`ParsedLine`].
//!
//! ## Phases
//!
//! 1. **Line parsing** (`parse`): indentation, code block content
//!    short-circuit, `code:` opener, `>` quote, then inline parsing
//! 2. **Sequence classification** (`classify`): a [`LineClassifier`] carries
//!    the open code block (and its indent) from one line to the next
//!
//! ## Key Invariants
//!
//! - Code blocks are raw zones: no inline parsing inside
//! - A non-blank line at or left of the opener's indent closes the block
//!   before it is parsed

pub mod classify;
pub mod kinds;
pub mod parse;
pub mod types;

pub use classify::{LineClassifier, classify};
pub use parse::parse_line;
pub use types::ParsedLine;
