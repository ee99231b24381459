//! Line-level syntax: indentation, quote prefix and code block opener.

pub mod code_block;
pub mod indent;
pub mod quote;

pub use code_block::{CodeBlock, CodeBlockStart};
pub use indent::Indent;
pub use quote::Quote;
