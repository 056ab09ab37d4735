//! Raw RAML tree: the parser's output shape, before any re-indexing.

mod parse;
mod types;

pub use parse::parse_document;
pub use types::*;
