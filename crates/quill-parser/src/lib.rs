//! Quill parser: token stream to concrete syntax tree.

mod parser;

pub use parser::{ParseResult, Parser};
