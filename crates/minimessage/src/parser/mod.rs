//! MiniMessage parsing pipeline.
//!
//! The [`Lexer`] scans raw text into tokens, `tags` resolves tag names
//! against the vocabulary, and `tree` folds the token stream into a
//! component tree.

pub mod lexer;
pub(crate) mod tags;
mod tree;

pub use lexer::{Lexer, TagToken, Token};
pub use tree::parse;
