//! Error types for MiniMessage parsing and serialization.
//!
//! Parse errors are surfaced in strict mode only; lenient parsing
//! always recovers and produces a best-effort tree. Positions are byte
//! offsets into the input handed to the tokenizer (after legacy code
//! rewriting, when that is enabled).

use thiserror::Error;

/// Errors that can occur when parsing MiniMessage markup in strict mode.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// A tag name outside the recognized vocabulary, or a recognized
    /// tag with arguments it cannot accept.
    #[error("unknown tag <{name}> at position {position}")]
    UnknownTag { name: String, position: usize },

    /// A tag still open when input ended.
    #[error("unclosed tag <{name}> opened at position {position}")]
    UnclosedTag { name: String, position: usize },

    /// A closing tag that does not match the most recently opened tag.
    #[error("mismatched closing tag </{found}> at position {position}, expected </{expected}>")]
    MismatchedCloser {
        expected: String,
        found: String,
        position: usize,
    },

    /// A closing tag with no tag open at all.
    #[error("closing tag </{name}> at position {position} with nothing open")]
    UnexpectedCloser { name: String, position: usize },
}

/// Errors that can occur when serializing a component tree.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SerializeError {
    /// A style combination with no tag form.
    #[error("style has no tag form: {0}")]
    UnrepresentableStyle(String),
}
