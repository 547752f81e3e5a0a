//! MiniMessage markup parser and serializer for chat components.
//!
//! This crate converts between the tag-based MiniMessage surface
//! syntax and the [`Component`] tree from the `component` crate.
//!
//! # Overview
//!
//! MiniMessage uses angle-bracket tags for styling:
//!
//! - `<bold>text</bold>` - decorations, with `<b>`/`<i>`/`<u>`/... aliases
//! - `<red>text</red>`, `<#ff5733>text</#ff5733>` - colors
//! - `<click:run_command:'/seed'>text</click>` - click actions
//! - `<hover:show_text:'<red>tip'>text</hover>` - hover tooltips
//! - `<lang:...>`, `<key:...>`, `<score:...>`, `<selector:...>`,
//!   `<nbt:...>` - non-text content
//! - `<reset>` - close every open tag
//! - `\<` - escaped bracket (literal `<`)
//!
//! Parsing is lenient by default: malformed or unknown markup flows
//! through as literal text and the parser always produces a tree.
//! Strict mode instead fails fast on the first structural violation,
//! with its byte position. An optional preprocessing pass rewrites
//! legacy `&`-codes into tags first.
//!
//! # Usage
//!
//! ```
//! use minimessage::MiniMessage;
//!
//! let mm = MiniMessage::new();
//! let tree = mm.parse("<green>Hello, <blue>MiniMessage</blue>!</green>").unwrap();
//! let out = mm.serialize(&tree).unwrap();
//! assert_eq!(out, "<green>Hello, </green><blue>MiniMessage</blue><green>!</green>");
//! ```

use component::{Component, ComponentParser, ComponentSerializer};

pub mod error;
pub mod legacy;
mod legacy_text;
pub mod parser;
pub mod serializer;

// Re-export main types at crate root
pub use error::{ParseError, SerializeError};
pub use legacy_text::LegacyText;

/// Configuration for MiniMessage parsing.
#[derive(Debug, Clone, Default)]
pub struct MiniMessageConfig {
    /// Error on malformed, unknown, or unclosed tags instead of
    /// recovering best-effort.
    pub strict: bool,
    /// Rewrite legacy `&`-codes into tags before tokenizing.
    pub parse_legacy_colors: bool,
}

/// The MiniMessage text format.
///
/// A value type carrying its own configuration; cheap to clone and
/// safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct MiniMessage {
    config: MiniMessageConfig,
}

impl MiniMessage {
    /// Creates an instance with the default (lenient) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an instance with a custom configuration.
    pub fn with_config(config: MiniMessageConfig) -> Self {
        MiniMessage { config }
    }

    /// This instance's configuration.
    pub fn config(&self) -> &MiniMessageConfig {
        &self.config
    }

    /// Parse markup into a component tree.
    pub fn parse(&self, input: impl AsRef<str>) -> Result<Component, ParseError> {
        let input = input.as_ref();
        if self.config.parse_legacy_colors {
            let rewritten = legacy::rewrite_legacy_codes(input);
            parser::parse(&rewritten, &self.config)
        } else {
            parser::parse(input, &self.config)
        }
    }

    /// Serialize a component tree into canonical markup.
    pub fn serialize(&self, component: &Component) -> Result<String, SerializeError> {
        serializer::serialize(component)
    }
}

impl ComponentParser for MiniMessage {
    type Err = ParseError;

    fn parse(&self, input: impl AsRef<str>) -> Result<Component, Self::Err> {
        MiniMessage::parse(self, input)
    }
}

impl ComponentSerializer for MiniMessage {
    type Err = SerializeError;

    fn serialize(&self, component: &Component) -> Result<String, Self::Err> {
        MiniMessage::serialize(self, component)
    }
}
