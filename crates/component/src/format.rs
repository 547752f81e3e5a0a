//! Conversion traits between text formats and component trees.
//!
//! A text format is anything that can turn a string into a
//! [`Component`] tree, a tree back into a string, or both. Formats are
//! value types carrying their own configuration, so several differently
//! configured instances of the same format can coexist.

use crate::component::Component;

/// A text format that parses strings into component trees.
pub trait ComponentParser {
    /// Error type returned when parsing fails.
    type Err;

    /// Parse a string into a [`Component`].
    fn parse(&self, input: impl AsRef<str>) -> Result<Component, Self::Err>;
}

/// A text format that serializes component trees into strings.
pub trait ComponentSerializer {
    /// Error type returned when serialization fails.
    type Err;

    /// Serialize a [`Component`] into a string.
    fn serialize(&self, component: &Component) -> Result<String, Self::Err>;
}
