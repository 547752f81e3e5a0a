//! MiniMessage ⇄ Component conversion for Minecraft-style rich text.
//!
//! This is the umbrella crate: it re-exports the [`Component`] tree and
//! style model from `component` and the [`MiniMessage`] format from
//! `minimessage`.
//!
//! # Quick Start
//!
//! ```
//! use minimessage_rs::{Decoration, MiniMessage, Style};
//!
//! let mm = MiniMessage::new();
//! let tree = mm.parse("<gold>Welcome, <bold>traveler</bold>!</gold>").unwrap();
//!
//! let mut bold_runs = Vec::new();
//! tree.walk_literals(&Style::default(), &mut |text, style| {
//!     if style.is_decorated(Decoration::Bold) {
//!         bold_runs.push(text.to_string());
//!     }
//! });
//! assert_eq!(bold_runs, ["traveler"]);
//! ```

pub use component::{
    ClickEvent, Color, ColorParseError, Component, ComponentNode, ComponentParser,
    ComponentSerializer, Content, Decoration, HoverEvent, NamedColor, NbtSource, Style,
};
pub use minimessage::{
    LegacyText, MiniMessage, MiniMessageConfig, ParseError, SerializeError,
};
