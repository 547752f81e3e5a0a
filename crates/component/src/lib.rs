//! Styled-text component trees for Minecraft chat.
//!
//! This crate provides the recursive [`Component`] tree, the [`Style`]
//! model with its inheritance rules, and the [`ComponentParser`] /
//! [`ComponentSerializer`] trait pair that text formats implement.
//!
//! # Overview
//!
//! A component is an immutable value tree. Each node carries content
//! (text, a translation key, a scoreboard reference, ...), its own
//! explicit style overrides, and an ordered list of children. The
//! formatting a client actually renders is the node's *effective*
//! style, folded from the root down with [`Style::merge`]: scalars and
//! decorations inherit, click and hover events do not.
//!
//! # Usage
//!
//! ```
//! use component::{Color, Component, Decoration, NamedColor, Style};
//!
//! let message = Component::text("Hello, ")
//!     .color(Some(Color::Named(NamedColor::Green)))
//!     .append(Component::text("world").decoration(Decoration::Bold, Some(true)));
//!
//! let mut bold_runs = Vec::new();
//! message.walk_literals(&Style::default(), &mut |text, style| {
//!     if style.is_decorated(Decoration::Bold) {
//!         bold_runs.push(text.to_string());
//!     }
//! });
//! assert_eq!(bold_runs, ["world"]);
//! ```

pub mod color;
pub mod component;
pub mod error;
pub mod event;
pub mod format;
pub mod style;

// Re-export main types at crate root
pub use color::{Color, NamedColor};
pub use component::{Component, ComponentNode, Content, NbtSource};
pub use error::ColorParseError;
pub use event::{ClickEvent, HoverEvent};
pub use format::{ComponentParser, ComponentSerializer};
pub use style::{Decoration, Style};
