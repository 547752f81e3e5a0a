//! Style attributes and the inheritance rules between nested components.

use crate::color::Color;
use crate::event::{ClickEvent, HoverEvent};

/// The five independent text decorations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoration {
    Bold,
    Italic,
    Underlined,
    Strikethrough,
    Obfuscated,
}

impl Decoration {
    /// All decorations, in canonical emission order.
    pub const ALL: [Decoration; 5] = [
        Decoration::Bold,
        Decoration::Italic,
        Decoration::Underlined,
        Decoration::Strikethrough,
        Decoration::Obfuscated,
    ];

    /// Canonical lowercase name, as used in tags.
    pub fn name(&self) -> &'static str {
        match self {
            Decoration::Bold => "bold",
            Decoration::Italic => "italic",
            Decoration::Underlined => "underlined",
            Decoration::Strikethrough => "strikethrough",
            Decoration::Obfuscated => "obfuscated",
        }
    }
}

/// Formatting attributes attachable to any component node.
///
/// Every attribute is optional; unset means "inherit from the parent"
/// (or, at the root, the client default). Decorations are tri-state:
/// unset, explicitly on, or explicitly off.
///
/// A `Style` held by a node records the node's *explicit* overrides
/// only. The fully resolved formatting of a node is computed on demand
/// by folding [`Style::merge`] from the root down.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub color: Option<Color>,
    pub font: Option<String>,
    pub insertion: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underlined: Option<bool>,
    pub strikethrough: Option<bool>,
    pub obfuscated: Option<bool>,
    pub click: Option<ClickEvent>,
    pub hover: Option<HoverEvent>,
}

impl Style {
    /// Create a new all-unset style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every attribute is unset.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.font.is_none()
            && self.insertion.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underlined.is_none()
            && self.strikethrough.is_none()
            && self.obfuscated.is_none()
            && self.click.is_none()
            && self.hover.is_none()
    }

    /// The tri-state value of a decoration.
    pub fn decoration(&self, decoration: Decoration) -> Option<bool> {
        match decoration {
            Decoration::Bold => self.bold,
            Decoration::Italic => self.italic,
            Decoration::Underlined => self.underlined,
            Decoration::Strikethrough => self.strikethrough,
            Decoration::Obfuscated => self.obfuscated,
        }
    }

    /// Set a decoration's tri-state value.
    pub fn set_decoration(&mut self, decoration: Decoration, state: Option<bool>) {
        match decoration {
            Decoration::Bold => self.bold = state,
            Decoration::Italic => self.italic = state,
            Decoration::Underlined => self.underlined = state,
            Decoration::Strikethrough => self.strikethrough = state,
            Decoration::Obfuscated => self.obfuscated = state,
        }
    }

    /// Whether a decoration renders as active. Unset resolves to off.
    pub fn is_decorated(&self, decoration: Decoration) -> bool {
        self.decoration(decoration).unwrap_or(false)
    }

    /// Layer another style on top of this one.
    ///
    /// Every attribute set in `overlay` wins, including click and hover
    /// events. This is the combination used when several open tags
    /// contribute to a single node's explicit style.
    pub fn apply(&self, overlay: &Style) -> Style {
        Style {
            color: overlay.color.or(self.color),
            font: overlay.font.clone().or_else(|| self.font.clone()),
            insertion: overlay.insertion.clone().or_else(|| self.insertion.clone()),
            bold: overlay.bold.or(self.bold),
            italic: overlay.italic.or(self.italic),
            underlined: overlay.underlined.or(self.underlined),
            strikethrough: overlay.strikethrough.or(self.strikethrough),
            obfuscated: overlay.obfuscated.or(self.obfuscated),
            click: overlay.click.clone().or_else(|| self.click.clone()),
            hover: overlay.hover.clone().or_else(|| self.hover.clone()),
        }
    }

    /// Resolve a child's effective style under this parent style.
    ///
    /// Scalars and decorations fall back to the parent's value when the
    /// child leaves them unset. Click and hover events are never
    /// inherited: the result carries the child's events or none at all,
    /// regardless of what the parent has.
    pub fn merge(&self, child: &Style) -> Style {
        Style {
            color: child.color.or(self.color),
            font: child.font.clone().or_else(|| self.font.clone()),
            insertion: child.insertion.clone().or_else(|| self.insertion.clone()),
            bold: child.bold.or(self.bold),
            italic: child.italic.or(self.italic),
            underlined: child.underlined.or(self.underlined),
            strikethrough: child.strikethrough.or(self.strikethrough),
            obfuscated: child.obfuscated.or(self.obfuscated),
            click: child.click.clone(),
            hover: child.hover.clone(),
        }
    }
}
