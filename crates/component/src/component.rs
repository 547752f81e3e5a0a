//! The recursive styled-text tree.

use crate::color::Color;
use crate::event::{ClickEvent, HoverEvent};
use crate::style::{Decoration, Style};

/// Where an NBT content node reads its data from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NbtSource {
    Block,
    Entity,
    Storage,
}

impl NbtSource {
    /// Canonical lowercase keyword.
    pub fn name(&self) -> &'static str {
        match self {
            NbtSource::Block => "block",
            NbtSource::Entity => "entity",
            NbtSource::Storage => "storage",
        }
    }

    /// Look up a source by keyword.
    pub fn from_name(name: &str) -> Option<NbtSource> {
        match name {
            "block" => Some(NbtSource::Block),
            "entity" => Some(NbtSource::Entity),
            "storage" => Some(NbtSource::Storage),
            _ => None,
        }
    }
}

/// What a component node displays.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// Plain text.
    Literal { text: String },
    /// A translation key with positional arguments.
    Translatable { key: String, args: Vec<Component> },
    /// A scoreboard value.
    Score { name: String, objective: String },
    /// A key binding, resolved client-side.
    Keybind { id: String },
    /// An entity selector, with an optional separator between matches.
    Selector {
        pattern: String,
        separator: Option<Box<Component>>,
    },
    /// An NBT path lookup against a block, entity, or storage target.
    Nbt {
        source: NbtSource,
        target: String,
        path: String,
    },
}

/// A full component node: content, explicit style overrides, and
/// an ordered list of owned children.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentNode {
    pub content: Content,
    pub style: Style,
    pub children: Vec<Component>,
}

impl ComponentNode {
    /// Create a node with no styling and no children.
    pub fn new(content: Content) -> Self {
        Self {
            content,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Resolve this node's effective style under `parent`.
    pub fn effective_style(&self, parent: &Style) -> Style {
        parent.merge(&self.style)
    }
}

/// An immutable styled-text tree.
///
/// Mirrors the three-shape content model of the wire representation: a
/// bare string, a list, or a full node. Trees are value types; every
/// "modification" builds a new tree that owns its subtrees exclusively.
///
/// # Examples
///
/// ```
/// use component::{Color, Component, Decoration, NamedColor};
///
/// let message = Component::text("Hello")
///     .color(Some(Color::Named(NamedColor::Red)))
///     .append(Component::text(" world").decoration(Decoration::Bold, Some(true)));
///
/// assert!(message.has_styling());
/// assert_eq!(message.children().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Component {
    /// Bare text shorthand, no styling of its own.
    Text(String),
    /// A sequence of sibling components.
    List(Vec<Component>),
    /// A full node.
    Node(Box<ComponentNode>),
}

impl Component {
    /// A plain text node.
    pub fn text(text: impl Into<String>) -> Self {
        Component::Node(Box::new(ComponentNode::new(Content::Literal {
            text: text.into(),
        })))
    }

    /// A translatable node with positional arguments.
    pub fn translatable(key: impl Into<String>, args: Vec<Component>) -> Self {
        Component::Node(Box::new(ComponentNode::new(Content::Translatable {
            key: key.into(),
            args,
        })))
    }

    /// A scoreboard value node.
    pub fn score(name: impl Into<String>, objective: impl Into<String>) -> Self {
        Component::Node(Box::new(ComponentNode::new(Content::Score {
            name: name.into(),
            objective: objective.into(),
        })))
    }

    /// A key binding node.
    pub fn keybind(id: impl Into<String>) -> Self {
        Component::Node(Box::new(ComponentNode::new(Content::Keybind {
            id: id.into(),
        })))
    }

    /// An entity selector node.
    pub fn selector(pattern: impl Into<String>, separator: Option<Component>) -> Self {
        Component::Node(Box::new(ComponentNode::new(Content::Selector {
            pattern: pattern.into(),
            separator: separator.map(Box::new),
        })))
    }

    /// An NBT path node.
    pub fn nbt(source: NbtSource, target: impl Into<String>, path: impl Into<String>) -> Self {
        Component::Node(Box::new(ComponentNode::new(Content::Nbt {
            source,
            target: target.into(),
            path: path.into(),
        })))
    }

    /// Replace this component's explicit style.
    ///
    /// Shorthand shapes are promoted to full nodes first.
    pub fn styled(self, style: Style) -> Self {
        self.map_node(|mut node| {
            node.style = style;
            node
        })
    }

    /// Set the color.
    pub fn color(self, color: Option<Color>) -> Self {
        self.map_node(|mut node| {
            node.style.color = color;
            node
        })
    }

    /// Set the font.
    pub fn font(self, font: Option<String>) -> Self {
        self.map_node(|mut node| {
            node.style.font = font;
            node
        })
    }

    /// Set the shift-click insertion text.
    pub fn insertion(self, insertion: Option<String>) -> Self {
        self.map_node(|mut node| {
            node.style.insertion = insertion;
            node
        })
    }

    /// Set one decoration's tri-state value.
    pub fn decoration(self, decoration: Decoration, state: Option<bool>) -> Self {
        self.map_node(|mut node| {
            node.style.set_decoration(decoration, state);
            node
        })
    }

    /// Set the click event.
    pub fn click(self, event: Option<ClickEvent>) -> Self {
        self.map_node(|mut node| {
            node.style.click = event;
            node
        })
    }

    /// Set the hover event.
    pub fn hover(self, event: Option<HoverEvent>) -> Self {
        self.map_node(|mut node| {
            node.style.hover = event;
            node
        })
    }

    /// Append a child component.
    pub fn append(self, child: impl Into<Component>) -> Self {
        let child = child.into();
        match self {
            Component::List(mut items) => {
                items.push(child);
                Component::List(items)
            }
            other => other.map_node(|mut node| {
                node.children.push(child);
                node
            }),
        }
    }

    /// Append a newline child.
    pub fn append_newline(self) -> Self {
        self.append(Component::text("\n"))
    }

    /// Append a single-space child.
    pub fn append_space(self) -> Self {
        self.append(Component::text(" "))
    }

    /// The node's children (empty for shorthand shapes' own children;
    /// a list's items are its children).
    pub fn children(&self) -> &[Component] {
        match self {
            Component::Text(_) => &[],
            Component::List(items) => items,
            Component::Node(node) => &node.children,
        }
    }

    /// The explicit style, if this is a full node.
    pub fn style(&self) -> Option<&Style> {
        match self {
            Component::Node(node) => Some(&node.style),
            _ => None,
        }
    }

    /// The full node, if this component is one.
    pub fn as_node(&self) -> Option<&ComponentNode> {
        match self {
            Component::Node(node) => Some(node),
            _ => None,
        }
    }

    /// The literal text, for bare strings and literal nodes.
    pub fn literal_text(&self) -> Option<&str> {
        match self {
            Component::Text(text) => Some(text),
            Component::Node(node) => match &node.content {
                Content::Literal { text } => Some(text),
                _ => None,
            },
            Component::List(_) => None,
        }
    }

    /// Whether any explicit style attribute is set on this component.
    pub fn has_styling(&self) -> bool {
        self.style().is_some_and(|style| !style.is_empty())
    }

    /// Visit every literal leaf together with its effective style,
    /// folded from `parent` down.
    pub fn walk_literals<F>(&self, parent: &Style, f: &mut F)
    where
        F: FnMut(&str, &Style),
    {
        match self {
            Component::Text(text) => f(text, parent),
            Component::List(items) => {
                for item in items {
                    item.walk_literals(parent, f);
                }
            }
            Component::Node(node) => {
                let effective = node.effective_style(parent);
                if let Content::Literal { text } = &node.content {
                    f(text, &effective);
                }
                for child in &node.children {
                    child.walk_literals(&effective, f);
                }
            }
        }
    }

    /// Promote to a full node and rebuild it through `f`.
    fn map_node<F>(self, f: F) -> Self
    where
        F: FnOnce(ComponentNode) -> ComponentNode,
    {
        let node = match self {
            Component::Text(text) => ComponentNode::new(Content::Literal { text }),
            Component::List(items) => ComponentNode {
                content: Content::Literal {
                    text: String::new(),
                },
                style: Style::default(),
                children: items,
            },
            Component::Node(node) => *node,
        };
        Component::Node(Box::new(f(node)))
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Component::Text(text.to_string())
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Component::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    #[test]
    fn builders_chain() {
        let comp = Component::text("hi")
            .color(Some(Color::Named(NamedColor::Gold)))
            .decoration(Decoration::Bold, Some(true))
            .append(Component::text("there"));

        let node = comp.as_node().unwrap();
        assert_eq!(node.style.color, Some(Color::Named(NamedColor::Gold)));
        assert_eq!(node.style.bold, Some(true));
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn shorthand_promotes_on_styling() {
        let comp = Component::from("plain").color(Some(Color::Named(NamedColor::Red)));
        assert_eq!(comp.literal_text(), Some("plain"));
        assert!(comp.has_styling());
    }

    #[test]
    fn list_append_stays_a_list() {
        let list = Component::List(vec![Component::from("a")]).append("b");
        assert_eq!(list.children().len(), 2);
    }

    #[test]
    fn list_promotes_to_grouping_node_on_styling() {
        let list = Component::List(vec![Component::from("a"), Component::from("b")])
            .color(Some(Color::Named(NamedColor::Aqua)));
        let node = list.as_node().unwrap();
        assert_eq!(node.content, Content::Literal { text: String::new() });
        assert_eq!(node.children.len(), 2);
    }

    #[test]
    fn walk_literals_folds_effective_style() {
        let tree = Component::text("outer")
            .color(Some(Color::Named(NamedColor::Green)))
            .append(Component::text("inner").decoration(Decoration::Bold, Some(true)));

        let mut seen = Vec::new();
        tree.walk_literals(&Style::default(), &mut |text, style| {
            seen.push((text.to_string(), style.clone()));
        });

        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, "outer");
        assert_eq!(seen[0].1.color, Some(Color::Named(NamedColor::Green)));
        assert_eq!(seen[1].0, "inner");
        assert_eq!(seen[1].1.color, Some(Color::Named(NamedColor::Green)));
        assert!(seen[1].1.is_decorated(Decoration::Bold));
    }

    #[test]
    fn content_kinds() {
        let t = Component::translatable("chat.type.say", vec![Component::from("arg")]);
        assert!(matches!(
            t.as_node().unwrap().content,
            Content::Translatable { .. }
        ));

        let s = Component::selector("@p", Some(Component::from(", ")));
        match &s.as_node().unwrap().content {
            Content::Selector { pattern, separator } => {
                assert_eq!(pattern, "@p");
                assert!(separator.is_some());
            }
            other => panic!("unexpected content: {other:?}"),
        }

        let n = Component::nbt(NbtSource::Storage, "mypack:data", "items[0]");
        assert!(matches!(n.as_node().unwrap().content, Content::Nbt { .. }));
    }
}
