//! Canonical MiniMessage serialization.
//!
//! Walks a component tree depth-first, emitting only the tags whose
//! effect actually changes at each node and closing them in reverse
//! order of opening, so the output is always well-nested.

use component::{Color, Component, ComponentNode, Content, Decoration, HoverEvent, Style};

use crate::error::SerializeError;

/// Serialize a component tree into MiniMessage markup.
///
/// The tree is assumed well-formed; no validation happens here. Fails
/// only when a style combination has no tag form, and never produces
/// partial output on failure.
pub fn serialize(component: &Component) -> Result<String, SerializeError> {
    let mut out = String::new();
    emit(component, &Style::default(), &mut out)?;
    Ok(out)
}

fn emit(component: &Component, parent: &Style, out: &mut String) -> Result<(), SerializeError> {
    match component {
        Component::Text(text) => {
            push_escaped(text, out);
            Ok(())
        }
        Component::List(items) => {
            for item in items {
                emit(item, parent, out)?;
            }
            Ok(())
        }
        Component::Node(node) => emit_node(node, parent, out),
    }
}

fn emit_node(node: &ComponentNode, parent: &Style, out: &mut String) -> Result<(), SerializeError> {
    let effective = node.effective_style(parent);
    let opened = style_delta(parent, &effective)?;

    for tag in &opened {
        out.push('<');
        out.push_str(&tag.open);
        out.push('>');
    }

    // click/hover wrap only this node's own content: they never
    // inherit, so they must not stay open across child boundaries
    let mut actions: Vec<(String, &'static str)> = Vec::new();
    if let Some(click) = &node.style.click {
        actions.push((
            format!("click:{}:{}", click.action(), quote(click.value())),
            "click",
        ));
    }
    if let Some(hover) = &node.style.hover {
        actions.push((hover_tag(hover)?, "hover"));
    }

    for (open, _) in &actions {
        out.push('<');
        out.push_str(open);
        out.push('>');
    }

    emit_content(&node.content, out)?;

    for (_, close) in actions.iter().rev() {
        out.push_str("</");
        out.push_str(close);
        out.push('>');
    }

    for child in &node.children {
        emit(child, &effective, out)?;
    }

    for tag in opened.iter().rev() {
        out.push_str("</");
        out.push_str(tag.close);
        out.push('>');
    }

    Ok(())
}

/// One tag opened for a style change at a node.
struct DeltaTag {
    open: String,
    close: &'static str,
}

/// The minimal tag set whose combined effect turns `parent` into
/// `effective`.
fn style_delta(parent: &Style, effective: &Style) -> Result<Vec<DeltaTag>, SerializeError> {
    let mut tags = Vec::new();

    if effective.color != parent.color {
        if let Some(color) = effective.color {
            match color.simplified() {
                Color::Named(named) => tags.push(DeltaTag {
                    open: named.name().to_string(),
                    close: named.name(),
                }),
                Color::Rgb(..) => tags.push(DeltaTag {
                    open: format!("color:{}", color.simplified()),
                    close: "color",
                }),
            }
        }
    }

    for decoration in Decoration::ALL {
        let was = parent.is_decorated(decoration);
        let wanted = effective.is_decorated(decoration);
        if wanted && !was {
            tags.push(DeltaTag {
                open: decoration.name().to_string(),
                close: decoration.name(),
            });
        } else if was && !wanted {
            return Err(SerializeError::UnrepresentableStyle(format!(
                "no tag turns {} off inside an active context",
                decoration.name()
            )));
        }
    }

    if effective.font != parent.font {
        if let Some(font) = &effective.font {
            tags.push(DeltaTag {
                open: format!("font:{}", maybe_quote(font)),
                close: "font",
            });
        }
    }

    if effective.insertion != parent.insertion {
        if let Some(insertion) = &effective.insertion {
            tags.push(DeltaTag {
                open: format!("insert:{}", quote(insertion)),
                close: "insert",
            });
        }
    }

    Ok(tags)
}

fn emit_content(content: &Content, out: &mut String) -> Result<(), SerializeError> {
    match content {
        Content::Literal { text } => {
            push_escaped(text, out);
        }
        Content::Translatable { key, args } => {
            out.push_str("<lang:");
            out.push_str(&maybe_quote(key));
            for arg in args {
                out.push(':');
                out.push_str(&quote(&serialize(arg)?));
            }
            out.push('>');
        }
        Content::Score { name, objective } => {
            out.push_str("<score:");
            out.push_str(&maybe_quote(name));
            out.push(':');
            out.push_str(&maybe_quote(objective));
            out.push('>');
        }
        Content::Keybind { id } => {
            out.push_str("<key:");
            out.push_str(&maybe_quote(id));
            out.push('>');
        }
        Content::Selector { pattern, separator } => {
            out.push_str("<selector:");
            out.push_str(&quote(pattern));
            if let Some(separator) = separator {
                out.push(':');
                out.push_str(&quote(&serialize(separator)?));
            }
            out.push('>');
        }
        Content::Nbt {
            source,
            target,
            path,
        } => {
            out.push_str("<nbt:");
            out.push_str(source.name());
            out.push(':');
            out.push_str(&quote(target));
            out.push(':');
            out.push_str(&quote(path));
            out.push('>');
        }
    }
    Ok(())
}

fn hover_tag(hover: &HoverEvent) -> Result<String, SerializeError> {
    let tag = match hover {
        HoverEvent::ShowText { value } => {
            format!("hover:show_text:{}", quote(&serialize(value)?))
        }
        HoverEvent::ShowItem { id, count, nbt } => {
            let mut tag = format!("hover:show_item:{}", maybe_quote(id));
            if count.is_some() || nbt.is_some() {
                tag.push(':');
                tag.push_str(&count.unwrap_or(1).to_string());
            }
            if let Some(nbt) = nbt {
                tag.push(':');
                tag.push_str(&quote(nbt));
            }
            tag
        }
        HoverEvent::ShowEntity { kind, uuid, name } => {
            let mut tag = format!(
                "hover:show_entity:{}:{}",
                maybe_quote(kind),
                maybe_quote(uuid)
            );
            if let Some(name) = name {
                tag.push(':');
                tag.push_str(&quote(&serialize(name)?));
            }
            tag
        }
    };
    Ok(tag)
}

/// Literal text with every `<` escaped.
fn push_escaped(text: &str, out: &mut String) {
    for c in text.chars() {
        if c == '<' {
            out.push('\\');
        }
        out.push(c);
    }
}

/// Single-quote a tag argument, escaping quotes and backslashes.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

/// Quote only when the bare form would not rescan as one argument.
fn maybe_quote(value: &str) -> String {
    let needs_quoting = value.is_empty()
        || value
            .chars()
            .any(|c| matches!(c, ':' | '<' | '>' | '\'' | '"' | '\\') || c.is_whitespace());
    if needs_quoting {
        quote(value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use component::{ClickEvent, NamedColor};

    fn named(color: NamedColor) -> Option<Color> {
        Some(Color::Named(color))
    }

    #[test]
    fn plain_text_passes_through() {
        let out = serialize(&Component::from("Hello")).unwrap();
        assert_eq!(out, "Hello");
    }

    #[test]
    fn literal_brackets_are_escaped() {
        let out = serialize(&Component::from("1 < 2")).unwrap();
        assert_eq!(out, r"1 \< 2");
    }

    #[test]
    fn color_opens_and_closes() {
        let comp = Component::text("hi").color(named(NamedColor::Red));
        assert_eq!(serialize(&comp).unwrap(), "<red>hi</red>");
    }

    #[test]
    fn rgb_matching_a_name_folds_to_it() {
        let comp = Component::text("hi").color(Some(Color::Rgb(0xFF, 0x55, 0x55)));
        assert_eq!(serialize(&comp).unwrap(), "<red>hi</red>");
    }

    #[test]
    fn rgb_without_a_name_uses_color_tag() {
        let comp = Component::text("hi").color(Some(Color::Rgb(1, 2, 3)));
        assert_eq!(serialize(&comp).unwrap(), "<color:#010203>hi</color>");
    }

    #[test]
    fn inherited_color_is_not_reemitted() {
        let comp = Component::text("a")
            .color(named(NamedColor::Red))
            .append(Component::text("b").color(named(NamedColor::Red)));
        assert_eq!(serialize(&comp).unwrap(), "<red>ab</red>");
    }

    #[test]
    fn click_wraps_only_its_node() {
        let comp = Component::text("run")
            .click(Some(ClickEvent::RunCommand {
                command: "/seed".to_string(),
            }))
            .append(Component::text(" after"));
        assert_eq!(
            serialize(&comp).unwrap(),
            "<click:run_command:'/seed'>run</click> after"
        );
    }

    #[test]
    fn hover_text_nests_serialized_markup() {
        let tooltip = Component::text("tip").color(named(NamedColor::Gray));
        let comp = Component::text("item").hover(Some(HoverEvent::ShowText { value: tooltip }));
        assert_eq!(
            serialize(&comp).unwrap(),
            "<hover:show_text:'<gray>tip</gray>'>item</hover>"
        );
    }

    #[test]
    fn disabling_active_decoration_is_unrepresentable() {
        let comp = Component::text("a")
            .decoration(Decoration::Bold, Some(true))
            .append(Component::text("b").decoration(Decoration::Bold, Some(false)));
        assert!(matches!(
            serialize(&comp),
            Err(SerializeError::UnrepresentableStyle(_))
        ));
    }

    #[test]
    fn explicit_off_without_context_needs_no_tag() {
        let comp = Component::text("a").decoration(Decoration::Bold, Some(false));
        assert_eq!(serialize(&comp).unwrap(), "a");
    }

    #[test]
    fn quoting_escapes_specials() {
        assert_eq!(quote(r"it's \ here"), r"'it\'s \\ here'");
        assert_eq!(maybe_quote("plain"), "plain");
        assert_eq!(maybe_quote("a:b"), "'a:b'");
        assert_eq!(maybe_quote(""), "''");
    }

    #[test]
    fn content_kinds_serialize() {
        assert_eq!(
            serialize(&Component::score("Player1", "kills")).unwrap(),
            "<score:Player1:kills>"
        );
        assert_eq!(
            serialize(&Component::keybind("key.jump")).unwrap(),
            "<key:key.jump>"
        );
        assert_eq!(
            serialize(&Component::selector("@e[limit=1]", None)).unwrap(),
            "<selector:'@e[limit=1]'>"
        );
        assert_eq!(
            serialize(&Component::nbt(
                component::NbtSource::Storage,
                "mypack:data",
                "items[0]"
            ))
            .unwrap(),
            "<nbt:storage:'mypack:data':'items[0]'>"
        );
    }

    #[test]
    fn translatable_args_are_quoted_markup() {
        let comp = Component::translatable(
            "chat.type.say",
            vec![Component::text("Steve").color(named(NamedColor::Aqua))],
        );
        assert_eq!(
            serialize(&comp).unwrap(),
            "<lang:chat.type.say:'<aqua>Steve</aqua>'>"
        );
    }
}
