//! Tag vocabulary: name canonicalization and resolution of a scanned
//! tag into its effect on the parse.

use component::{ClickEvent, Color, Component, HoverEvent, NamedColor, NbtSource, Style};
use phf::phf_map;

use crate::MiniMessageConfig;
use crate::error::ParseError;

/// Alias to canonical tag name.
static TAG_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "bold" => "bold",
    "b" => "bold",
    "italic" => "italic",
    "i" => "italic",
    "em" => "italic",
    "underlined" => "underlined",
    "u" => "underlined",
    "strikethrough" => "strikethrough",
    "st" => "strikethrough",
    "obfuscated" => "obfuscated",
    "obf" => "obfuscated",
    "black" => "black",
    "dark_blue" => "dark_blue",
    "dark_green" => "dark_green",
    "dark_aqua" => "dark_aqua",
    "dark_red" => "dark_red",
    "dark_purple" => "dark_purple",
    "gold" => "gold",
    "gray" => "gray",
    "grey" => "gray",
    "dark_gray" => "dark_gray",
    "dark_grey" => "dark_gray",
    "blue" => "blue",
    "green" => "green",
    "aqua" => "aqua",
    "red" => "red",
    "light_purple" => "light_purple",
    "yellow" => "yellow",
    "white" => "white",
    "color" => "color",
    "colour" => "color",
    "c" => "color",
    "font" => "font",
    "insert" => "insertion",
    "insertion" => "insertion",
    "click" => "click",
    "hover" => "hover",
    "reset" => "reset",
    "lang" => "lang",
    "translate" => "lang",
    "tr" => "lang",
    "key" => "key",
    "keybind" => "key",
    "score" => "score",
    "selector" => "selector",
    "sel" => "selector",
    "nbt" => "nbt",
    "data" => "nbt",
    "newline" => "newline",
    "br" => "newline",
};

/// Canonical identity of a tag name, or `None` when unrecognized.
/// Hex color tags (`#rrggbb`) canonicalize to `color`.
pub(crate) fn canonical_name(name: &str) -> Option<&'static str> {
    let lower = name.to_ascii_lowercase();
    if lower.starts_with('#') {
        return Some("color");
    }
    TAG_ALIASES.get(lower.as_str()).copied()
}

/// The effect of an opening tag on the parse.
#[derive(Debug)]
pub(crate) enum Resolved {
    /// A style tag: pushed on the open-tag stack under its canonical
    /// name, contributing a style fragment.
    Fragment {
        canonical: &'static str,
        style: Style,
    },
    /// A self-contained content tag: inserts a node, no stack change.
    Content(Component),
    /// Clears the whole stack.
    Reset,
    /// Not part of the vocabulary (or arguments it cannot accept).
    Unknown,
}

fn fragment(canonical: &'static str, style: Style) -> Resolved {
    Resolved::Fragment { canonical, style }
}

fn color_fragment(canonical: &'static str, color: Color) -> Resolved {
    fragment(
        canonical,
        Style {
            color: Some(color),
            ..Default::default()
        },
    )
}

/// Resolve a scanned tag against the vocabulary.
///
/// Nested component arguments (hover text, translation arguments,
/// selector separators) are parsed recursively with the same
/// configuration, so strict-mode violations inside them propagate.
pub(crate) fn resolve(
    name: &str,
    args: &[String],
    config: &MiniMessageConfig,
) -> Result<Resolved, ParseError> {
    let lower = name.to_ascii_lowercase();

    if lower.starts_with('#') {
        return Ok(match Color::parse(&lower) {
            Ok(color) => color_fragment("color", color),
            Err(_) => Resolved::Unknown,
        });
    }

    let Some(canonical) = TAG_ALIASES.get(lower.as_str()).copied() else {
        return Ok(Resolved::Unknown);
    };

    let resolved = match canonical {
        "bold" => fragment(
            canonical,
            Style {
                bold: Some(true),
                ..Default::default()
            },
        ),
        "italic" => fragment(
            canonical,
            Style {
                italic: Some(true),
                ..Default::default()
            },
        ),
        "underlined" => fragment(
            canonical,
            Style {
                underlined: Some(true),
                ..Default::default()
            },
        ),
        "strikethrough" => fragment(
            canonical,
            Style {
                strikethrough: Some(true),
                ..Default::default()
            },
        ),
        "obfuscated" => fragment(
            canonical,
            Style {
                obfuscated: Some(true),
                ..Default::default()
            },
        ),

        "color" => match args.first().map(|arg| Color::parse(arg)) {
            Some(Ok(color)) => color_fragment(canonical, color),
            _ => Resolved::Unknown,
        },

        "font" => match args.first() {
            Some(font) => fragment(
                canonical,
                Style {
                    font: Some(font.clone()),
                    ..Default::default()
                },
            ),
            None => Resolved::Unknown,
        },

        "insertion" => match args.first() {
            Some(text) => fragment(
                canonical,
                Style {
                    insertion: Some(text.clone()),
                    ..Default::default()
                },
            ),
            None => Resolved::Unknown,
        },

        "click" => match args {
            [action, value, ..] => match ClickEvent::from_parts(action, value) {
                Some(event) => fragment(
                    canonical,
                    Style {
                        click: Some(event),
                        ..Default::default()
                    },
                ),
                None => Resolved::Unknown,
            },
            _ => Resolved::Unknown,
        },

        "hover" => match resolve_hover(args, config)? {
            Some(event) => fragment(
                canonical,
                Style {
                    hover: Some(event),
                    ..Default::default()
                },
            ),
            None => Resolved::Unknown,
        },

        "reset" => Resolved::Reset,

        "lang" => match args.split_first() {
            Some((key, rest)) => {
                let mut lang_args = Vec::with_capacity(rest.len());
                for arg in rest {
                    lang_args.push(parse_nested(arg, config)?);
                }
                Resolved::Content(Component::translatable(key.clone(), lang_args))
            }
            None => Resolved::Unknown,
        },

        "key" => match args.first() {
            Some(id) => Resolved::Content(Component::keybind(id.clone())),
            None => Resolved::Unknown,
        },

        "score" => match args {
            [name, objective, ..] => {
                Resolved::Content(Component::score(name.clone(), objective.clone()))
            }
            _ => Resolved::Unknown,
        },

        "selector" => match args.split_first() {
            Some((pattern, rest)) => {
                let separator = match rest.first() {
                    Some(sep) => Some(parse_nested(sep, config)?),
                    None => None,
                };
                Resolved::Content(Component::selector(pattern.clone(), separator))
            }
            None => Resolved::Unknown,
        },

        "nbt" => match args {
            [source, target, path, ..] => match NbtSource::from_name(source) {
                Some(source) => {
                    Resolved::Content(Component::nbt(source, target.clone(), path.clone()))
                }
                None => Resolved::Unknown,
            },
            _ => Resolved::Unknown,
        },

        "newline" => Resolved::Content(Component::text("\n")),

        // everything left in the alias table is a color name
        other => match NamedColor::from_name(other) {
            Some(named) => color_fragment(canonical, Color::Named(named)),
            None => Resolved::Unknown,
        },
    };

    Ok(resolved)
}

fn resolve_hover(
    args: &[String],
    config: &MiniMessageConfig,
) -> Result<Option<HoverEvent>, ParseError> {
    let event = match args {
        [action, value, ..] if action == "show_text" => Some(HoverEvent::ShowText {
            value: parse_nested(value, config)?,
        }),
        [action, id, rest @ ..] if action == "show_item" => Some(HoverEvent::ShowItem {
            id: id.clone(),
            count: rest.first().and_then(|c| c.parse::<i32>().ok()),
            nbt: rest.get(1).cloned(),
        }),
        [action, kind, uuid, rest @ ..] if action == "show_entity" => {
            let name = match rest.first() {
                Some(name) => Some(parse_nested(name, config)?),
                None => None,
            };
            Some(HoverEvent::ShowEntity {
                kind: kind.clone(),
                uuid: uuid.clone(),
                name,
            })
        }
        _ => None,
    };
    Ok(event)
}

fn parse_nested(input: &str, config: &MiniMessageConfig) -> Result<Component, ParseError> {
    super::tree::parse(input, config)
}
