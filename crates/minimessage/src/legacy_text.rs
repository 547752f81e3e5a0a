//! Legacy `&`-code text format.
//!
//! A second, much smaller format behind the same trait pair: parsing
//! can represent colors and decorations only, and serialization fails
//! on anything richer. Useful for config files and chat pipelines that
//! predate tag markup.

use std::convert::Infallible;

use component::{
    Color, Component, ComponentParser, ComponentSerializer, Decoration, NamedColor, Style,
};

use crate::error::SerializeError;
use crate::legacy::{code_for_color, code_for_decoration, tag_for_code};

/// The legacy `&`-code format.
///
/// # Examples
///
/// ```
/// use component::{ComponentParser, ComponentSerializer};
/// use minimessage::LegacyText;
///
/// let legacy = LegacyText::new();
/// let tree = legacy.parse("&aHello").unwrap();
/// assert_eq!(legacy.serialize(&tree).unwrap(), "&aHello");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LegacyText;

impl LegacyText {
    /// Creates a new legacy format instance.
    pub fn new() -> Self {
        LegacyText
    }
}

impl ComponentParser for LegacyText {
    type Err = Infallible;

    /// Parse legacy codes into a flat run of styled literals.
    ///
    /// A color code resets all decorations; `&r` resets everything.
    /// Unrecognized sequences stay literal text. Never fails.
    fn parse(&self, input: impl AsRef<str>) -> Result<Component, Self::Err> {
        let input = input.as_ref();
        let mut style = Style::default();
        let mut text = String::new();
        let mut parts = Vec::new();
        let mut chars = input.chars().peekable();

        let mut flush = |style: &Style, text: &mut String, parts: &mut Vec<Component>| {
            if text.is_empty() {
                return;
            }
            let run = std::mem::take(text);
            let part = if style.is_empty() {
                Component::Text(run)
            } else {
                Component::text(run).styled(style.clone())
            };
            parts.push(part);
        };

        while let Some(c) = chars.next() {
            if c == '&' {
                if let Some(tag) = chars.peek().copied().and_then(tag_for_code) {
                    chars.next();
                    flush(&style, &mut text, &mut parts);
                    apply_code(&mut style, tag);
                    continue;
                }
            }
            text.push(c);
        }
        flush(&style, &mut text, &mut parts);

        let component = match parts.len() {
            1 => parts.remove(0),
            _ => Component::List(parts),
        };
        Ok(component)
    }
}

/// Mutate the running style the way a legacy client would.
fn apply_code(style: &mut Style, tag: &str) {
    if tag == "reset" {
        *style = Style::default();
        return;
    }
    if let Some(named) = NamedColor::from_name(tag) {
        // a color code discards prior decorations
        *style = Style {
            color: Some(Color::Named(named)),
            ..Default::default()
        };
        return;
    }
    for decoration in Decoration::ALL {
        if decoration.name() == tag {
            style.set_decoration(decoration, Some(true));
        }
    }
}

impl ComponentSerializer for LegacyText {
    type Err = SerializeError;

    /// Serialize to legacy codes.
    ///
    /// Fails for styles the code table cannot express: RGB colors
    /// without a named equivalent, fonts, insertions, click or hover
    /// events, and decorations explicitly forced off.
    fn serialize(&self, component: &Component) -> Result<String, Self::Err> {
        let mut out = String::new();
        let mut emitted = Style::default();
        let mut failure = None;

        component.walk_literals(&Style::default(), &mut |text, style| {
            if failure.is_some() {
                return;
            }
            match emit_run(text, style, &mut emitted) {
                Ok(run) => out.push_str(&run),
                Err(err) => failure = Some(err),
            }
        });

        match failure {
            Some(err) => Err(err),
            None => Ok(out),
        }
    }
}

fn emit_run(text: &str, style: &Style, emitted: &mut Style) -> Result<String, SerializeError> {
    if style.font.is_some()
        || style.insertion.is_some()
        || style.click.is_some()
        || style.hover.is_some()
    {
        return Err(SerializeError::UnrepresentableStyle(
            "legacy codes carry colors and decorations only".to_string(),
        ));
    }

    let color = match style.color.map(|c| c.simplified()) {
        Some(Color::Named(named)) => Some(named),
        Some(rgb @ Color::Rgb(..)) => {
            return Err(SerializeError::UnrepresentableStyle(format!(
                "no legacy code for {rgb}"
            )));
        }
        None => None,
    };

    let mut run = String::new();
    let same_color = emitted.color == color.map(Color::Named);
    let lost_decoration = Decoration::ALL
        .iter()
        .any(|d| emitted.is_decorated(*d) && !style.is_decorated(*d));

    // a color code implicitly clears decorations, so emit it (or a
    // reset) whenever something must be switched off
    if !same_color || lost_decoration {
        match color {
            Some(named) => {
                run.push('&');
                run.push(code_for_color(named));
            }
            None if !emitted.is_empty() => run.push_str("&r"),
            None => {}
        }
        *emitted = Style {
            color: color.map(Color::Named),
            ..Default::default()
        };
    }

    for decoration in Decoration::ALL {
        if style.is_decorated(decoration) && !emitted.is_decorated(decoration) {
            run.push('&');
            run.push(code_for_decoration(decoration));
            emitted.set_decoration(decoration, Some(true));
        }
    }

    run.push_str(text);
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(input: &str) -> String {
        let legacy = LegacyText::new();
        let tree = legacy.parse(input).unwrap();
        legacy.serialize(&tree).unwrap()
    }

    #[test]
    fn parses_colored_runs() {
        let legacy = LegacyText::new();
        let tree = legacy.parse("&aHello &bWorld!").unwrap();

        let mut runs = Vec::new();
        tree.walk_literals(&Style::default(), &mut |text, style| {
            runs.push((text.to_string(), style.color));
        });
        assert_eq!(
            runs,
            vec![
                (
                    "Hello ".to_string(),
                    Some(Color::Named(NamedColor::Green))
                ),
                ("World!".to_string(), Some(Color::Named(NamedColor::Aqua))),
            ]
        );
    }

    #[test]
    fn color_code_clears_decorations() {
        let legacy = LegacyText::new();
        let tree = legacy.parse("&l&abold? no").unwrap();
        let style = tree.style().unwrap();
        assert_eq!(style.bold, None);
        assert_eq!(style.color, Some(Color::Named(NamedColor::Green)));
    }

    #[test]
    fn unrecognized_codes_stay_literal() {
        let legacy = LegacyText::new();
        let tree = legacy.parse("50 & 60 &z").unwrap();
        assert_eq!(tree, Component::Text("50 & 60 &z".to_string()));
    }

    #[test]
    fn simple_roundtrips() {
        assert_eq!(roundtrip("&aHello"), "&aHello");
        assert_eq!(roundtrip("&c&lstop&r go"), "&c&lstop&r go");
        assert_eq!(roundtrip("plain"), "plain");
    }

    #[test]
    fn rich_styles_fail_serialization() {
        let legacy = LegacyText::new();
        let tree = Component::text("x").font(Some("uniform".to_string()));
        assert!(matches!(
            legacy.serialize(&tree),
            Err(SerializeError::UnrepresentableStyle(_))
        ));

        let rgb = Component::text("x").color(Some(Color::Rgb(1, 2, 3)));
        assert!(matches!(
            legacy.serialize(&rgb),
            Err(SerializeError::UnrepresentableStyle(_))
        ));
    }
}
