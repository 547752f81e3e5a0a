//! Legacy `&`-code preprocessing.
//!
//! Rewrites two-character legacy sequences into tag syntax in a single
//! linear pass, before tokenization, so the injected tags take part in
//! normal tag-stack handling.

use std::borrow::Cow;

use component::{Decoration, NamedColor};
use phf::phf_map;

/// Legacy code character to tag name, lowercase codes only.
static LEGACY_CODES: phf::Map<char, &'static str> = phf_map! {
    '0' => "black",
    '1' => "dark_blue",
    '2' => "dark_green",
    '3' => "dark_aqua",
    '4' => "dark_red",
    '5' => "dark_purple",
    '6' => "gold",
    '7' => "gray",
    '8' => "dark_gray",
    '9' => "blue",
    'a' => "green",
    'b' => "aqua",
    'c' => "red",
    'd' => "light_purple",
    'e' => "yellow",
    'f' => "white",
    'k' => "obfuscated",
    'l' => "bold",
    'm' => "strikethrough",
    'n' => "underlined",
    'o' => "italic",
    'r' => "reset",
};

/// The tag name a legacy code character maps to, if any.
/// Codes are matched case-insensitively.
pub(crate) fn tag_for_code(code: char) -> Option<&'static str> {
    LEGACY_CODES.get(&code.to_ascii_lowercase()).copied()
}

/// The legacy code character for a named color.
pub(crate) fn code_for_color(color: NamedColor) -> char {
    // legacy code order matches NamedColor::ALL
    let index = NamedColor::ALL
        .iter()
        .position(|c| *c == color)
        .unwrap_or(0);
    char::from_digit(index as u32, 16).unwrap_or('f')
}

/// The legacy code character for a decoration.
pub(crate) fn code_for_decoration(decoration: Decoration) -> char {
    match decoration {
        Decoration::Obfuscated => 'k',
        Decoration::Bold => 'l',
        Decoration::Strikethrough => 'm',
        Decoration::Underlined => 'n',
        Decoration::Italic => 'o',
    }
}

/// Rewrite `&`-prefixed legacy codes into equivalent tags.
///
/// Recognized two-character sequences become `<color_name>` or
/// decoration tags; `&r` becomes `<reset>`. Anything else after `&`
/// passes through unchanged. Returns the input untouched when it
/// contains no `&` at all.
pub fn rewrite_legacy_codes(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    let mut chars = input.chars().peekable();
    let mut rewritten = 0usize;

    while let Some(c) = chars.next() {
        if c == '&' {
            if let Some(tag) = chars.peek().copied().and_then(tag_for_code) {
                out.push('<');
                out.push_str(tag);
                out.push('>');
                chars.next();
                rewritten += 1;
                continue;
            }
        }
        out.push(c);
    }

    log::trace!("rewrote {rewritten} legacy codes");
    Cow::Owned(out)
}
