//! Tree builder: consumes the token stream, maintains the open-tag
//! stack, and produces a component tree.

use component::{Component, Style};

use crate::MiniMessageConfig;
use crate::error::ParseError;

use super::lexer::{Lexer, TagToken, Token};
use super::tags::{self, Resolved};

/// Parse MiniMessage markup into a component tree.
///
/// In lenient mode (the default) this never fails: unknown tags flow
/// through as literal text and stray closers are ignored. In strict
/// mode the first structural violation aborts the parse.
pub fn parse(input: &str, config: &MiniMessageConfig) -> Result<Component, ParseError> {
    let mut parser = Parser::new(config);
    for token in Lexer::new(input) {
        parser.process(token)?;
    }
    parser.finish()
}

/// An entry on the open-tag stack.
struct OpenTag {
    canonical: &'static str,
    fragment: Style,
    position: usize,
}

struct Parser<'c> {
    config: &'c MiniMessageConfig,
    open_tags: Vec<OpenTag>,
    /// Pending literal run; adjacent text tokens coalesce here.
    text: String,
    /// Accumulated top-level parts.
    parts: Vec<Component>,
}

impl<'c> Parser<'c> {
    fn new(config: &'c MiniMessageConfig) -> Self {
        Self {
            config,
            open_tags: Vec::new(),
            text: String::new(),
            parts: Vec::new(),
        }
    }

    /// The style every open tag together contributes right now.
    fn current_style(&self) -> Style {
        self.open_tags
            .iter()
            .fold(Style::default(), |acc, tag| acc.apply(&tag.fragment))
    }

    /// Flush the pending text run into a part.
    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        let style = self.current_style();
        let part = if style.is_empty() {
            Component::Text(text)
        } else {
            Component::text(text).styled(style)
        };
        self.parts.push(part);
    }

    fn process(&mut self, token: Token<'_>) -> Result<(), ParseError> {
        match token {
            Token::Text(run) => {
                self.text.push_str(run);
                Ok(())
            }
            Token::Open(tag) => self.open_tag(tag),
            Token::Close { name, position } => self.close_tag(name, position),
        }
    }

    fn open_tag(&mut self, tag: TagToken<'_>) -> Result<(), ParseError> {
        match tags::resolve(tag.name, &tag.args, self.config)? {
            Resolved::Fragment { canonical, style } => {
                self.flush_text();
                if tag.self_closing {
                    // an empty node carrying the fragment, no stack change
                    let style = self.current_style().apply(&style);
                    self.parts.push(Component::text("").styled(style));
                } else {
                    log::trace!("open <{canonical}> at {}", tag.position);
                    self.open_tags.push(OpenTag {
                        canonical,
                        fragment: style,
                        position: tag.position,
                    });
                }
            }
            Resolved::Content(component) => {
                self.flush_text();
                let style = self.current_style();
                let part = if style.is_empty() {
                    component
                } else {
                    component.styled(style)
                };
                self.parts.push(part);
            }
            Resolved::Reset => {
                self.flush_text();
                self.open_tags.clear();
            }
            Resolved::Unknown => {
                if self.config.strict {
                    return Err(ParseError::UnknownTag {
                        name: tag.name.to_ascii_lowercase(),
                        position: tag.position,
                    });
                }
                // lenient: the raw tag text joins the current run
                self.text.push_str(tag.raw);
            }
        }
        Ok(())
    }

    fn close_tag(&mut self, name: &str, position: usize) -> Result<(), ParseError> {
        let Some(canonical) = tags::canonical_name(name) else {
            if self.config.strict {
                return Err(ParseError::UnknownTag {
                    name: name.to_ascii_lowercase(),
                    position,
                });
            }
            // lenient: an unknown closer is literal text, like an unknown open tag
            self.text.push_str("</");
            self.text.push_str(name);
            self.text.push('>');
            return Ok(());
        };

        if canonical == "reset" {
            self.flush_text();
            self.open_tags.clear();
            return Ok(());
        }

        let matches_top = self
            .open_tags
            .last()
            .is_some_and(|top| top.canonical == canonical);
        if matches_top {
            self.flush_text();
            self.open_tags.pop();
            return Ok(());
        }

        if self.config.strict {
            return Err(match self.open_tags.last() {
                Some(top) => ParseError::MismatchedCloser {
                    expected: top.canonical.to_string(),
                    found: name.to_ascii_lowercase(),
                    position,
                },
                None => ParseError::UnexpectedCloser {
                    name: name.to_ascii_lowercase(),
                    position,
                },
            });
        }

        // lenient: a closer that matches nothing is a no-op
        Ok(())
    }

    fn finish(mut self) -> Result<Component, ParseError> {
        if self.config.strict {
            if let Some(top) = self.open_tags.last() {
                return Err(ParseError::UnclosedTag {
                    name: top.canonical.to_string(),
                    position: top.position,
                });
            }
        }
        self.flush_text();

        let mut parts = self.parts;
        match parts.len() {
            1 => Ok(parts.remove(0)),
            _ => Ok(Component::List(parts)),
        }
    }
}
