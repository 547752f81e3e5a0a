//! Tokenizer for MiniMessage markup.
//!
//! Converts input text into a lazy stream of tokens. Malformed tag
//! syntax is never an error here: anything that does not scan as a
//! complete tag falls back to literal text.

/// An opening tag scanned from the input.
#[derive(Clone, Debug, PartialEq)]
pub struct TagToken<'a> {
    /// Tag name, exactly as written (matched case-insensitively later).
    pub name: &'a str,
    /// `:`-separated arguments, unquoted and unescaped.
    pub args: Vec<String>,
    /// Whether the tag ended with `/>`.
    pub self_closing: bool,
    /// Byte offset of the opening `<`.
    pub position: usize,
    /// The full `<...>` source slice.
    pub raw: &'a str,
}

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Literal text run.
    Text(&'a str),
    /// Opening tag: `<name>`, `<name:arg>`, `<name/>`.
    Open(TagToken<'a>),
    /// Closing tag: `</name>`.
    Close { name: &'a str, position: usize },
}

/// Lexer for MiniMessage text.
///
/// A finite, non-restartable iterator over [`Token`]s.
///
/// # Examples
///
/// ```
/// use minimessage::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("<bold>Hello</bold>").collect();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], Token::Text("Hello"));
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '#')
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume text up to the next `<` or escaped `<`.
    fn consume_text(&mut self) -> &'a str {
        let start = self.pos;

        while let Some(c) = self.peek() {
            match c {
                '<' => break,
                '\\' if self.remaining()[1..].starts_with('<') => break,
                _ => {
                    self.advance();
                }
            }
        }

        &self.input[start..self.pos]
    }

    /// Attempt to scan a complete tag starting at the current `<`.
    ///
    /// Returns `None` without consuming anything on malformed syntax;
    /// the caller then treats the `<` as literal text.
    fn consume_tag(&mut self) -> Option<Token<'a>> {
        let start = self.pos;
        let mut scan = Scanner {
            input: self.input,
            pos: self.pos,
        };

        let token = scan.tag(start);
        if token.is_some() {
            self.pos = scan.pos;
        }
        token
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        // escaped `<`: emit the bare bracket as text
        if self.remaining().starts_with("\\<") {
            let bracket = &self.input[self.pos + 1..self.pos + 2];
            self.pos += 2;
            return Some(Token::Text(bracket));
        }

        if self.peek() == Some('<') {
            if let Some(token) = self.consume_tag() {
                return Some(token);
            }
            // malformed: the `<` itself becomes text, scanning resumes after it
            let bracket = &self.input[self.pos..self.pos + 1];
            self.pos += 1;
            return Some(Token::Text(bracket));
        }

        Some(Token::Text(self.consume_text()))
    }
}

/// Cursor for a single tag scan attempt.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn name(&mut self) -> Option<&'a str> {
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.advance();
        }
        (self.pos > start).then(|| &self.input[start..self.pos])
    }

    fn tag(&mut self, start: usize) -> Option<Token<'a>> {
        self.advance(); // consume '<'

        if self.peek() == Some('/') {
            self.advance();
            let name = self.name()?;
            if self.peek() != Some('>') {
                return None;
            }
            self.advance();
            return Some(Token::Close {
                name,
                position: start,
            });
        }

        let name = self.name()?;
        let mut args = Vec::new();
        let mut self_closing = false;

        loop {
            match self.peek() {
                Some('>') => {
                    self.advance();
                    break;
                }
                Some(':') => {
                    self.advance();
                    args.push(self.argument()?);
                }
                Some('/') => {
                    self.advance();
                    if self.peek() != Some('>') {
                        return None;
                    }
                    self.advance();
                    self_closing = true;
                    break;
                }
                _ => return None,
            }
        }

        Some(Token::Open(TagToken {
            name,
            args,
            self_closing,
            position: start,
            raw: &self.input[start..self.pos],
        }))
    }

    fn argument(&mut self) -> Option<String> {
        match self.peek() {
            Some(quote @ ('\'' | '"')) => {
                self.advance();
                self.quoted(quote)
            }
            _ => self.unquoted(),
        }
    }

    /// Quoted argument body; backslash escapes the next character.
    fn quoted(&mut self, quote: char) -> Option<String> {
        let mut value = String::new();
        loop {
            let c = self.advance()?;
            if c == quote {
                return Some(value);
            }
            if c == '\\' {
                value.push(self.advance()?);
            } else {
                value.push(c);
            }
        }
    }

    /// Unquoted argument: runs to the next top-level `:` or `>`,
    /// skipping over balanced `<...>` spans so embedded markup stays
    /// one argument.
    fn unquoted(&mut self) -> Option<String> {
        let start = self.pos;
        let mut depth = 0usize;
        loop {
            match self.peek()? {
                '<' => {
                    depth += 1;
                    self.advance();
                }
                '>' if depth > 0 => {
                    depth -= 1;
                    self.advance();
                }
                '>' | ':' => break,
                _ => {
                    self.advance();
                }
            }
        }
        Some(self.input[start..self.pos].to_string())
    }
}
