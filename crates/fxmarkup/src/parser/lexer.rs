//! Lexer for effect markup.
//!
//! Splits input into plain text spans and raw tag bodies.

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum RawToken<'a> {
    /// Plain text content.
    Text(&'a str),
    /// Tag body without braces: `wave=2,speed=3` or `/wave`.
    Tag(&'a str),
}

/// Lexer for effect markup text.
///
/// A `{` without a matching `}` is not an error: the remainder of the input
/// is returned as text.
///
/// # Examples
///
/// ```
/// use fxmarkup::parser::{Lexer, RawToken};
///
/// let tokens: Vec<_> = Lexer::new("{wave}Hello{/wave}").collect();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], RawToken::Text("Hello"));
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume text up to the next `{` or end of input.
    fn consume_text(&mut self) -> &'a str {
        let rest = self.remaining();
        let len = rest.find('{').unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Consume a tag (including the braces). Falls back to text when the
    /// tag is never closed.
    fn consume_tag(&mut self) -> RawToken<'a> {
        let rest = self.remaining();
        match rest.find('}') {
            Some(end) => {
                self.pos += end + 1;
                RawToken::Tag(&rest[1..end])
            }
            None => {
                self.pos = self.input.len();
                RawToken::Text(rest)
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = RawToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        if self.remaining().starts_with('{') {
            Some(self.consume_tag())
        } else {
            Some(RawToken::Text(self.consume_text()))
        }
    }
}
