//! Markup source: a format string or a pre-built token stream.

use crate::error::MarkupError;
use crate::token::Token;

/// Input accepted wherever markup is expected.
///
/// Callers can pass a raw format string, which is tokenized on demand, or a
/// token stream they built themselves, which bypasses tokenization entirely.
///
/// # Examples
///
/// ```
/// use fxmarkup::{Markup, Token};
///
/// let from_str: Markup = "{red}Hi{/red}".into();
/// let from_tokens: Markup = vec![Token::open("red"), Token::text("Hi"), Token::close("red")].into();
/// assert_eq!(from_str.into_tokens().unwrap(), from_tokens.into_tokens().unwrap());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Markup {
    /// A format string such as `{wave}Hello{/wave}`.
    Format(String),
    /// An already tokenized stream.
    Tokens(Vec<Token>),
}

impl Markup {
    /// Resolve this source into a token stream.
    pub fn into_tokens(self) -> Result<Vec<Token>, MarkupError> {
        match self {
            Markup::Format(format) => crate::parser::parse(&format),
            Markup::Tokens(tokens) => Ok(tokens),
        }
    }
}

impl From<&str> for Markup {
    fn from(format: &str) -> Self {
        Markup::Format(format.to_string())
    }
}

impl From<String> for Markup {
    fn from(format: String) -> Self {
        Markup::Format(format)
    }
}

impl From<Vec<Token>> for Markup {
    fn from(tokens: Vec<Token>) -> Self {
        Markup::Tokens(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_pass_through_untouched() {
        // Braces inside a hand-built text token are literal.
        let tokens = vec![Token::text("{not a tag}"), Token::open_with("x", [("k", 1.0)])];
        let markup = Markup::from(tokens.clone());
        assert_eq!(markup.into_tokens().unwrap(), tokens);
    }

    #[test]
    fn format_is_parsed() {
        let markup = Markup::from(String::from("{shake=x}a"));
        assert!(markup.into_tokens().is_err());
    }
}
