//! Main markup parser.
//!
//! Combines the lexer and tag parser to produce a token stream.

use crate::error::MarkupError;
use crate::token::Token;

use super::lexer::{Lexer, RawToken};
use super::tag::parse_tag;

/// Parses effect markup into an ordered token stream.
///
/// Adjacent text spans are merged, so every [`Token::Text`] covers the whole
/// run of characters between two tags.
///
/// # Examples
///
/// ```
/// use fxmarkup::{parse, Token};
///
/// let tokens = parse("{bold}abc{/bold}").unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::open("bold"), Token::text("abc"), Token::close("bold")]
/// );
/// ```
pub fn parse(input: &str) -> Result<Vec<Token>, MarkupError> {
    let mut tokens = Vec::new();

    for raw in Lexer::new(input) {
        match raw {
            RawToken::Text(text) => push_text(&mut tokens, text),
            RawToken::Tag(body) => tokens.push(parse_tag(body)?),
        }
    }

    Ok(tokens)
}

/// Returns the plain text of `input` with every `{...}` tag span removed.
///
/// Tag bodies are not validated, so this never fails.
///
/// ```
/// assert_eq!(fxmarkup::strip("{red}Hi{/red}!"), "Hi!");
/// ```
pub fn strip(input: &str) -> String {
    Lexer::new(input)
        .filter_map(|raw| match raw {
            RawToken::Text(text) => Some(text),
            RawToken::Tag(_) => None,
        })
        .collect()
}

fn push_text(tokens: &mut Vec<Token>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Token::Text(last)) = tokens.last_mut() {
        last.push_str(text);
    } else {
        tokens.push(Token::Text(text.to_string()));
    }
}
