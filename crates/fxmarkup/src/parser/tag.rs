//! Tag body parser for effect markup.
//!
//! Parses the content inside `{...}` tags.

use nom::{
    IResult,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res, opt, recognize, rest},
    sequence::{delimited, pair, separated_pair, tuple},
};

use crate::error::MarkupError;
use crate::token::{EffectArgs, Token};

/// Parse a signed integer or decimal number. Literals too large for an
/// `f64` are rejected.
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(()),
        },
    )(input)
}

/// Parse a tag name: the longest leading run of letters.
fn parse_name(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_alphabetic())(input)
}

/// Parse an argument key (word characters).
fn parse_key(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

/// Parse a `key=value` segment, leaving the value unparsed.
fn parse_pair(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(delimited(space0, parse_key, space0), char('='), rest)(input)
}

fn name_of(input: &str) -> &str {
    parse_name(input).map_or("", |(_, name)| name)
}

/// Parse a numeric argument value, rejecting trailing garbage.
///
/// ```
/// use fxmarkup::parser::parse_value;
///
/// assert_eq!(parse_value("-2.5"), Some(-2.5));
/// assert_eq!(parse_value("12"), Some(12.0));
/// assert_eq!(parse_value("1.2.3"), None);
/// assert_eq!(parse_value("x"), None);
/// ```
pub fn parse_value(value: &str) -> Option<f64> {
    all_consuming(parse_number)(value).ok().map(|(_, n)| n)
}

/// Parse tag content (the text inside `{...}`) into a token.
///
/// # Examples
///
/// ```
/// use fxmarkup::Token;
/// use fxmarkup::parser::parse_tag;
///
/// assert_eq!(parse_tag("/wave").unwrap(), Token::close("wave"));
///
/// let Token::Open { name, args } = parse_tag("wave=2.5,speed=3").unwrap() else {
///     panic!("expected an open tag");
/// };
/// assert_eq!(name, "wave");
/// assert_eq!(args.value(), Some(2.5));
/// assert_eq!(args.get("speed"), Some(3.0));
/// ```
pub fn parse_tag(body: &str) -> Result<Token, MarkupError> {
    let body = body.trim();

    // Close tag: {/name}
    if let Some(rest) = body.strip_prefix('/') {
        return Ok(Token::Close(name_of(rest.trim_start()).to_string()));
    }

    let name = name_of(body);
    let mut args = EffectArgs::new(name);

    for segment in body.split(',') {
        // Segments that aren't `key=value` carry nothing.
        let Ok((_, (key, value))) = parse_pair(segment) else {
            continue;
        };
        let value = value.trim();
        let number = parse_value(value).ok_or_else(|| MarkupError::InvalidArgument {
            key: key.to_string(),
            value: value.to_string(),
        })?;
        args.insert(key, number);
    }

    Ok(Token::Open {
        name: name.to_string(),
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(body: &str) -> (String, EffectArgs) {
        match parse_tag(body).unwrap() {
            Token::Open { name, args } => (name, args),
            other => panic!("Expected Open, got {other:?}"),
        }
    }

    #[test]
    fn parse_bare_name() {
        let (name, args) = open("bold");
        assert_eq!(name, "bold");
        assert_eq!(args.name(), "bold");
        assert!(args.is_empty());
    }

    #[test]
    fn parse_name_slot_value() {
        let (name, args) = open("wave=2.5");
        assert_eq!(name, "wave");
        assert_eq!(args.get("wave"), Some(2.5));
    }

    #[test]
    fn parse_keyed_args() {
        let (name, args) = open("wave, amp=-3, frequency=0.25");
        assert_eq!(name, "wave");
        assert_eq!(args.get("amp"), Some(-3.0));
        assert_eq!(args.get("frequency"), Some(0.25));
        assert_eq!(args.value(), None);
    }

    #[test]
    fn parse_name_stops_at_non_letter() {
        let (name, args) = open("wave2");
        assert_eq!(name, "wave");
        assert!(args.is_empty());
    }

    #[test]
    fn parse_segments_without_value_are_ignored() {
        let (_, args) = open("shake,loud,amp=1");
        assert_eq!(args.len(), 1);
        assert_eq!(args.get("amp"), Some(1.0));
    }

    #[test]
    fn parse_close() {
        assert_eq!(parse_tag("/wave").unwrap(), Token::close("wave"));
        assert_eq!(parse_tag(" / wave ").unwrap(), Token::close("wave"));
    }

    #[test]
    fn parse_close_ignores_args() {
        assert_eq!(parse_tag("/wave=x").unwrap(), Token::close("wave"));
    }

    #[test]
    fn parse_empty_body() {
        let (name, args) = open("");
        assert_eq!(name, "");
        assert!(args.is_empty());
    }

    #[test]
    fn parse_non_numeric_value() {
        assert_eq!(
            parse_tag("shake=x"),
            Err(MarkupError::InvalidArgument {
                key: "shake".to_string(),
                value: "x".to_string(),
            })
        );
    }

    #[test]
    fn parse_rejects_overflowing_number() {
        let huge = "9".repeat(400);
        assert_eq!(parse_value(&huge), None);
        assert_eq!(
            parse_tag(&format!("rotate={huge}")),
            Err(MarkupError::InvalidArgument {
                key: "rotate".to_string(),
                value: huge.clone(),
            })
        );
        assert_eq!(parse_value(&format!("-{huge}")), None);
    }

    #[test]
    fn parse_empty_value() {
        assert_eq!(
            parse_tag("wave,speed="),
            Err(MarkupError::InvalidArgument {
                key: "speed".to_string(),
                value: String::new(),
            })
        );
    }

    #[test]
    fn parse_value_forms() {
        assert_eq!(parse_value("0"), Some(0.0));
        assert_eq!(parse_value("-7"), Some(-7.0));
        assert_eq!(parse_value("3.75"), Some(3.75));
        assert_eq!(parse_value("3."), None);
        assert_eq!(parse_value(".5"), None);
        assert_eq!(parse_value("+1"), None);
        assert_eq!(parse_value(""), None);
    }
}
