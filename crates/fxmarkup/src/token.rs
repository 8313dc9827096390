//! Token stream types produced by the parser.

use std::collections::BTreeMap;

/// Numeric arguments carried by an opening tag.
///
/// The effect name is always available as the positional entry via
/// [`EffectArgs::name`]. A value written directly after the name
/// (`{wave=2.5}`) is stored under the name itself, so effects read their
/// "primary" argument with [`EffectArgs::value`].
///
/// # Examples
///
/// ```
/// use fxmarkup::EffectArgs;
///
/// let args = EffectArgs::new("wave").with("wave", 2.5).with("speed", 3.0);
/// assert_eq!(args.name(), "wave");
/// assert_eq!(args.value(), Some(2.5));
/// assert_eq!(args.get_or("speed", 1.0), 3.0);
/// assert_eq!(args.get_or("missing", 1.0), 1.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectArgs {
    name: String,
    values: BTreeMap<String, f64>,
}

impl EffectArgs {
    /// Create an empty argument map for the named effect.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    /// The effect name this argument map belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Move the argument map to another effect name.
    ///
    /// Keyed values are kept; the name slot now reads the entry stored
    /// under `name`, if any.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The value attached to the name slot, e.g. `2.5` for `{wave=2.5}`.
    pub fn value(&self) -> Option<f64> {
        self.values.get(&self.name).copied()
    }

    /// Get an argument by key.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Get an argument by key, falling back to `default` when absent.
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    /// Set an argument, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    /// Number of keyed arguments (the positional name is not counted).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the tag carried no `key=value` pairs.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over keyed arguments in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// A single element of a parsed markup stream.
///
/// Tokens are produced by [`parse`](crate::parse) but callers may also build
/// streams by hand and hand them to the engine directly.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A run of plain text between tags.
    Text(String),
    /// An opening tag: `{wave}` or `{wave=2,speed=3}`.
    Open { name: String, args: EffectArgs },
    /// A closing tag: `{/wave}`.
    Close(String),
}

impl Token {
    /// Create a text token.
    pub fn text(content: impl Into<String>) -> Self {
        Token::Text(content.into())
    }

    /// Create an opening tag with no arguments.
    pub fn open(name: impl Into<String>) -> Self {
        let name = name.into();
        Token::Open {
            args: EffectArgs::new(name.clone()),
            name,
        }
    }

    /// Create an opening tag with the given `key=value` arguments.
    pub fn open_with<K: Into<String>>(
        name: impl Into<String>,
        args: impl IntoIterator<Item = (K, f64)>,
    ) -> Self {
        let name = name.into();
        let mut effect_args = EffectArgs::new(name.clone());
        for (key, value) in args {
            effect_args.insert(key, value);
        }
        Token::Open {
            name,
            args: effect_args,
        }
    }

    /// Create a closing tag.
    pub fn close(name: impl Into<String>) -> Self {
        Token::Close(name.into())
    }

    /// Returns true for [`Token::Text`].
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    /// The tag name for open and close tokens.
    pub fn name(&self) -> Option<&str> {
        match self {
            Token::Text(_) => None,
            Token::Open { name, .. } | Token::Close(name) => Some(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_sets_positional_name() {
        let token = Token::open("bold");
        match token {
            Token::Open { name, args } => {
                assert_eq!(name, "bold");
                assert_eq!(args.name(), "bold");
                assert!(args.is_empty());
            }
            _ => panic!("Expected Open"),
        }
    }

    #[test]
    fn open_with_collects_args() {
        let token = Token::open_with("wave", [("amp", 2.0), ("frequency", 0.25)]);
        let Token::Open { args, .. } = token else {
            panic!("Expected Open");
        };
        assert_eq!(args.len(), 2);
        assert_eq!(args.get("amp"), Some(2.0));
        assert_eq!(args.value(), None);
    }

    #[test]
    fn token_helpers() {
        assert!(Token::text("a").is_text());
        assert_eq!(Token::text("a").name(), None);
        assert_eq!(Token::close("wave").name(), Some("wave"));
        assert_eq!(Token::open("wave").name(), Some("wave"));
    }

    #[test]
    fn renamed_moves_the_name_slot() {
        let args = EffectArgs::new("other").with("other", 3.0).with("scale", 2.0);
        let args = args.renamed("scale");
        assert_eq!(args.name(), "scale");
        assert_eq!(args.value(), Some(2.0));
        assert_eq!(args.get("other"), Some(3.0));
    }

    #[test]
    fn args_insert_replaces() {
        let mut args = EffectArgs::new("x");
        args.insert("a", 1.0);
        args.insert("a", 2.0);
        assert_eq!(args.get("a"), Some(2.0));
        assert_eq!(args.iter().collect::<Vec<_>>(), vec![("a", 2.0)]);
    }
}
