//! Error types for effect markup parsing.

use thiserror::Error;

/// Errors that can occur when parsing effect markup.
///
/// Parsing stops at the first error; no partial token sequence is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarkupError {
    /// A `key=value` pair inside a tag whose value is not a number.
    ///
    /// ```
    /// use fxmarkup::{parse, MarkupError};
    ///
    /// let err = parse("{shake=x}a").unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     MarkupError::InvalidArgument { key: "shake".into(), value: "x".into() }
    /// );
    /// ```
    #[error("invalid value for argument `{key}`: `{value}` is not a number")]
    InvalidArgument {
        /// The argument key as written in the tag.
        key: String,
        /// The raw, unparsed value.
        value: String,
    },
}
