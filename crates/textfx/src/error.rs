use fxmarkup::MarkupError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextFxError {
    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),

    #[error("Effect `{0}` is already registered")]
    DuplicateEffect(String),

    #[error("Unknown effect `{0}`: no effect with that name is registered")]
    UnknownEffect(String),

    #[error("Close tag `{{/{0}}}` has no matching open tag")]
    UnmatchedCloseTag(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, TextFxError>;
