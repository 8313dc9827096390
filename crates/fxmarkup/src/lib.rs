//! Effect markup parser for per-glyph text effects.
//!
//! This crate tokenizes text like `{wave=2}Hello{/wave} World` into a typed
//! token stream that an effect engine can replay character by character.
//!
//! # Overview
//!
//! The markup format uses curly braces for tags:
//!
//! - `{wave}text{/wave}` - Open and close the `wave` effect
//! - `{wave=2.5}` - Numeric value attached to the name slot
//! - `{wave,amp=2,frequency=0.5}` - Extra `key=value` arguments
//! - `{/wave}` - Close the named effect
//!
//! Argument values must be numbers (`-1`, `2`, `0.25`). Anything else fails
//! with [`MarkupError::InvalidArgument`]. Tag names are not checked here;
//! whether an effect exists is decided later, against a registry.
//!
//! # Usage
//!
//! ```
//! use fxmarkup::{parse, strip, Token};
//!
//! let tokens = parse("{wave=2.5}Hi{/wave}!").unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[3], Token::text("!"));
//! assert_eq!(strip("{wave=2.5}Hi{/wave}!"), "Hi!");
//! ```

pub mod error;
pub mod markup;
pub mod parser;
pub mod token;

// Re-export main types at crate root
pub use error::MarkupError;
pub use markup::Markup;
pub use parser::{parse, strip};
pub use token::{EffectArgs, Token};
