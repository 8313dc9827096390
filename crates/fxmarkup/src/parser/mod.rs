//! Parser for effect markup.
//!
//! This module contains the lexer, tag parser, and main markup parser.

mod lexer;
mod markup;
mod tag;

pub use lexer::{Lexer, RawToken};
pub use markup::{parse, strip};
pub use tag::{parse_tag, parse_value};
