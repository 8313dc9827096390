//! Inline-markup text effects.
//!
//! Facade over the two workspace crates:
//!
//! - [`fxmarkup`]: parses `{wave=2}Hello{/wave}` into a token stream.
//! - [`textfx`]: registry, effect engine, glyph sinks and [`RichText`].
//!
//! ```
//! use textfx_rs::{DrawTransform, EffectRegistry, GlyphBatch, MonospaceFont, RichText};
//!
//! let registry = EffectRegistry::with_builtins();
//! let font = MonospaceFont::new(8.0);
//! let mut text = RichText::new(&font, "{rainbow}Hi{/rainbow}!", &registry, GlyphBatch::new())?;
//! text.update()?;
//! text.draw(&DrawTransform::at(16.0, 16.0));
//! assert_eq!(text.sink().len(), 3);
//! # Ok::<(), textfx_rs::TextFxError>(())
//! ```

pub use fxmarkup;
pub use textfx::*;
