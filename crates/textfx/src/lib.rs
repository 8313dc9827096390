//! Per-glyph text effects driven by inline markup.
//!
//! Markup such as `{wave=2}Hello{/wave} {red}world{/red}` is parsed into a
//! token stream by [`fxmarkup`] and replayed by the [`engine`]: every
//! character gets a fresh [`GlyphState`], every effect whose tag is open
//! mutates it in turn, and the resulting [`Glyph`] is streamed into a
//! [`GlyphSink`] owned by the rendering backend.
//!
//! ```
//! use textfx::{EffectRegistry, GlyphBatch, MonospaceFont, RichText};
//!
//! let registry = EffectRegistry::with_builtins();
//! let font = MonospaceFont::new(8.0);
//! let mut text = RichText::new(&font, "{wave=3}Hello{/wave}!", &registry, GlyphBatch::new())?;
//! text.update()?;
//! assert_eq!(text.text(), "Hello!");
//! assert_eq!(text.width(), 48.0);
//! # Ok::<(), textfx::TextFxError>(())
//! ```

pub mod effects;
pub mod engine;
pub mod error;
pub mod font;
pub mod glyph;
mod grapheme;
pub mod instance;
mod log_init;
pub mod options;
pub mod registry;
pub mod scope;
pub mod sink;
pub mod testing;

pub use engine::{Applied, apply};
pub use error::{Result, TextFxError};
pub use font::{Font, MonospaceFont};
pub use glyph::{CharInfo, Glyph, GlyphState, Rgba, Vec2};
pub use instance::RichText;
pub use log_init::init_logger;
pub use options::EngineOptions;
pub use registry::{EffectDefinition, EffectFn, EffectRegistry};
pub use scope::ActiveScope;
pub use sink::{DrawTransform, GlyphBatch, GlyphSink};

// Re-export the markup layer so callers only need one dependency.
pub use fxmarkup::{EffectArgs, Markup, MarkupError, Token, parse, strip};

// Re-export the log crate so users can use textfx::log::info!, etc.
pub use log;
