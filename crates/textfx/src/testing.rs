//! Test utilities for snapshot testing glyph output.
//!
//! # Example
//! ```
//! use textfx::testing::render;
//! use textfx::EffectRegistry;
//!
//! let glyphs = render("{offset,y=2}ab{/offset}c", &EffectRegistry::with_builtins()).unwrap();
//! assert_eq!(glyphs.len(), 3);
//! assert_eq!(glyphs[1].y(), 2.0);
//! ```

use std::fmt::Write;

use crate::engine;
use crate::error::Result;
use crate::font::MonospaceFont;
use crate::glyph::Glyph;
use crate::options::EngineOptions;
use crate::registry::EffectRegistry;
use crate::sink::GlyphBatch;

/// Parse and apply `markup` with a one-unit monospace font and default
/// options, returning the glyphs.
pub fn render(markup: &str, registry: &EffectRegistry) -> Result<Vec<Glyph>> {
    let tokens = fxmarkup::parse(markup)?;
    let mut batch = GlyphBatch::new();
    engine::apply(
        &tokens,
        registry,
        &MonospaceFont::default(),
        &EngineOptions::default(),
        &mut batch,
    )?;
    Ok(batch.into_glyphs())
}

/// Format glyphs as a fixed-width table, one glyph per line.
///
/// Numbers are rounded to two decimals so snapshots stay stable.
pub fn glyph_table(glyphs: &[Glyph]) -> String {
    let mut out = String::new();
    for glyph in glyphs {
        let s = &glyph.state;
        let _ = writeln!(
            out,
            "{} x={:.2} y={:.2} rgba=({:.2},{:.2},{:.2},{:.2}) scale=({:.2},{:.2}) skew=({:.2},{:.2}) rot={:.2}",
            glyph.ch,
            glyph.x(),
            glyph.y(),
            s.color.r,
            s.color.g,
            s.color.b,
            s.color.a,
            s.scale.x,
            s.scale.y,
            s.skew.x,
            s.skew.y,
            s.rotation,
        );
    }
    out
}
