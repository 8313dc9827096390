//! Engine configuration.

use crate::glyph::GlyphState;

/// Options controlling how tokens are turned into glyphs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineOptions {
    /// State every character is reset to before effects run.
    pub base: GlyphState,
    /// Log a warning for tags still open at the end of the stream.
    pub warn_unclosed: bool,
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: GlyphState) -> Self {
        self.base = base;
        self
    }

    pub fn with_warn_unclosed(mut self, warn_unclosed: bool) -> Self {
        self.warn_unclosed = warn_unclosed;
        self
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            base: GlyphState::default(),
            warn_unclosed: true,
        }
    }
}
