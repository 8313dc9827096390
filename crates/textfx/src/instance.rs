//! RichText: a piece of effect markup bound to a font, registry and sink.

use fxmarkup::{Markup, Token};

use crate::engine;
use crate::error::Result;
use crate::font::Font;
use crate::glyph::Glyph;
use crate::options::EngineOptions;
use crate::registry::EffectRegistry;
use crate::sink::{DrawTransform, GlyphBatch, GlyphSink};

/// A renderable piece of effect markup.
///
/// Holds the parsed token stream and owns the glyph sink. The font and the
/// registry are borrowed for the lifetime of the instance and never mutated.
///
/// [`update`](Self::update) re-runs the engine and rebuilds the sink from
/// scratch; [`draw`](Self::draw) hands the current sink contents to the
/// backend without recomputing anything.
///
/// # Examples
///
/// ```
/// use textfx::{DrawTransform, EffectRegistry, GlyphBatch, MonospaceFont, RichText, Rgba};
///
/// let mut registry = EffectRegistry::new();
/// registry
///     .add_effect("red", |state, _, _| state.color = Rgba::new(1.0, 0.0, 0.0, 1.0))
///     .unwrap();
///
/// let font = MonospaceFont::new(8.0);
/// let mut text = RichText::new(&font, "{red}Hi{/red}!", &registry, GlyphBatch::new()).unwrap();
/// text.update().unwrap();
/// text.draw(&DrawTransform::at(10.0, 20.0));
///
/// assert_eq!(text.text(), "Hi!");
/// assert_eq!(text.sink().glyphs()[0].color(), Rgba::new(1.0, 0.0, 0.0, 1.0));
/// assert_eq!(text.sink().glyphs()[2].color(), Rgba::WHITE);
/// ```
pub struct RichText<'a, F: ?Sized, S> {
    font: &'a F,
    registry: &'a EffectRegistry,
    tokens: Vec<Token>,
    options: EngineOptions,
    text: String,
    width: f32,
    staged: GlyphBatch,
    sink: S,
}

impl<'a, F, S> RichText<'a, F, S>
where
    F: Font + ?Sized,
    S: GlyphSink,
{
    /// Create an instance from a format string or a pre-built token stream.
    ///
    /// Fails only if a format string does not parse. Unknown effects and
    /// unmatched close tags are reported by [`update`](Self::update).
    pub fn new(
        font: &'a F,
        markup: impl Into<Markup>,
        registry: &'a EffectRegistry,
        sink: S,
    ) -> Result<Self> {
        let markup: Markup = markup.into();
        Ok(Self {
            font,
            registry,
            tokens: markup.into_tokens()?,
            options: EngineOptions::default(),
            text: String::new(),
            width: 0.0,
            staged: GlyphBatch::new(),
            sink,
        })
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the markup. Takes effect on the next [`update`](Self::update);
    /// the sink keeps its current contents until then.
    pub fn set_markup(&mut self, markup: impl Into<Markup>) -> Result<()> {
        let markup: Markup = markup.into();
        self.tokens = markup.into_tokens()?;
        Ok(())
    }

    /// Re-run the engine and rebuild the sink.
    ///
    /// Glyphs are staged first; the sink is only cleared and refilled once
    /// the whole token stream applied cleanly. On error the sink, text and
    /// glyphs keep the last successful state.
    pub fn update(&mut self) -> Result<()> {
        let mut staged = GlyphBatch::new();
        let applied = engine::apply(
            &self.tokens,
            self.registry,
            self.font,
            &self.options,
            &mut staged,
        )?;

        self.sink.clear();
        for glyph in staged.glyphs() {
            self.sink.add(glyph);
        }

        log::debug!(
            "update: {} glyphs, width {:.2}, text {:?}",
            applied.glyphs.len(),
            applied.width,
            applied.text
        );

        self.text = applied.text;
        self.width = applied.width;
        self.staged = staged;
        Ok(())
    }

    /// Draw the current sink contents with an instance-level transform.
    pub fn draw(&mut self, transform: &DrawTransform) {
        self.sink.draw(transform);
    }

    /// Plain text of the last successful update, tags stripped.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Total advance of the last successful update.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Glyphs of the last successful update.
    pub fn glyphs(&self) -> &[Glyph] {
        self.staged.glyphs()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
