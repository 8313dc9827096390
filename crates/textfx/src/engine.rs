//! Effect application engine.
//!
//! Replays a token stream left to right, tracking which effects are open,
//! and resolves a [`GlyphState`] for every character by running the active
//! transforms in scope order. Glyphs are streamed to a sink as they are
//! produced.
//!
//! ```text
//! {red}Hi{/red}!
//!   Open(red)   scope = [red]
//!   Text("Hi")  H, i  → default state → red → emit, advance
//!   Close(red)  scope = []
//!   Text("!")   !     → default state → emit, advance
//! ```

use fxmarkup::Token;

use crate::error::{Result, TextFxError};
use crate::font::Font;
use crate::glyph::{CharInfo, Glyph};
use crate::grapheme::{grapheme_count, graphemes};
use crate::options::EngineOptions;
use crate::registry::EffectRegistry;
use crate::scope::ActiveScope;
use crate::sink::GlyphSink;

/// Summary of a successful [`apply`] run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Applied {
    /// Concatenation of every text token, tags stripped.
    pub text: String,
    /// Every glyph emitted, in order. The same glyphs are streamed to the sink.
    pub glyphs: Vec<Glyph>,
    /// Final horizontal cursor position.
    pub width: f32,
}

/// Resolve every character of `tokens` and stream the glyphs into `sink`.
///
/// Fails with [`TextFxError::UnknownEffect`] when an open tag names an effect
/// missing from `registry`, and with [`TextFxError::UnmatchedCloseTag`] when
/// a close tag names an effect that is not open. Either error aborts the
/// whole run; glyphs already handed to `sink` stay there, so callers that
/// need a last-good state should apply into a staging sink first.
///
/// # Examples
///
/// ```
/// use textfx::{engine, EffectRegistry, EngineOptions, GlyphBatch, MonospaceFont};
///
/// let tokens = textfx::parse("{wave}ab{/wave}c").unwrap();
/// let registry = EffectRegistry::with_builtins();
/// let mut batch = GlyphBatch::new();
/// let applied = engine::apply(
///     &tokens,
///     &registry,
///     &MonospaceFont::new(10.0),
///     &EngineOptions::default(),
///     &mut batch,
/// )
/// .unwrap();
///
/// assert_eq!(applied.text, "abc");
/// assert_eq!(applied.width, 30.0);
/// assert_eq!(batch.len(), 3);
/// assert_eq!(applied.glyphs, batch.glyphs());
/// ```
pub fn apply<F, S>(
    tokens: &[Token],
    registry: &EffectRegistry,
    font: &F,
    options: &EngineOptions,
    sink: &mut S,
) -> Result<Applied>
where
    F: Font + ?Sized,
    S: GlyphSink + ?Sized,
{
    let mut scope = ActiveScope::new();
    let mut applied = Applied::default();
    let mut x = 0.0_f32;

    for token in tokens {
        match token {
            Token::Text(content) => {
                log::trace!("engine: text {:?} with {} active", content, scope.len());
                applied.text.push_str(content);

                let length = grapheme_count(content);
                for (i, ch) in graphemes(content).enumerate() {
                    let mut state = options.base;
                    let info = CharInfo {
                        ch,
                        index: i + 1,
                        length,
                    };
                    scope.apply(&mut state, &info);

                    let glyph = Glyph::new(ch, state, x);
                    sink.add(&glyph);
                    applied.glyphs.push(glyph);

                    x += font.width(ch) * state.scale.x;
                }
            }
            Token::Open { name, args } => {
                let definition = registry
                    .get_effect(name)
                    .ok_or_else(|| TextFxError::UnknownEffect(name.clone()))?;
                log::trace!("engine: open `{}`", name);
                // The tag name owns the name slot, whatever the args were built with.
                let args = if args.name() == name {
                    args.clone()
                } else {
                    args.clone().renamed(name.as_str())
                };
                scope.open(definition.clone(), args);
            }
            Token::Close(name) => {
                if !scope.close(name) {
                    return Err(TextFxError::UnmatchedCloseTag(name.clone()));
                }
                log::trace!("engine: close `{}`", name);
            }
        }
    }

    if options.warn_unclosed && !scope.is_empty() {
        log::warn!(
            "engine: tags left open at end of text: {}",
            scope.names().collect::<Vec<_>>().join(", ")
        );
    }

    applied.width = x;
    Ok(applied)
}
