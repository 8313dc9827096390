//! Glyph: the per-character unit produced by the effect engine.
//!
//! ## Pipeline Position
//! ```text
//! Token[] → (active effects) → GlyphState → Glyph → GlyphSink
//!                                  ↑
//!                             You are here
//! ```

/// A linear RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque white, the color every glyph starts from.
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert HSV (hue in turns, `0.0..1.0`) to an opaque color.
    ///
    /// ```
    /// use textfx::Rgba;
    ///
    /// assert_eq!(Rgba::from_hsv(0.0, 1.0, 1.0), Rgba::new(1.0, 0.0, 0.0, 1.0));
    /// ```
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let c = value * saturation;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = value - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self::new(r + m, g + m, b + m, 1.0)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

/// A 2D vector used for offsets, scales and skews.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);
    pub const ONE: Vec2 = Vec2::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The visual state of a single character.
///
/// Reset before every character and then mutated in place by each active
/// effect in turn. Later writes to a field overwrite earlier ones; nothing
/// is blended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphState {
    /// Fill color.
    pub color: Rgba,
    /// Offset from the glyph's cursor position.
    pub offset: Vec2,
    /// Scale factors. Only `scale.x` affects the cursor advance.
    pub scale: Vec2,
    /// Shear factors.
    pub skew: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
}

impl Default for GlyphState {
    fn default() -> Self {
        Self {
            color: Rgba::WHITE,
            offset: Vec2::ZERO,
            scale: Vec2::ONE,
            skew: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

/// Information about the character currently being processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharInfo<'a> {
    /// The character (one extended grapheme cluster).
    pub ch: &'a str,
    /// 1-based position within the enclosing text run.
    pub index: usize,
    /// Number of characters in the enclosing text run.
    pub length: usize,
}

/// A resolved glyph ready to be handed to a sink.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    /// The character to draw.
    pub ch: String,
    /// Final state after every active effect ran.
    pub state: GlyphState,
    /// Horizontal cursor position before the glyph's advance.
    pub cursor: f32,
}

impl Glyph {
    pub fn new(ch: impl Into<String>, state: GlyphState, cursor: f32) -> Self {
        Self {
            ch: ch.into(),
            state,
            cursor,
        }
    }

    /// Draw position x: cursor plus the horizontal offset.
    pub fn x(&self) -> f32 {
        self.cursor + self.state.offset.x
    }

    /// Draw position y: the vertical offset.
    pub fn y(&self) -> f32 {
        self.state.offset.y
    }

    pub fn color(&self) -> Rgba {
        self.state.color
    }

    pub fn rotation(&self) -> f32 {
        self.state.rotation
    }

    pub fn scale(&self) -> Vec2 {
        self.state.scale
    }

    pub fn skew(&self) -> Vec2 {
        self.state.skew
    }

    /// Rotation/scale origin relative to the glyph. Always the top-left.
    pub fn origin(&self) -> Vec2 {
        Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let state = GlyphState::default();
        assert_eq!(state.color, Rgba::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(state.offset, Vec2::ZERO);
        assert_eq!(state.scale, Vec2::ONE);
        assert_eq!(state.skew, Vec2::ZERO);
        assert_eq!(state.rotation, 0.0);
    }

    #[test]
    fn glyph_position_includes_offset() {
        let mut state = GlyphState::default();
        state.offset = Vec2::new(2.0, -3.0);
        let glyph = Glyph::new("a", state, 10.0);
        assert_eq!(glyph.x(), 12.0);
        assert_eq!(glyph.y(), -3.0);
        assert_eq!(glyph.origin(), Vec2::ZERO);
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(Rgba::from_hsv(1.0 / 3.0, 1.0, 1.0).g, 1.0);
        assert_eq!(Rgba::from_hsv(2.0 / 3.0, 1.0, 1.0).b, 1.0);
        assert_eq!(Rgba::from_hsv(0.5, 0.0, 1.0), Rgba::WHITE);
    }
}
