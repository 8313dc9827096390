//! Font metrics consumed by the effect engine.
//!
//! The engine only needs horizontal advances; shaping and rasterization
//! belong to the rendering backend.

use crate::grapheme::display_width;

/// Source of horizontal advance metrics.
pub trait Font {
    /// Advance width of a single character (grapheme cluster), unscaled.
    fn width(&self, ch: &str) -> f32;
}

impl<T: Font + ?Sized> Font for &T {
    fn width(&self, ch: &str) -> f32 {
        (**self).width(ch)
    }
}

/// A fixed-pitch font: every character advances by its Unicode display
/// width (1 or 2 cells) times `cell_width`.
///
/// # Examples
///
/// ```
/// use textfx::{Font, MonospaceFont};
///
/// let font = MonospaceFont::new(8.0);
/// assert_eq!(font.width("a"), 8.0);
/// assert_eq!(font.width("日"), 16.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceFont {
    cell_width: f32,
}

impl MonospaceFont {
    pub fn new(cell_width: f32) -> Self {
        Self { cell_width }
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }
}

impl Default for MonospaceFont {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Font for MonospaceFont {
    fn width(&self, ch: &str) -> f32 {
        display_width(ch) as f32 * self.cell_width
    }
}
