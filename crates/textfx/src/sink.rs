//! Glyph sinks: where resolved glyphs go.
//!
//! A sink is the backend-owned accumulator behind a [`RichText`](crate::RichText).
//! It receives glyphs one at a time as the engine produces them, and renders
//! them on [`draw`](GlyphSink::draw) with an instance-level transform.

use crate::glyph::Glyph;

/// Instance-level transform applied when drawing a whole sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawTransform {
    pub x: f32,
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub skew_x: f32,
    pub skew_y: f32,
}

impl DrawTransform {
    /// Identity transform translated to `(x, y)`.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale_x: f32, scale_y: f32) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    pub fn with_origin(mut self, origin_x: f32, origin_y: f32) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    pub fn with_skew(mut self, skew_x: f32, skew_y: f32) -> Self {
        self.skew_x = skew_x;
        self.skew_y = skew_y;
        self
    }
}

impl Default for DrawTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            origin_x: 0.0,
            origin_y: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
        }
    }
}

/// Incremental glyph receiver backed by a rendering backend.
pub trait GlyphSink {
    /// Drop every glyph added so far.
    fn clear(&mut self);

    /// Append one glyph. Position, rotation, scale, origin and skew are read
    /// from the glyph itself.
    fn add(&mut self, glyph: &Glyph);

    /// Render the current contents with an instance-level transform.
    fn draw(&mut self, transform: &DrawTransform);
}

impl<S: GlyphSink + ?Sized> GlyphSink for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn add(&mut self, glyph: &Glyph) {
        (**self).add(glyph);
    }

    fn draw(&mut self, transform: &DrawTransform) {
        (**self).draw(transform);
    }
}

/// A `Vec`-backed sink that keeps every glyph and records each draw call.
///
/// Used as the staging buffer during updates and handy as a sink for
/// headless use and tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphBatch {
    glyphs: Vec<Glyph>,
    draws: Vec<DrawTransform>,
}

impl GlyphBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Glyphs in emission order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Transforms passed to [`draw`](GlyphSink::draw), oldest first.
    pub fn draws(&self) -> &[DrawTransform] {
        &self.draws
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn into_glyphs(self) -> Vec<Glyph> {
        self.glyphs
    }
}

impl GlyphSink for GlyphBatch {
    fn clear(&mut self) {
        self.glyphs.clear();
    }

    fn add(&mut self, glyph: &Glyph) {
        self.glyphs.push(glyph.clone());
    }

    fn draw(&mut self, transform: &DrawTransform) {
        self.draws.push(*transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::GlyphState;

    #[test]
    fn batch_records_glyphs_and_draws() {
        let mut batch = GlyphBatch::new();
        batch.add(&Glyph::new("a", GlyphState::default(), 0.0));
        batch.add(&Glyph::new("b", GlyphState::default(), 1.0));
        batch.draw(&DrawTransform::at(5.0, 6.0));

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.glyphs()[1].ch, "b");
        assert_eq!(batch.draws(), &[DrawTransform::at(5.0, 6.0)]);

        batch.clear();
        assert!(batch.is_empty());
        assert_eq!(batch.draws().len(), 1);
    }

    #[test]
    fn mut_ref_forwards() {
        fn push_one<S: GlyphSink>(mut sink: S) {
            sink.add(&Glyph::new("x", GlyphState::default(), 0.0));
        }

        let mut batch = GlyphBatch::new();
        push_one(&mut batch);
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn transform_builders() {
        let t = DrawTransform::at(1.0, 2.0)
            .with_rotation(0.5)
            .with_scale(2.0, 3.0)
            .with_origin(4.0, 5.0)
            .with_skew(0.1, 0.2);
        assert_eq!(t.x, 1.0);
        assert_eq!(t.rotation, 0.5);
        assert_eq!((t.scale_x, t.scale_y), (2.0, 3.0));
        assert_eq!((t.origin_x, t.origin_y), (4.0, 5.0));
        assert_eq!((t.skew_x, t.skew_y), (0.1, 0.2));
    }
}
