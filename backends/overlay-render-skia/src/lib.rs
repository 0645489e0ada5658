//! Skia Renderer - stroked caption text via tiny-skia
//!
//! Every line is traced glyph by glyph from its font outlines (skrifa)
//! into a single tiny-skia path, placed on the line's baseline. The path
//! is stroked first in the contrast colour and then filled on top, so the
//! visible outline sits entirely outside the letter shapes.
//!
//! Glyphs are laid strictly left to right from each character's cmap
//! entry: lines must already be in visual order with Arabic presentation
//! forms substituted.

mod canvas;

pub use canvas::Canvas;

use skrifa::{instance::LocationRef, outline::DrawSettings, MetadataProvider};
use tiny_skia::{FillRule, LineJoin, Paint, Path, PathBuilder, Stroke, Transform};

use overlay_core::{
    error::{RenderError, Result},
    traits::FontRef,
    types::{PlacedLine, PositionedLayout},
    Color, StyleSpec,
};

use canvas::skia_color;

/// How far the outline reaches beyond the glyph edge, in pixels
pub const STROKE_OUTSET: f32 = 2.0;

/// Draws positioned text onto a [`Canvas`]
#[derive(Debug, Clone, Copy)]
pub struct SkiaRenderer {
    outset: f32,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self {
            outset: STROKE_OUTSET,
        }
    }

    /// Draw every line of `layout` in top-to-bottom order
    ///
    /// An empty layout leaves the canvas untouched. A failure part way
    /// through aborts; lines already drawn stay on the canvas.
    pub fn render(
        &self,
        canvas: &mut Canvas,
        layout: &PositionedLayout,
        font: &dyn FontRef,
        style: &StyleSpec,
    ) -> Result<()> {
        if layout.is_empty() {
            return Ok(());
        }

        let face = skrifa::FontRef::from_index(font.data(), font.face_index())
            .map_err(|_| RenderError::InvalidFont)?;
        let outlines = face.outline_glyphs();

        let fill = paint(style.color);
        let stroke_paint = paint(style.stroke_color());
        let stroke = Stroke {
            // Centered on the edge, so half of it lands outside
            width: self.outset * 2.0,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };

        for line in &layout.lines {
            let Some(path) = self.line_path(&outlines, font, layout.font_size, line)? else {
                log::debug!("Skia: nothing to draw for {:?}", line.line.as_str());
                continue;
            };

            let pixmap = canvas.pixmap_mut();
            pixmap.stroke_path(&path, &stroke_paint, &stroke, Transform::identity(), None);
            pixmap.fill_path(&path, &fill, FillRule::Winding, Transform::identity(), None);

            log::debug!(
                "Skia: drew {:?} at ({}, {}) size {}",
                line.line.as_str(),
                line.position.x,
                line.position.y,
                layout.font_size
            );
        }

        Ok(())
    }

    /// Outline of a whole line in canvas pixels, `None` if it has no ink
    fn line_path(
        &self,
        outlines: &skrifa::outline::OutlineGlyphCollection<'_>,
        font: &dyn FontRef,
        size: f32,
        line: &PlacedLine,
    ) -> Result<Option<Path>> {
        let scale = font.scale(size);
        let settings_size = skrifa::instance::Size::new(size);

        let mut builder = PathBuilder::new();
        let mut pen = PathPen {
            builder: &mut builder,
            x: line.position.x as f32,
            baseline: line.position.y as f32 + font.baseline(size),
        };

        for ch in line.line.as_str().chars() {
            let glyph_id = font.glyph_id(ch).unwrap_or(0);
            if let Some(glyph) = outlines.get(skrifa::GlyphId::new(glyph_id)) {
                let settings = DrawSettings::unhinted(settings_size, LocationRef::default());
                glyph
                    .draw(settings, &mut pen)
                    .map_err(|_| RenderError::OutlineExtractionFailed(glyph_id))?;
            }
            pen.x += font.advance_width(glyph_id) * scale;
        }

        Ok(builder.finish())
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = true;
    paint
}

/// Collects outline commands, flipping font y-up into canvas y-down
struct PathPen<'a> {
    builder: &'a mut PathBuilder,
    x: f32,
    baseline: f32,
}

impl skrifa::outline::OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.x + x, self.baseline - y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.x + x, self.baseline - y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.builder.quad_to(
            self.x + cx0,
            self.baseline - cy0,
            self.x + x,
            self.baseline - y,
        );
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.x + cx0,
            self.baseline - cy0,
            self.x + cx1,
            self.baseline - cy1,
            self.x + x,
            self.baseline - y,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlay_core::{
        types::{GlyphId, Position},
        Background, CanvasSpec,
    };

    struct NoFont;

    impl FontRef for NoFont {
        fn data(&self) -> &[u8] {
            &[]
        }

        fn units_per_em(&self) -> u16 {
            1000
        }

        fn glyph_id(&self, _ch: char) -> Option<GlyphId> {
            None
        }

        fn advance_width(&self, _glyph_id: GlyphId) -> f32 {
            0.0
        }

        fn ascent(&self) -> f32 {
            800.0
        }

        fn descent(&self) -> f32 {
            -200.0
        }
    }

    fn empty_layout() -> PositionedLayout {
        PositionedLayout {
            font_size: 40.0,
            origin: Position::new(10, 10),
            width: 0.0,
            height: 0.0,
            lines: Vec::new(),
        }
    }

    #[test]
    fn empty_layout_leaves_canvas_unchanged() {
        let spec = CanvasSpec::new(16, 16, 0).with_background(Background::Solid(Color::rgb(1, 2, 3)));
        let mut canvas = Canvas::new(&spec).unwrap();
        let before = canvas.to_bitmap().data;

        SkiaRenderer::new()
            .render(&mut canvas, &empty_layout(), &NoFont, &StyleSpec::default())
            .unwrap();

        assert_eq!(canvas.to_bitmap().data, before);
    }

    #[test]
    fn unparsable_font_fails_when_there_is_text() {
        let mut canvas = Canvas::new(&CanvasSpec::new(16, 16, 0)).unwrap();
        let mut layout = empty_layout();
        layout.lines.push(PlacedLine {
            line: "x".into(),
            position: Position::new(0, 0),
            width: 10.0,
            height: 10.0,
        });

        let result = SkiaRenderer::new().render(&mut canvas, &layout, &NoFont, &StyleSpec::default());
        assert!(matches!(
            result,
            Err(overlay_core::OverlayError::RenderingFailed(RenderError::InvalidFont))
        ));
    }
}
