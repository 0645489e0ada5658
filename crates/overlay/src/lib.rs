//! Overlay - auto-fit, stroked text on images
//!
//! One call takes text from raw input to finished pixels:
//!
//! 1. Lines are shaped (Arabic letter forms, bidi reordering)
//! 2. The block is wrapped and sized, either to fill the margin box or at
//!    a height-derived size
//! 3. The block is anchored on the canvas
//! 4. Every line is drawn with a contrasting outline
//!
//! # Example
//!
//! ```ignore
//! use overlay::prelude::*;
//!
//! let library = FontLibrary::new().with_font(FontVariant::Regular, "DejaVuSans.ttf");
//! let generator = Generator::new(library);
//! let rendered = generator.generate(&RenderRequest::new(
//!     "Hello World",
//!     CanvasSpec::new(1200, 675, 60),
//! ))?;
//! rendered.save_png("out.png")?;
//! println!("{}", rendered.summary);
//! ```

use std::fmt;
use std::path::Path;

pub use overlay_core::{
    error, traits, types, Anchor, Background, CanvasSpec, Color, ColorMode, FontVariant, HAlign,
    LayoutMode, StyleSpec, VAlign, BACKGROUND_COLORS, TEXT_COLORS,
};
pub use overlay_export as export;
pub use overlay_fontdb as fontdb;
pub use overlay_layout as layout;
pub use overlay_render_skia as render;
pub use overlay_unicode as unicode;

use overlay_core::{
    error::Result,
    traits::FontRef,
    types::{Position, PositionedLayout, TextBlock},
};
use overlay_fontdb::FontLibrary;
use overlay_layout::FitParams;
use overlay_render_skia::{Canvas, SkiaRenderer};

/// What to draw and where
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub text: String,
    pub canvas: CanvasSpec,
    pub style: StyleSpec,
}

impl RenderRequest {
    pub fn new(text: impl Into<String>, canvas: CanvasSpec) -> Self {
        Self {
            text: text.into(),
            canvas,
            style: StyleSpec::default(),
        }
    }

    pub fn with_style(mut self, style: StyleSpec) -> Self {
        self.style = style;
        self
    }
}

/// The outcome of a layout, small enough to log or announce
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSummary {
    pub font_size: f32,
    pub line_count: usize,
    pub width: f32,
    pub height: f32,
    pub position: Position,
    pub mode: LayoutMode,
}

impl LayoutSummary {
    fn new(layout: &PositionedLayout, mode: LayoutMode) -> Self {
        Self {
            font_size: layout.font_size,
            line_count: layout.lines.len(),
            width: layout.width,
            height: layout.height,
            position: layout.origin,
            mode,
        }
    }
}

impl fmt::Display for LayoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line_count == 0 {
            return f.write_str("No text drawn");
        }
        let placement = match self.mode {
            LayoutMode::FitToWidth => "fitted to width".to_string(),
            LayoutMode::Fixed(anchor) => format!("at {}", anchor),
        };
        write!(
            f,
            "{} line{} at {}px, {} ({}, {})",
            self.line_count,
            if self.line_count == 1 { "" } else { "s" },
            self.font_size,
            placement,
            self.position.x,
            self.position.y
        )
    }
}

/// A finished canvas with the layout that produced it
#[derive(Debug)]
pub struct Rendered {
    pub canvas: Canvas,
    pub summary: LayoutSummary,
}

impl Rendered {
    /// PNG bytes in the canvas's colour mode
    pub fn to_png(&self) -> Result<Vec<u8>> {
        overlay_export::encode_bitmap_to_png(&self.canvas.to_bitmap())
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        overlay_export::write_png(&self.canvas.to_bitmap(), path)
    }
}

/// Runs shaping, layout, placement and drawing against a font library
pub struct Generator {
    library: FontLibrary,
    renderer: SkiaRenderer,
    params: FitParams,
}

impl Generator {
    pub fn new(library: FontLibrary) -> Self {
        Self {
            library,
            renderer: SkiaRenderer::new(),
            params: FitParams::default(),
        }
    }

    /// Override the font-size search bounds
    pub fn with_params(mut self, params: FitParams) -> Self {
        self.params = params;
        self
    }

    pub fn library(&self) -> &FontLibrary {
        &self.library
    }

    /// Render with the font configured for the request's variant
    pub fn generate(&self, request: &RenderRequest) -> Result<Rendered> {
        let font = self.library.load(request.style.variant)?;
        self.generate_with_font(request, font.as_ref())
    }

    /// Render with an explicit font, bypassing the library
    pub fn generate_with_font(
        &self,
        request: &RenderRequest,
        font: &dyn FontRef,
    ) -> Result<Rendered> {
        let mut canvas = Canvas::new(&request.canvas)?;
        let block = TextBlock::from_text(&request.text);
        let mode = request.style.mode;

        let placed = overlay_layout::layout(&block, font, &request.canvas, mode, &self.params);
        self.renderer
            .render(&mut canvas, &placed, font, &request.style)?;

        let summary = LayoutSummary::new(&placed, mode);
        log::info!("{}", summary);
        Ok(Rendered { canvas, summary })
    }
}

/// Common imports for typical usage
pub mod prelude {
    pub use crate::{Generator, LayoutSummary, RenderRequest, Rendered};
    pub use overlay_core::{
        error::{OverlayError, Result},
        traits::{Exporter, FontRef},
        Anchor, Background, CanvasSpec, Color, ColorMode, FontVariant, LayoutMode, StyleSpec,
    };
    pub use overlay_fontdb::{Font, FontLibrary};
    pub use overlay_layout::FitParams;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(line_count: usize, mode: LayoutMode) -> LayoutSummary {
        LayoutSummary {
            font_size: 85.0,
            line_count,
            width: 900.0,
            height: 200.0,
            position: Position::new(150, 237),
            mode,
        }
    }

    #[test]
    fn summary_reads_naturally() {
        assert_eq!(
            summary(2, LayoutMode::FitToWidth).to_string(),
            "2 lines at 85px, fitted to width (150, 237)"
        );
        assert_eq!(
            summary(1, LayoutMode::Fixed(Anchor::CENTER)).to_string(),
            "1 line at 85px, at Center (150, 237)"
        );
        assert_eq!(summary(0, LayoutMode::FitToWidth).to_string(), "No text drawn");
    }

    #[test]
    fn request_defaults_to_white_fit() {
        let request = RenderRequest::new("hi", CanvasSpec::new(10, 10, 1));
        assert_eq!(request.style, StyleSpec::default());
        assert_eq!(request.style.mode, LayoutMode::FitToWidth);
    }
}
