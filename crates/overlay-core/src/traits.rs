//! The contracts that bind the pipeline together
//!
//! - [`FontRef`] - Font data plus the measurements layout depends on
//! - [`Exporter`] - Where finished canvases become files

use crate::{error::Result, types::*};

/// Your key to font data and metrics
///
/// Layout only ever asks two questions of a font: how wide is this
/// text, and how tall is one line. Both are answered from the raw
/// per-glyph numbers below, so a test double only has to supply those.
///
/// ```ignore
/// struct FixedFont;
///
/// impl FontRef for FixedFont {
///     fn data(&self) -> &[u8] { &[] }
///     fn units_per_em(&self) -> u16 { 1000 }
///     fn glyph_id(&self, ch: char) -> Option<GlyphId> { Some(ch as u32) }
///     fn advance_width(&self, _glyph_id: GlyphId) -> f32 { 500.0 }
///     fn ascent(&self) -> f32 { 800.0 }
///     fn descent(&self) -> f32 { -200.0 }
/// }
/// ```
pub trait FontRef: Send + Sync {
    /// Raw font bytes as they live in the file
    fn data(&self) -> &[u8];

    /// Face inside a collection (0 for single fonts)
    fn face_index(&self) -> u32 {
        0
    }

    /// The font's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Find the glyph that represents this character
    ///
    /// Returns None when the font doesn't contain this character.
    fn glyph_id(&self, ch: char) -> Option<GlyphId>;

    /// Horizontal advance of a glyph in font units
    fn advance_width(&self, glyph_id: GlyphId) -> f32;

    /// Distance from baseline to the top of the line box, font units
    fn ascent(&self) -> f32;

    /// Distance from baseline to the bottom of the line box, font units (negative)
    fn descent(&self) -> f32;

    /// Scale factor from font units to pixels at `size`
    fn scale(&self, size: f32) -> f32 {
        size / self.units_per_em().max(1) as f32
    }

    /// Advance width of `text` in pixels at `size`
    ///
    /// Characters missing from the font advance by the `.notdef` glyph.
    fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: f32 = text
            .chars()
            .map(|ch| self.advance_width(self.glyph_id(ch).unwrap_or(0)))
            .sum();
        units * self.scale(size)
    }

    /// Ascent-to-descent extent of one line in pixels at `size`
    fn line_height(&self, _text: &str, size: f32) -> f32 {
        (self.ascent() - self.descent()) * self.scale(size)
    }

    /// Baseline offset from the top of a line box in pixels at `size`
    fn baseline(&self, size: f32) -> f32 {
        self.ascent() * self.scale(size)
    }
}

/// The final step: pixels become files
pub trait Exporter: Send + Sync {
    /// Who are you?
    fn name(&self) -> &'static str;

    /// Encode the bitmap as bytes
    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;

    /// What MIME type identifies your format?
    fn mime_type(&self) -> &'static str;
}
