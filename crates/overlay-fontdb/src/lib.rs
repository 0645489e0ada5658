//! Where fonts come to life: loading and metrics for Overlay
//!
//! Fonts store their raw data and create a `read_fonts::FontRef` on demand
//! for parsing. Metrics the layout engine asks for on every measurement
//! (units per em, ascent, descent) are read once at load time.
//!
//! [`FontLibrary`] maps each [`overlay_core::FontVariant`] to a font file
//! and hands out shared, cached [`Font`]s.

use std::fs;
use std::path::{Path, PathBuf};

use read_fonts::{types::GlyphId as ReadGlyphId, FontRef as ReadFontRef, TableProvider};

use overlay_core::{
    error::{FontLoadError, Result},
    traits::FontRef,
    types::GlyphId,
};

mod library;
mod system;

pub use library::FontLibrary;
pub use system::{system_font_candidates, FONT_ENV_VAR};

/// A font that's been brought into memory, ready to measure and draw text
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
    ascent: f32,
    descent: f32,
    source: Option<PathBuf>,
}

impl Font {
    /// Opens a font file from disk and makes it usable
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let path = path.as_ref();
        let data =
            fs::read(path).map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;

        let mut font = Self::from_data_index(data, face_index)?;
        font.source = Some(path.to_path_buf());
        Ok(font)
    }

    /// Turns raw font bytes into something we can work with
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    /// Turns raw font bytes into a specific face (for TTC collections)
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let font_ref =
            ReadFontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .map_err(|_| FontLoadError::InvalidData)?;

        // hhea first, the same numbers most rasterizers use for line boxes
        let (ascent, descent) = font_ref
            .hhea()
            .ok()
            .map(|hhea| (hhea.ascender().to_i16(), hhea.descender().to_i16()))
            .filter(|&(ascent, descent)| i32::from(ascent) - i32::from(descent) > 0)
            .or_else(|| {
                font_ref
                    .os2()
                    .ok()
                    .map(|os2| (os2.s_typo_ascender(), os2.s_typo_descender()))
            })
            .unwrap_or((
                (units_per_em as f32 * 0.8) as i16,
                -((units_per_em as f32 * 0.2) as i16),
            ));

        Ok(Font {
            data,
            face_index,
            units_per_em,
            ascent: ascent as f32,
            descent: descent as f32,
            source: None,
        })
    }

    /// File this font was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Finds which glyph draws this character
    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
    }

    /// Advance width of a glyph in font units
    pub fn advance_width(&self, glyph_id: GlyphId) -> f32 {
        self.font_ref()
            .and_then(|font| {
                let hmtx = font.hmtx().ok()?;
                hmtx.advance(ReadGlyphId::new(glyph_id))
            })
            .map(f32::from)
            .unwrap_or(0.0)
    }

    /// Sum of advances in font units, parsing the tables once per call
    fn advance_units(&self, text: &str) -> f32 {
        let Some(font) = self.font_ref() else {
            return 0.0;
        };
        let (Ok(cmap), Ok(hmtx)) = (font.cmap(), font.hmtx()) else {
            return 0.0;
        };

        text.chars()
            .map(|ch| {
                let gid = cmap.map_codepoint(ch).unwrap_or(ReadGlyphId::NOTDEF);
                hmtx.advance(gid).map(f32::from).unwrap_or(0.0)
            })
            .sum()
    }
}

impl FontRef for Font {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn face_index(&self) -> u32 {
        self.face_index
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        self.glyph_id(ch)
    }

    fn advance_width(&self, glyph_id: GlyphId) -> f32 {
        self.advance_width(glyph_id)
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn descent(&self) -> f32 {
        self.descent
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        self.advance_units(text) * self.scale(size)
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("source", &self.source)
            .field("face_index", &self.face_index)
            .field("units_per_em", &self.units_per_em)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_from_garbage_data() {
        let result = Font::from_data(vec![0; 100]);
        assert!(matches!(
            result,
            Err(overlay_core::OverlayError::FontUnavailable(FontLoadError::InvalidData))
        ));
    }

    #[test]
    fn test_font_from_missing_file() {
        let result = Font::from_file("/definitely/not/here.ttf");
        assert!(matches!(
            result,
            Err(overlay_core::OverlayError::FontUnavailable(FontLoadError::FileNotFound(_)))
        ));
    }
}
