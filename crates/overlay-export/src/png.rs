//! PNG export format
//!
//! Exports canvases to PNG using the `image` crate.

use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};
use overlay_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::{BitmapData, BitmapFormat},
};

/// Encode bitmap data to PNG, as RGBA or RGB to match the bitmap.
pub fn encode_bitmap_to_png(bitmap: &BitmapData) -> Result<Vec<u8>> {
    let (channels, color_type) = match bitmap.format {
        BitmapFormat::Rgba8 => (4, ExtendedColorType::Rgba8),
        BitmapFormat::Rgb8 => (3, ExtendedColorType::Rgb8),
    };

    // Validate buffer size before handing it to the encoder
    let expected_size = bitmap.width as usize * bitmap.height as usize * channels;
    if bitmap.data.len() != expected_size {
        return Err(ExportError::EncodingFailed(format!(
            "Buffer size mismatch: expected {} bytes for {}x{} {:?}, got {}",
            expected_size,
            bitmap.width,
            bitmap.height,
            bitmap.format,
            bitmap.data.len()
        ))
        .into());
    }

    let mut png_data = Vec::new();
    let encoder = PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );

    encoder
        .write_image(&bitmap.data, bitmap.width, bitmap.height, color_type)
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// PNG exporter for finished canvases
///
/// # Examples
///
/// ```
/// use overlay_export::PngExporter;
/// let exporter = PngExporter::new();
/// ```
pub struct PngExporter;

impl PngExporter {
    /// Create a new PNG exporter
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>> {
        encode_bitmap_to_png(bitmap)
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

impl Default for PngExporter {
    fn default() -> Self {
        Self::new()
    }
}
