//! The pixel buffer text is drawn onto

use image::imageops::FilterType;
use tiny_skia::Pixmap;

use overlay_core::{
    error::{RenderError, Result},
    types::{BitmapData, BitmapFormat},
    Background, CanvasSpec, Color, ColorMode, OverlayError,
};

/// A premultiplied RGBA pixmap plus the colour mode it will be exported in
pub struct Canvas {
    pixmap: Pixmap,
    mode: ColorMode,
}

impl Canvas {
    /// Create the starting pixels described by `spec`
    ///
    /// Image backgrounds are resized to the exact canvas size with a
    /// Lanczos3 filter; their alpha channel is dropped since the result is
    /// exported as RGB.
    pub fn new(spec: &CanvasSpec) -> Result<Self> {
        let mut pixmap = Pixmap::new(spec.width, spec.height).ok_or(
            RenderError::InvalidDimensions {
                width: spec.width,
                height: spec.height,
            },
        )?;

        match &spec.background {
            Background::Transparent => {},
            Background::Solid(color) => pixmap.fill(skia_color(*color)),
            Background::Image(path) => {
                let source = image::open(path).map_err(|e| {
                    OverlayError::Background(format!("{}: {}", path.display(), e))
                })?;
                let resized = source
                    .resize_exact(spec.width, spec.height, FilterType::Lanczos3)
                    .to_rgba8();
                for (dst, src) in pixmap
                    .data_mut()
                    .chunks_exact_mut(4)
                    .zip(resized.pixels())
                {
                    dst.copy_from_slice(&[src[0], src[1], src[2], 255]);
                }
                log::debug!(
                    "Background {} resized to {}x{}",
                    path.display(),
                    spec.width,
                    spec.height
                );
            },
        }

        Ok(Self {
            pixmap,
            mode: spec.color_mode(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn color_mode(&self) -> ColorMode {
        self.mode
    }

    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Straight-alpha colour at a pixel, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let pixel = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(
            pixel.red(),
            pixel.green(),
            pixel.blue(),
            pixel.alpha(),
        ))
    }

    /// Copy out un-premultiplied pixels in the canvas's colour mode
    pub fn to_bitmap(&self) -> BitmapData {
        let pixels = self.pixmap.pixels().iter().map(|p| p.demultiply());
        let (format, data) = match self.mode {
            ColorMode::Rgba => (
                BitmapFormat::Rgba8,
                pixels
                    .flat_map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
                    .collect(),
            ),
            ColorMode::Rgb => (
                BitmapFormat::Rgb8,
                pixels.flat_map(|p| [p.red(), p.green(), p.blue()]).collect(),
            ),
        };

        BitmapData {
            width: self.width(),
            height: self.height(),
            format,
            data,
        }
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("mode", &self.mode)
            .finish()
    }
}

pub(crate) fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn transparent_canvas_is_clear_rgba() {
        let canvas = Canvas::new(&CanvasSpec::new(8, 4, 0)).unwrap();
        assert_eq!(canvas.color_mode(), ColorMode::Rgba);
        assert_eq!(canvas.pixel(3, 2), Some(Color::transparent()));

        let bitmap = canvas.to_bitmap();
        assert_eq!(bitmap.format, BitmapFormat::Rgba8);
        assert_eq!(bitmap.data.len(), 8 * 4 * 4);
        assert!(bitmap.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn solid_canvas_is_filled_rgb() {
        let spec = CanvasSpec::new(5, 5, 1)
            .with_background(Background::Solid(Color::rgb(173, 216, 230)));
        let canvas = Canvas::new(&spec).unwrap();
        assert_eq!(canvas.color_mode(), ColorMode::Rgb);
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(173, 216, 230)));

        let bitmap = canvas.to_bitmap();
        assert_eq!(bitmap.format, BitmapFormat::Rgb8);
        assert_eq!(bitmap.data.len(), 5 * 5 * 3);
        assert_eq!(&bitmap.data[..3], &[173, 216, 230]);
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let result = Canvas::new(&CanvasSpec::new(0, 10, 0));
        assert!(matches!(
            result,
            Err(OverlayError::RenderingFailed(RenderError::InvalidDimensions { .. }))
        ));
    }

    #[test]
    fn missing_background_image_is_an_error() {
        let spec = CanvasSpec::new(10, 10, 0)
            .with_background(Background::Image(PathBuf::from("/no/such/image.png")));
        assert!(matches!(Canvas::new(&spec), Err(OverlayError::Background(_))));
    }

    #[test]
    fn out_of_bounds_pixel_is_none() {
        let canvas = Canvas::new(&CanvasSpec::new(2, 2, 0)).unwrap();
        assert_eq!(canvas.pixel(2, 0), None);
        assert_eq!(canvas.pixel(0, 2), None);
        assert_eq!(canvas.pixel(1, 1), Some(Color::transparent()));
    }
}
