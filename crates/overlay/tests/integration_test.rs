//! End-to-end: text in, PNG out
//!
//! Tests that draw need a system font and skip without one.

use std::path::PathBuf;

use overlay::prelude::*;
use overlay::render::Canvas;

fn font_path() -> Option<PathBuf> {
    let found = overlay::fontdb::system_font_candidates()
        .into_iter()
        .find(|p| p.is_file());
    if found.is_none() {
        eprintln!("no system font found, skipping");
    }
    found
}

fn generator(path: PathBuf) -> Generator {
    Generator::new(FontLibrary::new().with_font(FontVariant::Regular, path))
}

fn temp_output(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("overlay_{}_{}.png", name, std::process::id()))
}

#[test]
fn test_two_line_caption_on_transparent_canvas() {
    let Some(path) = font_path() else {
        return;
    };
    let request = RenderRequest::new("Hello World\nSecond Line", CanvasSpec::new(1200, 675, 60));
    let rendered = generator(path).generate(&request).expect("generate");

    let summary = rendered.summary;
    assert!(summary.height < 555.0);
    assert!(summary.font_size <= 200.0);
    assert!(summary.line_count >= 2);
    assert_eq!(rendered.canvas.color_mode(), ColorMode::Rgba);

    let output = temp_output("two_lines");
    rendered.save_png(&output).expect("save");
    let decoded = image::open(&output).expect("decode");
    assert_eq!(decoded.color(), image::ColorType::Rgba8);
    assert_eq!((decoded.width(), decoded.height()), (1200, 675));
    let _ = std::fs::remove_file(&output);
}

#[test]
fn test_custom_fit_params_cap_the_size() {
    let Some(path) = font_path() else {
        return;
    };
    let request = RenderRequest::new("Hi", CanvasSpec::new(1200, 675, 60));

    let default = generator(path.clone()).generate(&request).expect("generate");
    assert_eq!(default.summary.font_size, 200.0);

    let capped = generator(path)
        .with_params(FitParams {
            start: 40.0,
            step: 5.0,
            min: 10.0,
        })
        .generate(&request)
        .expect("generate");
    assert_eq!(capped.summary.font_size, 40.0);
    assert_eq!(capped.summary.line_count, 1);
}

#[test]
fn test_solid_background_exports_rgb() {
    let Some(path) = font_path() else {
        return;
    };
    let canvas = CanvasSpec::new(320, 180, 10).with_background("Light Green".parse().expect("color"));
    let style = StyleSpec {
        color: Color::black(),
        mode: LayoutMode::Fixed("Bottom Left".parse().expect("anchor")),
        ..StyleSpec::default()
    };
    let request = RenderRequest::new("caption", canvas).with_style(style);
    let rendered = generator(path).generate(&request).expect("generate");

    assert_eq!(rendered.summary.font_size, 18.0);
    assert_eq!(rendered.summary.position.x, 10);

    let png = rendered.to_png().expect("png");
    let decoded = image::load_from_memory(&png).expect("decode");
    assert_eq!(decoded.color(), image::ColorType::Rgb8);
    // Top-right corner is untouched background
    assert_eq!(decoded.to_rgb8().get_pixel(319, 0).0, [144, 238, 144]);
}

#[test]
fn test_image_background_is_resized() {
    let Some(path) = font_path() else {
        return;
    };
    let background = temp_output("background_src");
    image::RgbImage::from_pixel(64, 32, image::Rgb([10, 60, 110]))
        .save(&background)
        .expect("write background");

    let canvas = CanvasSpec::new(200, 100, 5).with_background(Background::Image(background.clone()));
    let rendered = generator(path)
        .generate(&RenderRequest::new("", canvas))
        .expect("generate");

    assert_eq!(rendered.canvas.width(), 200);
    assert_eq!(rendered.canvas.height(), 100);
    let pixel = rendered.canvas.pixel(100, 50).expect("pixel");
    assert!((pixel.r as i32 - 10).abs() <= 2);
    assert!((pixel.g as i32 - 60).abs() <= 2);
    assert!((pixel.b as i32 - 110).abs() <= 2);
    let _ = std::fs::remove_file(&background);
}

#[test]
fn test_empty_text_leaves_canvas_as_created() {
    let Some(path) = font_path() else {
        return;
    };
    let canvas = CanvasSpec::new(64, 64, 4).with_background(Background::Solid(Color::rgb(128, 128, 128)));
    let blank = Canvas::new(&canvas).expect("canvas").to_bitmap().data;

    let rendered = generator(path)
        .generate(&RenderRequest::new("\n   \n", canvas))
        .expect("generate");
    assert_eq!(rendered.summary.line_count, 0);
    assert_eq!(rendered.canvas.to_bitmap().data, blank);
}

#[test]
fn test_unconfigured_variant_is_font_unavailable() {
    let request = RenderRequest::new("text", CanvasSpec::new(100, 100, 5)).with_style(StyleSpec {
        variant: FontVariant::Special,
        ..StyleSpec::default()
    });
    let result = Generator::new(FontLibrary::new()).generate(&request);
    assert!(matches!(result, Err(OverlayError::FontUnavailable(_))));
}

#[test]
fn test_missing_font_file_is_font_unavailable() {
    let generator = generator(PathBuf::from("/no/such/font.ttf"));
    let result = generator.generate(&RenderRequest::new("text", CanvasSpec::new(100, 100, 5)));
    assert!(matches!(result, Err(OverlayError::FontUnavailable(_))));
}
