//! Drawing real text onto real canvases
//!
//! These tests need a TrueType font on the machine; they look for a system
//! font (or `OVERLAY_FONT`) and skip quietly when there is none.

use std::path::PathBuf;

use overlay_core::{
    types::TextBlock, Anchor, Background, CanvasSpec, Color, LayoutMode, StyleSpec,
};
use overlay_fontdb::{system_font_candidates, Font};
use overlay_layout::{fixed_layout, layout, FitParams};
use overlay_render_skia::{Canvas, SkiaRenderer};

fn system_font() -> Option<Font> {
    let path: PathBuf = system_font_candidates().into_iter().find(|p| p.is_file())?;
    Font::from_file(path).ok()
}

fn count(canvas: &Canvas, wanted: impl Fn(Color) -> bool) -> usize {
    (0..canvas.height())
        .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
        .filter_map(|(x, y)| canvas.pixel(x, y))
        .filter(|c| wanted(*c))
        .count()
}

#[test]
fn test_white_text_gets_black_outline() {
    let Some(font) = system_font() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let spec = CanvasSpec::new(400, 200, 20)
        .with_background(Background::Solid(Color::rgb(128, 128, 128)));
    let mut canvas = Canvas::new(&spec).expect("canvas");
    let style = StyleSpec::default();

    let placed = layout(
        &TextBlock::from_text("HELLO"),
        &font,
        &spec,
        LayoutMode::FitToWidth,
        &FitParams::default(),
    );
    SkiaRenderer::new()
        .render(&mut canvas, &placed, &font, &style)
        .expect("render");

    let white = count(&canvas, |c| c.r > 240 && c.g > 240 && c.b > 240);
    let black = count(&canvas, |c| c.r < 20 && c.g < 20 && c.b < 20);
    assert!(white > 0, "fill should be visible");
    assert!(black > 0, "stroke should be visible");
}

#[test]
fn test_black_text_gets_white_outline() {
    let Some(font) = system_font() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let spec = CanvasSpec::new(800, 600, 20)
        .with_background(Background::Solid(Color::rgb(128, 128, 128)));
    let mut canvas = Canvas::new(&spec).expect("canvas");
    let style = StyleSpec {
        color: Color::black(),
        ..StyleSpec::default()
    };

    let placed = fixed_layout(&TextBlock::from_text("HELLO"), &font, &spec, Anchor::CENTER);
    SkiaRenderer::new()
        .render(&mut canvas, &placed, &font, &style)
        .expect("render");

    assert!(count(&canvas, |c| c.r < 20 && c.g < 20 && c.b < 20) > 0);
    assert!(count(&canvas, |c| c.r > 240 && c.g > 240 && c.b > 240) > 0);
}

#[test]
fn test_ink_stays_near_the_anchor() {
    let Some(font) = system_font() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let spec = CanvasSpec::new(600, 400, 20);
    let mut canvas = Canvas::new(&spec).expect("canvas");
    let anchor: Anchor = "Top Left".parse().expect("anchor");

    let placed = fixed_layout(&TextBlock::from_text("Hi"), &font, &spec, anchor);
    SkiaRenderer::new()
        .render(&mut canvas, &placed, &font, &StyleSpec::default())
        .expect("render");

    // Transparent canvas: anything with alpha is ink; none of it in the bottom right
    let inked_far = (300..600)
        .flat_map(|x| (200..400).map(move |y| (x, y)))
        .filter_map(|(x, y)| canvas.pixel(x, y))
        .any(|c| c.a > 0);
    assert!(!inked_far);
    assert!(count(&canvas, |c| c.a > 0) > 0);
}

#[test]
fn test_empty_text_draws_nothing() {
    let Some(font) = system_font() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let spec = CanvasSpec::new(100, 100, 10);
    let mut canvas = Canvas::new(&spec).expect("canvas");
    let placed = layout(
        &TextBlock::from_text("  \n"),
        &font,
        &spec,
        LayoutMode::FitToWidth,
        &FitParams::default(),
    );
    assert!(placed.is_empty());

    SkiaRenderer::new()
        .render(&mut canvas, &placed, &font, &StyleSpec::default())
        .expect("render");
    assert_eq!(count(&canvas, |c| c.a > 0), 0);
}
