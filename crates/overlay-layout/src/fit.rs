use overlay_core::{
    traits::FontRef,
    types::{FittedLayout, MeasuredLine, PositionedLayout, ShapedLine, TextBlock},
    Anchor, CanvasSpec, LayoutMode,
};
use overlay_unicode::shape_block;

use crate::{place, wrap, FitParams, FIXED_SIZE_DIVISOR, MIN_FONT_SIZE};

/// Wrap every line at `size` and measure the result
///
/// Logical lines are wrapped independently and concatenated in order, so a
/// word never moves from one input line to another.
pub fn measure_at(
    shaped: &[ShapedLine],
    font: &dyn FontRef,
    size: f32,
    max_width: f32,
) -> FittedLayout {
    let lines = shaped
        .iter()
        .flat_map(|line| wrap(line, font, size, max_width))
        .map(|line| MeasuredLine {
            width: font.text_width(line.as_str(), size),
            height: font.line_height(line.as_str(), size),
            line,
        })
        .collect();
    FittedLayout::new(size, lines)
}

/// Largest size whose wrapped block is shorter than the margin box
pub fn fit(
    block: &TextBlock,
    font: &dyn FontRef,
    canvas: &CanvasSpec,
    params: &FitParams,
) -> FittedLayout {
    fit_shaped(&shape_block(block), font, canvas, params)
}

/// [`fit`] for lines that are already shaped
///
/// A candidate is accepted when its total height is strictly below
/// `canvas.height - 2 * margin`. When no candidate is, the floor-size
/// layout is returned and may overflow.
pub fn fit_shaped(
    shaped: &[ShapedLine],
    font: &dyn FontRef,
    canvas: &CanvasSpec,
    params: &FitParams,
) -> FittedLayout {
    let max_width = canvas.content_width();
    let max_height = canvas.content_height();

    let mut last = None;
    for size in params.sizes() {
        let candidate = measure_at(shaped, font, size, max_width);
        if candidate.height < max_height {
            log::debug!(
                "fit: accepted {}px ({} lines, {:.1}x{:.1} in {:.0}x{:.0})",
                size,
                candidate.lines.len(),
                candidate.width,
                candidate.height,
                max_width,
                max_height
            );
            return candidate;
        }
        log::trace!(
            "fit: {}px too tall ({:.1} >= {:.0})",
            size,
            candidate.height,
            max_height
        );
        last = Some(candidate);
    }

    log::debug!("fit: nothing fits, using the {}px floor", params.min);
    last.unwrap_or_else(|| measure_at(shaped, font, params.min, max_width))
}

/// Font size for fixed mode: a tenth of the canvas height, never below the floor
pub fn fixed_font_size(canvas_height: u32) -> f32 {
    (canvas_height as f32 / FIXED_SIZE_DIVISOR).max(MIN_FONT_SIZE)
}

/// Size from the canvas height, wrap to the margin box, place at `anchor`
pub fn fixed_layout(
    block: &TextBlock,
    font: &dyn FontRef,
    canvas: &CanvasSpec,
    anchor: Anchor,
) -> PositionedLayout {
    let size = fixed_font_size(canvas.height);
    let fitted = measure_at(&shape_block(block), font, size, canvas.content_width());
    log::debug!(
        "fixed: {}px, {} lines at {}",
        size,
        fitted.lines.len(),
        anchor
    );
    place(&fitted, canvas, anchor)
}

/// Run whichever mode the style asks for
///
/// Fit-to-width blocks are centered.
pub fn layout(
    block: &TextBlock,
    font: &dyn FontRef,
    canvas: &CanvasSpec,
    mode: LayoutMode,
    params: &FitParams,
) -> PositionedLayout {
    match mode {
        LayoutMode::FitToWidth => place(&fit(block, font, canvas, params), canvas, Anchor::CENTER),
        LayoutMode::Fixed(anchor) => fixed_layout(block, font, canvas, anchor),
    }
}
