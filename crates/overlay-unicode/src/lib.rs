// this_file: crates/overlay-unicode/src/lib.rs

//! Line preprocessing: logical text in, drawable visual text out.
//!
//! The renderer lays glyphs strictly left to right and looks each
//! character up in the font's cmap, so anything a shaping engine would
//! normally do has to happen here first:
//!
//! 1. [`reshape`] swaps Arabic letters for their contextual presentation
//!    forms (isolated, final, initial, medial, lam-alef ligatures).
//! 2. [`reorder`] applies the Unicode bidi algorithm and returns the
//!    characters in visual order.
//!
//! [`shape`] runs both on a single line. It must see each raw line exactly
//! once: presentation forms are not re-shaped, and reordering visual text
//! a second time reverses it again.

mod bidi;
mod reshape;

pub use bidi::reorder;
pub use reshape::{reshape, ArabicReshaper};

use overlay_core::types::{ShapedLine, TextBlock};

/// Shape one logical line for left-to-right drawing
pub fn shape(line: &str) -> ShapedLine {
    ArabicReshaper::new().shape(line)
}

/// Shape every line of a block independently, keeping line order
pub fn shape_block(block: &TextBlock) -> Vec<ShapedLine> {
    let reshaper = ArabicReshaper::new();
    block
        .lines()
        .iter()
        .map(|line| reshaper.shape(line))
        .collect()
}

impl ArabicReshaper {
    /// Reshape, then reorder into visual order
    pub fn shape(&self, line: &str) -> ShapedLine {
        let visual = reorder(&self.reshape(line));
        log::debug!(
            "shape: {} chars logical -> {} chars visual",
            line.chars().count(),
            visual.chars().count()
        );
        ShapedLine::new(visual)
    }
}


#[cfg(test)]
mod proptests;
