// this_file: crates/overlay-layout/src/lib.rs

//! Turning shaped lines into a sized, wrapped and placed text block.
//!
//! Two modes share the same pieces:
//!
//! - **Fit to width**: [`fit`] walks font sizes downward from
//!   [`START_FONT_SIZE`], wrapping every line at each size, and keeps the
//!   first size whose block is shorter than the margin box. The block is
//!   then centered.
//! - **Fixed**: [`fixed_layout`] derives one size from the canvas height
//!   and places the block at one of nine anchors.
//!
//! Nothing here fails. Text that cannot fit ends at [`MIN_FONT_SIZE`] and
//! simply overflows; a word wider than the box gets a line of its own.

mod fit;
mod position;
mod wrap;

pub use fit::{fit, fit_shaped, fixed_font_size, fixed_layout, layout, measure_at};
pub use position::{place, position};
pub use wrap::wrap;

/// Largest size the search tries
pub const START_FONT_SIZE: f32 = 200.0;

/// Distance between two tried sizes
pub const FONT_SIZE_STEP: f32 = 5.0;

/// Smallest size ever used, accepted whether the text fits or not
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Fixed mode uses a tenth of the canvas height
pub const FIXED_SIZE_DIVISOR: f32 = 10.0;

/// Bounds of the font-size search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitParams {
    pub start: f32,
    pub step: f32,
    pub min: f32,
}

impl FitParams {
    /// Candidate sizes, largest first
    ///
    /// The last candidate is always `min`, even when `step` does not divide
    /// the range evenly. A non-positive step falls back to
    /// [`FONT_SIZE_STEP`].
    pub fn sizes(&self) -> Vec<f32> {
        let step = if self.step > 0.0 {
            self.step
        } else {
            FONT_SIZE_STEP
        };

        let mut sizes = Vec::new();
        let mut size = self.start.max(self.min);
        loop {
            sizes.push(size);
            if size <= self.min {
                break;
            }
            size = (size - step).max(self.min);
        }
        sizes
    }
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            start: START_FONT_SIZE,
            step: FONT_SIZE_STEP,
            min: MIN_FONT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sizes_descend_by_five_to_ten() {
        let sizes = FitParams::default().sizes();
        assert_eq!(sizes.len(), 39);
        assert_eq!(sizes[0], 200.0);
        assert_eq!(sizes[1], 195.0);
        assert_eq!(sizes[38], 10.0);
    }

    #[test]
    fn uneven_step_still_ends_at_floor() {
        let params = FitParams {
            start: 30.0,
            step: 7.0,
            min: 10.0,
        };
        assert_eq!(params.sizes(), vec![30.0, 23.0, 16.0, 10.0]);
    }

    #[test]
    fn start_below_floor_tries_floor_only() {
        let params = FitParams {
            start: 5.0,
            step: 5.0,
            min: 10.0,
        };
        assert_eq!(params.sizes(), vec![10.0]);
    }

    #[test]
    fn zero_step_uses_default_step() {
        let params = FitParams {
            start: 20.0,
            step: 0.0,
            min: 10.0,
        };
        assert_eq!(params.sizes(), vec![20.0, 15.0, 10.0]);
    }
}
