//! Pattern preview rendering
//!
//! Renders a small two-color image of a selection mask so a pattern and
//! block size can be judged before committing to a full mix.

use crate::canvas::image::Image;
use crate::io::configuration::{PREVIEW_COLOR_A, PREVIEW_COLOR_B, PREVIEW_SIZE};
use crate::io::error::Result;
use crate::pattern::mask::{self, PatternKind};
use ndarray::Array3;

/// Render a square preview of a pattern at the default preview size
///
/// Cells drawn from the first source are red, cells from the second blue.
///
/// # Errors
///
/// Returns `InvalidConfig` if the block size is zero.
pub fn render_pattern_preview(kind: PatternKind, block_size: usize) -> Result<Image> {
    render_mask_preview(kind, block_size, PREVIEW_SIZE)
}

/// Render a square preview of a pattern at an explicit edge length
///
/// # Errors
///
/// Returns `InvalidConfig` if the block size or edge length is zero.
pub fn render_mask_preview(kind: PatternKind, block_size: usize, size: usize) -> Result<Image> {
    let mask = mask::generate(size, size, kind, block_size)?;

    let pixels = Array3::from_shape_fn((size, size, 3), |(y, x, c)| {
        let color = if mask.selects_first(x, y) {
            PREVIEW_COLOR_A
        } else {
            PREVIEW_COLOR_B
        };
        color.get(c).copied().unwrap_or(0)
    });

    Image::from_pixels(pixels)
}
