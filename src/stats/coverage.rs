//! Coverage ratios and resolution-retention metrics
//!
//! Coverage and resize retention are reported as two independent figures.
//! The canonical patterns split the canvas exactly 50:50 only when both
//! dimensions are multiples of twice the block size; off those multiples
//! boundary truncation shifts the ratio, so it is always counted exactly
//! rather than assumed.

use crate::canvas::image::Image;
use crate::pattern::mask::Mask;

/// Derived statistics for one mixing operation
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    /// Fraction of output pixels drawn from the first source, in [0, 1]
    pub pixel_ratio_a: f64,
    /// Original dimensions (width, height) of the first source
    pub original_a: (usize, usize),
    /// Original dimensions (width, height) of the second source
    pub original_b: (usize, usize),
    /// Final canvas dimensions (width, height)
    pub final_size: (usize, usize),
    /// Final pixel count relative to the first source's, as a percentage
    ///
    /// The first source is the reference baseline, so the figure is
    /// asymmetric when the sources differ in size. Exceeds 100 when the
    /// canvas upscales past the first source.
    pub resolution_retention: f64,
}

impl StatsReport {
    /// Fraction of output pixels drawn from the second source
    pub const fn pixel_ratio_b(&self) -> f64 {
        1.0 - self.pixel_ratio_a
    }
}

/// Compute coverage and retention statistics for a completed mix
pub fn compute_stats(
    mask: &Mask,
    original_a: (usize, usize),
    original_b: (usize, usize),
    final_image: &Image,
) -> StatsReport {
    let total_cells = mask.len();
    let pixel_ratio_a = if total_cells == 0 {
        0.0
    } else {
        mask.count_selected() as f64 / total_cells as f64
    };

    let final_size = final_image.dimensions();
    let original_pixels = original_a.0 * original_a.1;
    let resolution_retention = if original_pixels == 0 {
        0.0
    } else {
        (final_size.0 * final_size.1) as f64 / original_pixels as f64 * 100.0
    };

    StatsReport {
        pixel_ratio_a,
        original_a,
        original_b,
        final_size,
        resolution_retention,
    }
}
