//! Per-pixel compositing of two sources through a selection mask

use crate::canvas::image::{Image, require_matching_layout};
use crate::io::error::{MixError, Result};
use crate::pattern::mask::Mask;
use ndarray::Array3;

/// Composite two images by selecting each pixel from one source
///
/// For every pixel and channel the output takes the first image's value
/// where the mask selects it and the second image's value otherwise. A pure
/// select: no blending, no interpolation, no rounding. Each cell is
/// independent of every other cell, so the fill is free to be parallelized
/// or vectorized without changing observable behavior.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the images and mask do not share identical
/// dimensions, or `ChannelMismatch` if the images disagree on channel layout.
pub fn composite(a: &Image, b: &Image, mask: &Mask) -> Result<Image> {
    require_matching_layout(a, b)?;

    if b.dimensions() != a.dimensions() {
        return Err(MixError::DimensionMismatch {
            expected: a.dimensions(),
            actual: b.dimensions(),
            input: "second image",
        });
    }
    if (mask.width(), mask.height()) != a.dimensions() {
        return Err(MixError::DimensionMismatch {
            expected: a.dimensions(),
            actual: (mask.width(), mask.height()),
            input: "mask",
        });
    }

    let shape = (a.height(), a.width(), a.channels());
    let pixels = Array3::from_shape_fn(shape, |(y, x, c)| {
        if mask.selects_first(x, y) {
            a.sample(x, y, c)
        } else {
            b.sample(x, y, c)
        }
    });

    Image::from_pixels(pixels)
}
