//! Boolean selection masks generated from periodic patterns
//!
//! A mask cell of `true` selects the first source image at that pixel,
//! `false` selects the second. Each pattern is a closed-form predicate over
//! the pixel coordinates, so every cell is computed independently.

use crate::io::error::{Result, invalid_config};
use bitvec::prelude::*;
use std::fmt;

/// Geometric pattern family used to fill a selection mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Square blocks alternating in both axes: `(⌊x/b⌋ + ⌊y/b⌋) mod 2 == 0`
    Checkerboard,
    /// Columns alternating with x only: `⌊x/b⌋ mod 2 == 0`
    VerticalStripes,
    /// Rows alternating with y only: `⌊y/b⌋ mod 2 == 0`
    HorizontalStripes,
    /// Bands running diagonally: `⌊(x + y)/b⌋ mod 2 == 0`
    ///
    /// The sum is divided before flooring, so at block sizes above 1 the
    /// boundary runs diagonally rather than in square steps. The `(x + y)`
    /// orientation is canonical here; a mirrored `(x - y)` convention exists
    /// elsewhere and is not equivalent.
    Diagonal,
}

impl PatternKind {
    /// Evaluate the selection predicate for a single cell
    ///
    /// Returns `true` when the first source contributes the pixel at
    /// `(x, y)` for the given block size.
    pub const fn selects_first(self, x: usize, y: usize, block_size: usize) -> bool {
        match self {
            Self::Checkerboard => (x / block_size + y / block_size) % 2 == 0,
            Self::VerticalStripes => (x / block_size) % 2 == 0,
            Self::HorizontalStripes => (y / block_size) % 2 == 0,
            Self::Diagonal => ((x + y) / block_size) % 2 == 0,
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Checkerboard => "checkerboard",
            Self::VerticalStripes => "vertical-stripes",
            Self::HorizontalStripes => "horizontal-stripes",
            Self::Diagonal => "diagonal",
        };
        write!(f, "{name}")
    }
}

/// Per-pixel boolean selection grid in row-major order
///
/// Bit-packed; `true` means the first source image contributes that pixel.
/// Dimensions always match the canvas the mask was generated for, with no
/// undefined cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl Mask {
    /// Create a mask with every cell set to the same selection
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either dimension is zero.
    pub fn filled(width: usize, height: usize, selected: bool) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            bits: BitVec::repeat(selected, width * height),
            width,
            height,
        })
    }

    /// Test whether the first source is selected at `(x, y)`
    ///
    /// Out-of-bounds coordinates select the second source.
    pub fn selects_first(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits.get(y * self.width + x).as_deref() == Some(&true)
    }

    /// Mask width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Mask height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total cell count
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Test whether the mask has no cells
    ///
    /// Always false for generated masks, which reject zero dimensions.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count cells selecting the first source
    pub fn count_selected(&self) -> usize {
        self.bits.count_ones()
    }

    /// Create a new mask with every selection flipped
    #[must_use]
    pub fn complement(&self) -> Self {
        Self {
            bits: !self.bits.clone(),
            width: self.width,
            height: self.height,
        }
    }
}

/// Generate a selection mask from a periodic pattern
///
/// Total for all positive dimensions and block sizes. A block size at or
/// above the larger canvas dimension yields a single uniform region, which
/// is valid output rather than an error.
///
/// # Errors
///
/// Returns `InvalidConfig` if either dimension or the block size is zero.
pub fn generate(
    width: usize,
    height: usize,
    kind: PatternKind,
    block_size: usize,
) -> Result<Mask> {
    validate_dimensions(width, height)?;
    if block_size == 0 {
        return Err(invalid_config(
            "block_size",
            &block_size,
            &"block size must be at least 1",
        ));
    }

    let mut bits = BitVec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            bits.push(kind.selects_first(x, y, block_size));
        }
    }

    Ok(Mask {
        bits,
        width,
        height,
    })
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 {
        return Err(invalid_config(
            "width",
            &width,
            &"mask width must be positive",
        ));
    }
    if height == 0 {
        return Err(invalid_config(
            "height",
            &height,
            &"mask height must be positive",
        ));
    }
    Ok(())
}
