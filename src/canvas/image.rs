//! In-memory raster image model
//!
//! Pixels live in an `ndarray::Array3<u8>` in (height, width, channels)
//! layout with 8-bit values. Images are immutable once constructed; every
//! pipeline stage allocates a fresh output instead of mutating its input.

use crate::io::error::{MixError, Result, invalid_config};
use image::{DynamicImage, ImageBuffer, Luma, Rgb};
use ndarray::Array3;

/// Supported channel layouts (no alpha)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// Single luminance channel
    Gray,
    /// Three channels: red, green, blue
    Rgb,
}

impl ChannelLayout {
    /// Number of channels in the layout
    pub const fn count(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
        }
    }

    /// Resolve a layout from a raw channel count
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for channel counts other than 1 or 3.
    pub fn from_count(channels: usize) -> Result<Self> {
        match channels {
            1 => Ok(Self::Gray),
            3 => Ok(Self::Rgb),
            _ => Err(invalid_config(
                "channels",
                &channels,
                &"supported channel counts are 1 (grayscale) and 3 (RGB)",
            )),
        }
    }
}

/// Opaque raster image with positive dimensions
///
/// Invariant: the pixel buffer shape is exactly
/// (height, width, `layout.count()`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: Array3<u8>,
    layout: ChannelLayout,
}

impl Image {
    /// Build an image from a raw pixel array in (height, width, channels) layout
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either dimension is zero or the channel
    /// count is unsupported.
    pub fn from_pixels(pixels: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = pixels.dim();
        if width == 0 || height == 0 {
            return Err(invalid_config(
                "dimensions",
                &format!("{width}x{height}"),
                &"image dimensions must be positive",
            ));
        }
        let layout = ChannelLayout::from_count(channels)?;
        Ok(Self { pixels, layout })
    }

    /// Build a uniformly colored image
    ///
    /// The color slice length selects the channel layout (1 or 3 values).
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for zero dimensions or an unsupported color
    /// length.
    pub fn solid(width: usize, height: usize, color: &[u8]) -> Result<Self> {
        ChannelLayout::from_count(color.len())?;
        let pixels = Array3::from_shape_fn((height, width, color.len()), |(_, _, c)| {
            color.get(c).copied().unwrap_or(0)
        });
        Self::from_pixels(pixels)
    }

    /// Convert a decoded image into the raster model
    ///
    /// 8-bit grayscale stays single-channel; every other color type is
    /// normalized to RGB, discarding alpha.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the decoded image has a zero dimension.
    pub fn from_dynamic(decoded: &DynamicImage) -> Result<Self> {
        match decoded {
            DynamicImage::ImageLuma8(buffer) => {
                let (width, height) = (buffer.width() as usize, buffer.height() as usize);
                let pixels = Array3::from_shape_fn((height, width, 1), |(y, x, _)| {
                    buffer.get_pixel(x as u32, y as u32).0[0]
                });
                Self::from_pixels(pixels)
            }
            other => {
                let rgb = other.to_rgb8();
                let (width, height) = (rgb.width() as usize, rgb.height() as usize);
                let pixels = Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
                    rgb.get_pixel(x as u32, y as u32)
                        .0
                        .get(c)
                        .copied()
                        .unwrap_or(0)
                });
                Self::from_pixels(pixels)
            }
        }
    }

    /// Convert back into an `image` crate value for resampling or encoding
    pub fn to_dynamic(&self) -> DynamicImage {
        let (width, height) = (self.width() as u32, self.height() as u32);
        match self.layout {
            ChannelLayout::Gray => {
                let buffer: ImageBuffer<Luma<u8>, Vec<u8>> =
                    ImageBuffer::from_fn(width, height, |x, y| {
                        Luma([self.sample(x as usize, y as usize, 0)])
                    });
                DynamicImage::ImageLuma8(buffer)
            }
            ChannelLayout::Rgb => {
                let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
                    ImageBuffer::from_fn(width, height, |x, y| {
                        Rgb([
                            self.sample(x as usize, y as usize, 0),
                            self.sample(x as usize, y as usize, 1),
                            self.sample(x as usize, y as usize, 2),
                        ])
                    });
                DynamicImage::ImageRgb8(buffer)
            }
        }
    }

    /// Produce an RGB copy, replicating the luminance channel if grayscale
    #[must_use]
    pub fn to_rgb(&self) -> Self {
        match self.layout {
            ChannelLayout::Rgb => self.clone(),
            ChannelLayout::Gray => {
                let pixels = Array3::from_shape_fn(
                    (self.height(), self.width(), 3),
                    |(y, x, _)| self.sample(x, y, 0),
                );
                Self {
                    pixels,
                    layout: ChannelLayout::Rgb,
                }
            }
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Width and height as a pair
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Channel layout of the pixel buffer
    pub const fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Number of channels per pixel
    pub const fn channels(&self) -> usize {
        self.layout.count()
    }

    /// Channel value at a pixel, if in bounds
    pub fn get(&self, x: usize, y: usize, channel: usize) -> Option<u8> {
        self.pixels.get((y, x, channel)).copied()
    }

    /// Channel value at a pixel, zero when out of bounds
    pub fn sample(&self, x: usize, y: usize, channel: usize) -> u8 {
        self.get(x, y, channel).unwrap_or(0)
    }

    /// Borrow the raw pixel array
    pub const fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }
}

/// Require two images to share a channel layout
///
/// # Errors
///
/// Returns `ChannelMismatch` when the layouts differ.
pub fn require_matching_layout(a: &Image, b: &Image) -> Result<()> {
    if a.layout() == b.layout() {
        Ok(())
    } else {
        Err(MixError::ChannelMismatch {
            channels_a: a.channels(),
            channels_b: b.channels(),
        })
    }
}
