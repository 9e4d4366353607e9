//! Pattern-based pixel mixing of two raster images
//!
//! Two sources are composited into one output by selecting, per pixel, which
//! source contributes according to a deterministic periodic pattern. The
//! pipeline resizes both sources onto a common canvas, generates a boolean
//! selection mask, performs a per-pixel channel-wise select, and derives
//! coverage statistics.

#![forbid(unsafe_code)]

/// Raster image representation and canvas resizing
pub mod canvas;
/// Pixel compositing and the mixing pipeline
pub mod compose;
/// Input/output operations, CLI, and error handling
pub mod io;
/// Periodic selection mask generation
pub mod pattern;
/// Coverage and resolution statistics
pub mod stats;

pub use io::error::{MixError, Result};
