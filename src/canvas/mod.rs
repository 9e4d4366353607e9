//! Raster image representation and canvas resizing

/// In-memory raster image model with channel layout handling
pub mod image;
/// Resize policy resolution and source resampling
pub mod resize;
