//! Pixel compositing and the mixing pipeline

/// Per-pixel selection of two sources through a boolean mask
pub mod mixer;
/// End-to-end orchestration: resize, mask, composite, stats
pub mod pipeline;
