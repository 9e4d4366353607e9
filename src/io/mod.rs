//! Input/output operations and error handling

/// Command-line interface and mixing job orchestration
pub mod cli;
/// PNG decoding and encoding for the raster image model
pub mod codec;
/// Runtime defaults and safety limits
pub mod configuration;
/// Error types for mixing operations
pub mod error;
/// Pattern preview rendering
pub mod visualization;
