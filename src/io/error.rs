//! Error types for mixing operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mixing operations
#[derive(Debug)]
pub enum MixError {
    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save the composited image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Mixing parameter validation failed
    ///
    /// Raised for non-positive block sizes, zero mask dimensions, and
    /// non-positive custom canvas dimensions. Invalid values are rejected,
    /// never clamped.
    InvalidConfig {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Source images carry incompatible channel counts
    ChannelMismatch {
        /// Channel count of the first image
        channels_a: usize,
        /// Channel count of the second image
        channels_b: usize,
    },

    /// Compositor inputs disagree on canvas dimensions
    ///
    /// Indicates a caller bug: the resizer's output contract guarantees
    /// equal sizes, so mismatched inputs mean a stage was bypassed.
    DimensionMismatch {
        /// Dimensions (width, height) of the first input
        expected: (usize, usize),
        /// Dimensions (width, height) of the offending input
        actual: (usize, usize),
        /// Which input disagreed
        input: &'static str,
    },
}

impl fmt::Display for MixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidConfig {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ChannelMismatch {
                channels_a,
                channels_b,
            } => {
                write!(
                    f,
                    "Channel mismatch: first image has {channels_a} channel(s), second has {channels_b}"
                )
            }
            Self::DimensionMismatch {
                expected,
                actual,
                input,
            } => {
                write!(
                    f,
                    "Dimension mismatch: {input} is {}x{}, expected {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
        }
    }
}

impl std::error::Error for MixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mixing results
pub type Result<T> = std::result::Result<T, MixError>;

/// Create an invalid configuration error
pub fn invalid_config(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MixError {
    MixError::InvalidConfig {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
