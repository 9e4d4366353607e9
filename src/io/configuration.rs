//! Runtime defaults and safety limits

/// Default pattern block size in pixels
pub const DEFAULT_BLOCK_SIZE: usize = 2;

/// Edge length of the square pattern preview image
pub const PREVIEW_SIZE: usize = 100;

/// Preview color for cells drawn from the first source
pub const PREVIEW_COLOR_A: [u8; 3] = [255, 100, 100];

/// Preview color for cells drawn from the second source
pub const PREVIEW_COLOR_B: [u8; 3] = [100, 100, 255];

// Safety limit to prevent excessive memory allocation
/// Maximum allowed custom canvas dimension, enforced by the CLI only
pub const MAX_CANVAS_DIMENSION: usize = 10_000;

// Output settings
/// Suffix added to default output filenames
pub const OUTPUT_SUFFIX: &str = "_mixed";

/// Suffix added to pattern preview filenames
pub const PREVIEW_SUFFIX: &str = "_pattern";
