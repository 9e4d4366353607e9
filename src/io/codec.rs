//! Image file decoding and PNG export

use crate::canvas::image::Image;
use crate::io::error::{MixError, Result};
use std::path::Path;

/// Decode an image file into the raster model
///
/// 8-bit grayscale files stay single-channel; everything else is normalized
/// to RGB, discarding alpha.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is not a decodable image,
/// or decodes to a zero dimension.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Image> {
    let path_buf = path.as_ref().to_path_buf();
    let decoded = image::open(&path_buf).map_err(|e| MixError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Image::from_dynamic(&decoded)
}

/// Encode an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be written.
pub fn export_png<P: AsRef<Path>>(image: &Image, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MixError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    image
        .to_dynamic()
        .save(path)
        .map_err(|e| MixError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
