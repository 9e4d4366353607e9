//! End-to-end mixing pipeline
//!
//! The configuration is an explicit value handed to [`mix`]; the core holds
//! no ambient state. Every stage is a deterministic, side-effect-free
//! function of its inputs.

use crate::canvas::image::Image;
use crate::canvas::resize::{ResizePolicy, resize_pair};
use crate::compose::mixer::composite;
use crate::io::error::{Result, invalid_config};
use crate::pattern::mask::{self, Mask, PatternKind};
use crate::stats::coverage::{StatsReport, compute_stats};

/// Parameters controlling one mixing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixConfig {
    /// Pattern family that fills the selection mask
    pub pattern: PatternKind,
    /// Pattern block size in pixels, at least 1
    pub block_size: usize,
    /// Canvas resolution strategy
    pub policy: ResizePolicy,
}

impl MixConfig {
    /// Validate parameter bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for a zero block size or non-positive custom
    /// canvas dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(invalid_config(
                "block_size",
                &self.block_size,
                &"block size must be at least 1",
            ));
        }
        if let ResizePolicy::Custom { width, height } = self.policy {
            if width == 0 || height == 0 {
                return Err(invalid_config(
                    "custom_dimensions",
                    &format!("{width}x{height}"),
                    &"custom canvas dimensions must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Everything produced by one mixing operation
#[derive(Debug, Clone)]
pub struct MixOutcome {
    /// Composited image on the final canvas
    pub image: Image,
    /// Selection mask used for compositing
    pub mask: Mask,
    /// Coverage and resolution statistics
    pub report: StatsReport,
}

/// Run the full pipeline: resize both sources, generate the mask,
/// composite, and derive statistics
///
/// # Errors
///
/// Returns `InvalidConfig` for invalid parameters; resizing guarantees the
/// compositor's dimension and channel preconditions, so its mismatch errors
/// cannot surface from here.
pub fn mix(a: &Image, b: &Image, config: &MixConfig) -> Result<MixOutcome> {
    config.validate()?;

    let resized = resize_pair(a, b, config.policy)?;
    let mask = mask::generate(resized.width, resized.height, config.pattern, config.block_size)?;
    let image = composite(&resized.a, &resized.b, &mask)?;
    let report = compute_stats(&mask, a.dimensions(), b.dimensions(), &image);

    Ok(MixOutcome {
        image,
        mask,
        report,
    })
}
