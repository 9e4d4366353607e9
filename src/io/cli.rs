//! Command-line interface for mixing two images with a selection pattern

use crate::canvas::resize::ResizePolicy;
use crate::compose::pipeline::{MixConfig, MixOutcome, mix};
use crate::io::codec::{export_png, load_image};
use crate::io::configuration::{
    DEFAULT_BLOCK_SIZE, MAX_CANVAS_DIMENSION, OUTPUT_SUFFIX, PREVIEW_SUFFIX,
};
use crate::io::error::{Result, invalid_config};
use crate::io::visualization::render_pattern_preview;
use crate::pattern::mask::PatternKind;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Pattern choices exposed on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PatternArg {
    /// Square blocks alternating in both axes
    Checkerboard,
    /// Columns alternating left to right
    Vertical,
    /// Rows alternating top to bottom
    Horizontal,
    /// Bands running diagonally
    Diagonal,
}

impl PatternArg {
    /// Map the CLI choice onto the core pattern kind
    pub const fn kind(self) -> PatternKind {
        match self {
            Self::Checkerboard => PatternKind::Checkerboard,
            Self::Vertical => PatternKind::VerticalStripes,
            Self::Horizontal => PatternKind::HorizontalStripes,
            Self::Diagonal => PatternKind::Diagonal,
        }
    }
}

/// Canvas sizing choices exposed on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ResizeArg {
    /// Fit both sources to the smaller dimensions
    Smaller,
    /// Fit both sources to the larger dimensions
    Larger,
    /// Use explicit dimensions from --width and --height
    Custom,
}

#[derive(Parser)]
#[command(name = "pixelmix")]
#[command(
    author,
    version,
    about = "Mix two images pixel-by-pixel with a periodic selection pattern"
)]
/// Command-line arguments for the pixel mixing tool
pub struct Cli {
    /// First source image (selected where the pattern is active)
    #[arg(value_name = "IMAGE_A")]
    pub image_a: PathBuf,

    /// Second source image
    #[arg(value_name = "IMAGE_B")]
    pub image_b: PathBuf,

    /// Selection pattern
    #[arg(short, long, value_enum, default_value = "checkerboard")]
    pub pattern: PatternArg,

    /// Pattern block size in pixels
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,

    /// Canvas sizing strategy
    #[arg(short, long, value_enum, default_value = "smaller")]
    pub resize: ResizeArg,

    /// Canvas width for custom resizing
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Canvas height for custom resizing
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Output path (defaults to the first image's name with a suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write a pattern preview image beside the output
    #[arg(short = 'P', long)]
    pub preview: bool,

    /// Suppress the statistics report
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if the statistics report should be printed
    pub const fn should_report(&self) -> bool {
        !self.quiet
    }

    /// Resolve the resize policy from the sizing arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if custom sizing is requested without both
    /// dimensions, or with a dimension that is zero or beyond the safety cap.
    pub fn resize_policy(&self) -> Result<ResizePolicy> {
        match self.resize {
            ResizeArg::Smaller => Ok(ResizePolicy::FitSmaller),
            ResizeArg::Larger => Ok(ResizePolicy::FitLarger),
            ResizeArg::Custom => {
                let (Some(width), Some(height)) = (self.width, self.height) else {
                    return Err(invalid_config(
                        "resize",
                        &"custom",
                        &"custom resizing requires both --width and --height",
                    ));
                };
                for (name, value) in [("width", width), ("height", height)] {
                    if value == 0 || value > MAX_CANVAS_DIMENSION {
                        return Err(invalid_config(
                            name,
                            &value,
                            &format!("must be between 1 and {MAX_CANVAS_DIMENSION}"),
                        ));
                    }
                }
                Ok(ResizePolicy::Custom { width, height })
            }
        }
    }
}

/// Runs one mixing operation from CLI arguments
pub struct MixJob {
    cli: Cli,
}

impl MixJob {
    /// Create a job from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load both sources, mix them, write the output, and report statistics
    ///
    /// # Errors
    ///
    /// Returns an error if loading, parameter validation, mixing, or export
    /// fails. No partial output is written on failure.
    pub fn run(&self) -> Result<()> {
        let config = MixConfig {
            pattern: self.cli.pattern.kind(),
            block_size: self.cli.block_size,
            policy: self.cli.resize_policy()?,
        };
        config.validate()?;

        let a = load_image(&self.cli.image_a)?;
        let b = load_image(&self.cli.image_b)?;

        let outcome = mix(&a, &b, &config)?;

        let output_path = self.output_path();
        export_png(&outcome.image, &output_path)?;

        if self.cli.preview {
            let preview = render_pattern_preview(config.pattern, config.block_size)?;
            export_png(&preview, Self::preview_path(&output_path))?;
        }

        if self.cli.should_report() {
            Self::report(&output_path, &config, &outcome);
        }

        Ok(())
    }

    fn output_path(&self) -> PathBuf {
        if let Some(ref output) = self.cli.output {
            return output.clone();
        }

        let stem = self.cli.image_a.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = self.cli.image_a.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    fn preview_path(output_path: &Path) -> PathBuf {
        let stem = output_path.file_stem().unwrap_or_default();
        let preview_name = format!("{}{PREVIEW_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = output_path.parent() {
            parent.join(preview_name)
        } else {
            PathBuf::from(preview_name)
        }
    }

    // Allow print for the user-facing statistics report
    #[allow(clippy::print_stdout)]
    fn report(output_path: &Path, config: &MixConfig, outcome: &MixOutcome) {
        let report = &outcome.report;
        println!("Mixed image written to {}", output_path.display());
        println!(
            "Pattern: {} (block size {})",
            config.pattern, config.block_size
        );
        println!(
            "Pixel split: {:.1}% : {:.1}%",
            report.pixel_ratio_a * 100.0,
            report.pixel_ratio_b() * 100.0
        );
        println!(
            "Final resolution: {}x{}",
            report.final_size.0, report.final_size.1
        );
        println!("Resolution retention: {:.1}%", report.resolution_retention);
    }
}
