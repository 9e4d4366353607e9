//! Coverage and resolution statistics

/// Mask coverage ratios and resolution retention
pub mod coverage;
