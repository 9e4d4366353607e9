//! Periodic selection mask generation

/// Boolean selection masks and the pattern predicates that fill them
pub mod mask;
