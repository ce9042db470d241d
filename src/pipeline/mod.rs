//! Per-image conversion pipeline

/// Detection to document conversion for one image
pub mod converter;

pub use converter::{Conversion, Converter, puzzle_name};
