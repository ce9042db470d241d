//! Grid geometry detection, margin inference and cell extraction
//!
//! The three stages run in this order for every image and keep no state
//! between images.

/// Cell classification over the puzzle region
pub mod extraction;
/// Cell pitch detection
pub mod geometry;
/// Clue margin inference
pub mod margins;

pub use extraction::extract_cells;
pub use geometry::{GridGeometry, detect_geometry};
pub use margins::{MarginInfo, infer_margins};
