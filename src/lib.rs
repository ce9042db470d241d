//! Conversion of nonogram grid images into FreeNono level files
//!
//! Each image runs through a fixed pipeline: the cell pitch is measured on two
//! scan lines, the clue margins are inferred from a coarse sampling of grid
//! intersections, and one pixel per remaining cell is classified as filled or
//! empty. The resulting grid is rendered as a level document.

#![forbid(unsafe_code)]

/// Geometry detection, margin inference and cell extraction
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Level document rendering and difficulty classification
pub mod output;
/// Per-image conversion pipeline
pub mod pipeline;
/// Pixel rasters and puzzle grids
pub mod spatial;

pub use io::configuration::DetectionConfig;
pub use io::error::{ConversionError, Result};
pub use pipeline::converter::{Conversion, Converter};
