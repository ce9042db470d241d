//! Pixel rasters and extracted puzzle grids

/// Puzzle cell states and the extracted grid
pub mod grid;
/// Greyscale image access and scan axes
pub mod raster;

pub use grid::{CellState, PuzzleGrid};
pub use raster::{Axis, IntensityImage, IntensitySource};
