//! Cell classification over the puzzle region

use crate::analysis::geometry::GridGeometry;
use crate::analysis::margins::MarginInfo;
use crate::io::configuration::DetectionConfig;
use crate::io::error::{ConversionError, Result};
use crate::spatial::grid::{CellState, PuzzleGrid};
use crate::spatial::raster::IntensitySource;

/// Sample one pixel per puzzle cell and classify it
///
/// Sampling starts past the margins and steps by the pitch until the image
/// ends. Dark samples are filled cells, so the comparison runs opposite to
/// the one used for pitch detection.
///
/// # Errors
///
/// Returns:
/// - `InvalidSourceData` if no cells lie inside the image past the margins
/// - `OversizedPuzzle` if the grid exceeds the configured ceiling
pub fn extract_cells(
    image: &impl IntensitySource,
    geometry: &GridGeometry,
    margins: &MarginInfo,
    config: &DetectionConfig,
) -> Result<PuzzleGrid> {
    let start_x = config.scan_origin + margins.margin_left() * geometry.pitch_x();
    let start_y = config.scan_origin + margins.margin_top() * geometry.pitch_y();

    let rows: Vec<Vec<CellState>> = (start_y..image.height())
        .step_by(geometry.pitch_y())
        .map(|y| {
            (start_x..image.width())
                .step_by(geometry.pitch_x())
                .map(|x| classify(image.intensity(x, y), config.color_threshold))
                .collect()
        })
        .collect();

    let grid = PuzzleGrid::from_rows(&rows)?;
    ensure_supported_size(&grid, config)?;
    Ok(grid)
}

/// Reject grids larger than the configured ceiling
///
/// # Errors
///
/// Returns `OversizedPuzzle` if either dimension exceeds
/// `max_puzzle_dimension`
pub const fn ensure_supported_size(grid: &PuzzleGrid, config: &DetectionConfig) -> Result<()> {
    let limit = config.max_puzzle_dimension;
    if grid.width() > limit || grid.height() > limit {
        return Err(ConversionError::OversizedPuzzle {
            width: grid.width(),
            height: grid.height(),
            limit,
        });
    }
    Ok(())
}

fn classify(intensity: Option<u8>, threshold: u8) -> CellState {
    CellState::from_filled(intensity.is_some_and(|value| value < threshold))
}
