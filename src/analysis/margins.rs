//! Margin inference from a coarse sampling of grid intersections
//!
//! The clue-number area shares the colour of the very first sampled
//! intersection. For every sampled line the intersections matching that
//! colour are counted; the largest count over lines that are not mostly
//! margin-coloured is the margin width along that line's axis.

use crate::analysis::geometry::GridGeometry;
use crate::io::configuration::DetectionConfig;
use crate::io::error::{ConversionError, Result, invalid_source};
use crate::spatial::raster::{Axis, IntensitySource};

/// Margin sizes and the puzzle dimensions left over, all in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarginInfo {
    margin_top: usize,
    margin_left: usize,
    puzzle_width: usize,
    puzzle_height: usize,
}

impl MarginInfo {
    /// Create margin information
    ///
    /// # Errors
    ///
    /// Returns `MarginInference` if either puzzle dimension is zero
    pub const fn new(
        margin_top: usize,
        margin_left: usize,
        puzzle_width: usize,
        puzzle_height: usize,
    ) -> Result<Self> {
        if puzzle_width == 0 {
            return Err(ConversionError::MarginInference {
                axis: Axis::Horizontal,
                cells: margin_left,
                margin: margin_left,
            });
        }
        if puzzle_height == 0 {
            return Err(ConversionError::MarginInference {
                axis: Axis::Vertical,
                cells: margin_top,
                margin: margin_top,
            });
        }
        Ok(Self {
            margin_top,
            margin_left,
            puzzle_width,
            puzzle_height,
        })
    }

    /// Rows of clue margin above the puzzle
    pub const fn margin_top(&self) -> usize {
        self.margin_top
    }

    /// Columns of clue margin left of the puzzle
    pub const fn margin_left(&self) -> usize {
        self.margin_left
    }

    /// Puzzle columns
    pub const fn puzzle_width(&self) -> usize {
        self.puzzle_width
    }

    /// Puzzle rows
    pub const fn puzzle_height(&self) -> usize {
        self.puzzle_height
    }

    /// Margin cells along `axis` (left margin for horizontal)
    pub const fn margin(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.margin_left,
            Axis::Vertical => self.margin_top,
        }
    }
}

/// Infer clue margins and the puzzle size
///
/// # Errors
///
/// Returns:
/// - `InvalidSourceData` if the reference intersection lies outside the image
/// - `MarginInference` if a margin leaves no puzzle cells on its axis
pub fn infer_margins(
    image: &impl IntensitySource,
    geometry: &GridGeometry,
    config: &DetectionConfig,
) -> Result<MarginInfo> {
    let origin = config.scan_origin;
    let margin_color = image.intensity(origin, origin).ok_or_else(|| {
        invalid_source(&format!(
            "reference pixel ({origin}, {origin}) lies outside the {}x{} image",
            image.width(),
            image.height()
        ))
    })?;

    let margin_left = margin_along(image, geometry, config, Axis::Horizontal, margin_color);
    let puzzle_width = remaining_cells(image, geometry, Axis::Horizontal, margin_left)?;

    let margin_top = margin_along(image, geometry, config, Axis::Vertical, margin_color);
    let puzzle_height = remaining_cells(image, geometry, Axis::Vertical, margin_top)?;

    MarginInfo::new(margin_top, margin_left, puzzle_width, puzzle_height)
}

/// Largest margin-coloured count over lines running along `axis`
///
/// Lines where more than half the sampled intersections match the margin
/// colour are ignored, they are background rather than clue area.
pub fn margin_along(
    image: &impl IntensitySource,
    geometry: &GridGeometry,
    config: &DetectionConfig,
    axis: Axis,
    margin_color: u8,
) -> usize {
    let across = axis.transposed();
    let origin = config.scan_origin;
    let line_step = geometry.pitch(across);
    let sample_step = geometry.pitch(axis);

    let mut margin = 0;
    for line in (origin..image.extent(across)).step_by(line_step) {
        let mut sampled = 0;
        let mut matching = 0;
        for position in (origin..image.extent(axis)).step_by(sample_step) {
            sampled += 1;
            if image.sample(axis, position, line) == Some(margin_color) {
                matching += 1;
            }
        }

        if matching * 2 > sampled {
            continue;
        }
        margin = margin.max(matching);
    }
    margin
}

fn remaining_cells(
    image: &impl IntensitySource,
    geometry: &GridGeometry,
    axis: Axis,
    margin: usize,
) -> Result<usize> {
    let cells = image.extent(axis) / geometry.pitch(axis);
    cells
        .checked_sub(margin)
        .filter(|&remaining| remaining > 0)
        .ok_or(ConversionError::MarginInference {
            axis,
            cells,
            margin,
        })
}
