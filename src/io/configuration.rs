//! Detection constants and the configuration passed through every pipeline stage

use crate::io::error::{Result, invalid_parameter};

// Intensity cutoff separating ink from paper
/// Pixels darker than this are ink, brighter ones are background
pub const COLOR_THRESHOLD: u8 = 65;

/// Offset of the first scan line and of the first sampled grid intersection
pub const SCAN_ORIGIN: usize = 7;

// Largest cell pitch that can be measured
/// Number of pixels inspected while looking for a pitch transition
pub const MAX_GRID_SCAN: usize = 50;

/// Largest accepted puzzle width or height in cells
pub const MAX_PUZZLE_DIMENSION: usize = 50;

// Batch settings
/// Image extension scanned for by default
pub const DEFAULT_IMAGE_EXTENSION: &str = "gif";
/// Extension of written level files
pub const OUTPUT_EXTENSION: &str = "nonogram";
/// Directory receiving level files when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Substring removed from file stems when naming puzzles
pub const NAME_STRIP_PATTERN: &str = ".d";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Thresholds and ceilings shared by geometry detection, margin inference and extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionConfig {
    /// Intensity cutoff between ink and background
    pub color_threshold: u8,
    /// Pixel offset of the scan lines and the first sampled intersection
    pub scan_origin: usize,
    /// Pixels inspected per axis before pitch detection gives up
    pub max_grid_scan: usize,
    /// Largest accepted puzzle width or height in cells
    pub max_puzzle_dimension: usize,
    /// Reject images whose horizontal and vertical pitch differ
    pub require_square_cells: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            color_threshold: COLOR_THRESHOLD,
            scan_origin: SCAN_ORIGIN,
            max_grid_scan: MAX_GRID_SCAN,
            max_puzzle_dimension: MAX_PUZZLE_DIMENSION,
            require_square_cells: false,
        }
    }
}

impl DetectionConfig {
    /// Replace the intensity threshold
    #[must_use]
    pub const fn with_threshold(mut self, color_threshold: u8) -> Self {
        self.color_threshold = color_threshold;
        self
    }

    /// Make asymmetric grids fatal for the image being converted
    #[must_use]
    pub const fn with_square_cells_required(mut self, required: bool) -> Self {
        self.require_square_cells = required;
        self
    }

    /// Check that the configuration can drive a conversion
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - The threshold is zero (nothing could ever count as ink)
    /// - Either ceiling is zero
    /// - The scan origin lies outside the pitch scan window
    pub fn validate(&self) -> Result<()> {
        if self.color_threshold == 0 {
            return Err(invalid_parameter(
                "color_threshold",
                &self.color_threshold,
                &"must be greater than zero",
            ));
        }
        if self.max_grid_scan == 0 {
            return Err(invalid_parameter(
                "max_grid_scan",
                &self.max_grid_scan,
                &"must be greater than zero",
            ));
        }
        if self.max_puzzle_dimension == 0 {
            return Err(invalid_parameter(
                "max_puzzle_dimension",
                &self.max_puzzle_dimension,
                &"must be greater than zero",
            ));
        }
        if self.scan_origin >= self.max_grid_scan {
            return Err(invalid_parameter(
                "scan_origin",
                &self.scan_origin,
                &format!("must lie inside the {} pixel scan window", self.max_grid_scan),
            ));
        }
        Ok(())
    }
}
