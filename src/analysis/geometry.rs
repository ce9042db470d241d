//! Cell pitch detection along two fixed scan lines
//!
//! Each axis is scanned from pixel zero along the line at the scan origin.
//! Bright pixels are counted until the first dark pixel after the run has
//! started; the run length plus the one-pixel separator is the pitch.

use crate::io::configuration::DetectionConfig;
use crate::io::error::{ConversionError, Result, invalid_parameter};
use crate::spatial::raster::{Axis, IntensitySource};

/// Pixel distance between consecutive cells on each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pitch_x: usize,
    pitch_y: usize,
}

impl GridGeometry {
    /// Create a geometry from horizontal and vertical pitch
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either pitch is zero
    pub fn new(pitch_x: usize, pitch_y: usize) -> Result<Self> {
        if pitch_x == 0 {
            return Err(invalid_parameter("pitch_x", &pitch_x, &"must be positive"));
        }
        if pitch_y == 0 {
            return Err(invalid_parameter("pitch_y", &pitch_y, &"must be positive"));
        }
        Ok(Self { pitch_x, pitch_y })
    }

    /// Horizontal cell pitch in pixels
    pub const fn pitch_x(&self) -> usize {
        self.pitch_x
    }

    /// Vertical cell pitch in pixels
    pub const fn pitch_y(&self) -> usize {
        self.pitch_y
    }

    /// Cell pitch along `axis`
    pub const fn pitch(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.pitch_x,
            Axis::Vertical => self.pitch_y,
        }
    }

    /// Whether both pitches agree
    pub const fn is_square(&self) -> bool {
        self.pitch_x == self.pitch_y
    }

    /// Report differing pitches
    ///
    /// # Errors
    ///
    /// Returns `AsymmetricGrid` if the horizontal and vertical pitch differ
    pub const fn ensure_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(ConversionError::AsymmetricGrid {
                horizontal: self.pitch_x,
                vertical: self.pitch_y,
            })
        }
    }
}

/// Detect the cell pitch on both axes
///
/// The two pitches are measured independently; checking that they agree is
/// left to the caller.
///
/// # Errors
///
/// Returns `GeometryDetection` if either scan line ends without a transition
pub fn detect_geometry(
    image: &impl IntensitySource,
    config: &DetectionConfig,
) -> Result<GridGeometry> {
    let pitch_x = detect_pitch(image, Axis::Horizontal, config)?;
    let pitch_y = detect_pitch(image, Axis::Vertical, config)?;
    GridGeometry::new(pitch_x, pitch_y)
}

/// Measure the pitch along one axis
///
/// Pixels equal to the threshold neither extend the run nor end it.
///
/// # Errors
///
/// Returns `GeometryDetection` if no dark pixel follows a bright run within
/// the scan ceiling, including when the scan line leaves the image first
pub fn detect_pitch(
    image: &impl IntensitySource,
    axis: Axis,
    config: &DetectionConfig,
) -> Result<usize> {
    let threshold = config.color_threshold;
    let mut run = 0;

    for along in 0..config.max_grid_scan {
        let Some(value) = image.sample(axis, along, config.scan_origin) else {
            break;
        };
        if value > threshold {
            run += 1;
        }
        if run > 0 && value < threshold {
            // one pixel for the border between blocks
            return Ok(run + 1);
        }
    }

    Err(ConversionError::GeometryDetection {
        axis,
        scan_limit: config.max_grid_scan,
    })
}
