//! Error types and path context for image conversion

use crate::spatial::raster::Axis;
use std::fmt;
use std::path::{Path, PathBuf};

const UNKNOWN_PATH: &str = "<unknown>";

/// Main error type for all conversion operations
#[derive(Debug)]
pub enum ConversionError {
    /// Image file could not be opened or decoded
    ImageOpen {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// No pitch transition was found inside the scan window
    GeometryDetection {
        /// Axis whose scan line ran out
        axis: Axis,
        /// Number of pixels inspected
        scan_limit: usize,
    },

    /// Horizontal and vertical pitch disagree
    ///
    /// Cells are expected to be square. Conversion normally continues with
    /// both pitches applied independently.
    AsymmetricGrid {
        /// Pitch measured along the horizontal scan line
        horizontal: usize,
        /// Pitch measured along the vertical scan line
        vertical: usize,
    },

    /// Margin swallowed every cell along an axis
    MarginInference {
        /// Axis along which no puzzle cells remain
        axis: Axis,
        /// Whole cells that fit into the image along this axis
        cells: usize,
        /// Margin cells inferred along this axis
        margin: usize,
    },

    /// Extracted puzzle exceeds the supported size
    OversizedPuzzle {
        /// Extracted width in cells
        width: usize,
        /// Extracted height in cells
        height: usize,
        /// Largest accepted dimension
        limit: usize,
    },

    /// Image content cannot be turned into a puzzle grid
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Configuration validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl ConversionError {
    /// Whether conversion may carry on after reporting this error
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::AsymmetricGrid { .. })
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageOpen { path, source } => {
                write!(f, "Cannot open image '{}': {source}", path.display())
            }
            Self::GeometryDetection { axis, scan_limit } => {
                write!(
                    f,
                    "No {axis} grid pitch found within the first {scan_limit} pixels"
                )
            }
            Self::AsymmetricGrid {
                horizontal,
                vertical,
            } => {
                write!(
                    f,
                    "Grid width and grid height are different ({horizontal}px vs {vertical}px)"
                )
            }
            Self::MarginInference { axis, cells, margin } => {
                write!(
                    f,
                    "{axis} margin of {margin} cells leaves no puzzle cells out of {cells}"
                )
            }
            Self::OversizedPuzzle {
                width,
                height,
                limit,
            } => {
                write!(
                    f,
                    "Nonogram of {width}x{height} cells exceeds the supported {limit}x{limit}"
                )
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageOpen { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for conversion results
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Attaches the file being processed to path-carrying errors
pub trait WithPath<T> {
    /// Replace an unknown path in the error with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<ConversionError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors raised without a known file are rewritten
            if let ConversionError::ImageOpen { path: slot, .. }
            | ConversionError::FileSystem { path: slot, .. } = &mut error
            {
                if slot.as_os_str() == UNKNOWN_PATH {
                    *slot = path.to_path_buf();
                }
            }
            error
        })
    }
}

impl From<image::ImageError> for ConversionError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageOpen {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ConversionError {
    ConversionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> ConversionError {
    ConversionError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
