//! Image decoding into greyscale rasters

use crate::io::error::{Result, WithPath};
use crate::spatial::raster::IntensityImage;
use std::path::Path;

/// Decode an image file into an intensity raster
///
/// The file handle lives only for the duration of decoding and is released
/// on every path, including decoding failures.
///
/// # Errors
///
/// Returns `ImageOpen` if:
/// - The file cannot be opened or read
/// - The content is not a supported image format
pub fn load_intensity_image(path: &Path) -> Result<IntensityImage> {
    let decoded = image::open(path).with_path(path)?;
    Ok(IntensityImage::from_dynamic(&decoded))
}
