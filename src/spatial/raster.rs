//! Greyscale raster access for grid sampling

use image::DynamicImage;
use ndarray::Array2;
use std::fmt;

/// Direction of a scan line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along a row, x varies
    Horizontal,
    /// Along a column, y varies
    Vertical,
}

impl Axis {
    /// The perpendicular axis
    #[must_use]
    pub const fn transposed(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// Read-only pixel intensities addressed by `(x, y)`
pub trait IntensitySource {
    /// Width in pixels
    fn width(&self) -> usize;

    /// Height in pixels
    fn height(&self) -> usize;

    /// Intensity at `(x, y)`, `None` outside the image
    fn intensity(&self, x: usize, y: usize) -> Option<u8>;

    /// Extent along `axis`
    fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.width(),
            Axis::Vertical => self.height(),
        }
    }

    /// Intensity at `along` on `axis`, `across` on the other axis
    fn sample(&self, axis: Axis, along: usize, across: usize) -> Option<u8> {
        match axis {
            Axis::Horizontal => self.intensity(along, across),
            Axis::Vertical => self.intensity(across, along),
        }
    }
}

/// Greyscale image stored row-major as `(y, x)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityImage {
    pixels: Array2<u8>,
}

impl IntensityImage {
    /// Wrap a `(height, width)` intensity array
    pub const fn new(pixels: Array2<u8>) -> Self {
        Self { pixels }
    }

    /// Build an image by evaluating `pixel(x, y)` everywhere
    pub fn from_fn(width: usize, height: usize, pixel: impl Fn(usize, usize) -> u8) -> Self {
        Self {
            pixels: Array2::from_shape_fn((height, width), |(y, x)| pixel(x, y)),
        }
    }

    /// Convert a decoded image to 8-bit luminance
    ///
    /// Palette images are expanded first, so intensities reflect the
    /// rendered shade rather than the palette index.
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        let luma = image.to_luma8();
        let (width, height) = (luma.width() as usize, luma.height() as usize);
        let mut pixels = Array2::zeros((height, width));

        for (x, y, pixel) in luma.enumerate_pixels() {
            let [value] = pixel.0;
            if let Some(slot) = pixels.get_mut((y as usize, x as usize)) {
                *slot = value;
            }
        }

        Self { pixels }
    }

    /// Underlying `(height, width)` array
    pub const fn pixels(&self) -> &Array2<u8> {
        &self.pixels
    }
}

impl IntensitySource for IntensityImage {
    fn width(&self) -> usize {
        self.pixels.ncols()
    }

    fn height(&self) -> usize {
        self.pixels.nrows()
    }

    fn intensity(&self, x: usize, y: usize) -> Option<u8> {
        self.pixels.get((y, x)).copied()
    }
}
