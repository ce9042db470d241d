//! Single-image conversion from raster to level document

use crate::analysis::extraction::extract_cells;
use crate::analysis::geometry::{GridGeometry, detect_geometry};
use crate::analysis::margins::{MarginInfo, infer_margins};
use crate::io::configuration::{DetectionConfig, NAME_STRIP_PATTERN};
use crate::io::error::Result;
use crate::io::image::load_intensity_image;
use crate::output::difficulty::{Difficulty, DifficultyClassifier, Unclassified};
use crate::output::serializer::serialize_with_difficulty;
use crate::spatial::grid::PuzzleGrid;
use crate::spatial::raster::IntensitySource;
use std::path::Path;
use tracing::{debug, info, warn};

/// Everything learned while converting one image
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Puzzle name written to the document
    pub name: String,
    /// Detected cell pitch
    pub geometry: GridGeometry,
    /// Inferred margins and puzzle size
    pub margins: MarginInfo,
    /// Extracted cells
    pub grid: PuzzleGrid,
    /// Classifier verdict
    pub difficulty: Difficulty,
    /// Rendered level document
    pub document: String,
}

/// Runs detection, margin inference, extraction, classification and rendering
pub struct Converter {
    config: DetectionConfig,
    classifier: Box<dyn DifficultyClassifier>,
}

impl Converter {
    /// Create a converter that leaves puzzles unrated
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn new(config: DetectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            classifier: Box::new(Unclassified),
        })
    }

    /// Replace the difficulty classifier
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl DifficultyClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Configuration used for every stage
    pub const fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Convert an image that is already in memory
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `GeometryDetection` if no cell pitch is found
    /// - `AsymmetricGrid` if the pitches differ and square cells are required
    /// - `MarginInference` if the margins leave no puzzle cells
    /// - `InvalidSourceData` if no cells can be sampled
    /// - `OversizedPuzzle` if the puzzle exceeds the supported size
    pub fn convert(&self, name: &str, image: &impl IntensitySource) -> Result<Conversion> {
        let geometry = detect_geometry(image, &self.config)?;
        info!(
            pitch_x = geometry.pitch_x(),
            pitch_y = geometry.pitch_y(),
            "{name}: grid pitch detected"
        );

        if let Err(error) = geometry.ensure_square() {
            if self.config.require_square_cells || !error.is_recoverable() {
                return Err(error);
            }
            warn!("{name}: {error}, continuing with independent pitches");
        }

        let margins = infer_margins(image, &geometry, &self.config)?;
        info!(
            margin_top = margins.margin_top(),
            margin_left = margins.margin_left(),
            width = margins.puzzle_width(),
            height = margins.puzzle_height(),
            "{name}: margins inferred"
        );

        let grid = extract_cells(image, &geometry, &margins, &self.config)?;
        if grid.width() != margins.puzzle_width() || grid.height() != margins.puzzle_height() {
            warn!(
                "{name}: extracted {}x{} cells, margins predicted {}x{}",
                grid.width(),
                grid.height(),
                margins.puzzle_width(),
                margins.puzzle_height()
            );
        }
        debug!("{name}: extracted cells\n{grid}");

        let difficulty = self.classifier.classify(&grid);
        let document = serialize_with_difficulty(name, &grid, difficulty);

        Ok(Conversion {
            name: name.to_string(),
            geometry,
            margins,
            grid,
            difficulty,
            document,
        })
    }

    /// Decode and convert an image file
    ///
    /// The file is closed once decoding finishes, before any analysis runs.
    ///
    /// # Errors
    ///
    /// Returns `ImageOpen` if the file cannot be decoded, otherwise the
    /// errors of [`Converter::convert`]
    pub fn convert_file(&self, path: &Path) -> Result<Conversion> {
        let image = load_intensity_image(path)?;
        self.convert(&puzzle_name(path), &image)
    }
}

/// Puzzle name for an image file: the stem without any `.d` markers
pub fn puzzle_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .replace(NAME_STRIP_PATTERN, "")
}
