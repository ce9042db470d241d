//! Command-line interface for batch conversion of nonogram images

use crate::io::configuration::{
    COLOR_THRESHOLD, DEFAULT_IMAGE_EXTENSION, DEFAULT_OUTPUT_DIR, DetectionConfig,
};
use crate::io::error::{ConversionError, Result, invalid_parameter};
use crate::io::progress::{BatchSummary, ProgressManager};
use crate::io::writer::{NonogramWriter, WriteOutcome};
use crate::output::difficulty::SizeClassifier;
use crate::pipeline::converter::Converter;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "nonoscan")]
#[command(
    author,
    version,
    about = "Convert nonogram grid images into FreeNono level files"
)]
/// Command-line arguments for the converter
// Conversion switches are independent booleans by nature
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Image file or directory of images to convert
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory receiving the level files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Image file extension to scan for in a directory
    #[arg(short, long, default_value = DEFAULT_IMAGE_EXTENSION)]
    pub extension: String,

    /// Intensity separating ink from background
    #[arg(short, long, default_value_t = COLOR_THRESHOLD)]
    pub threshold: u8,

    /// Fail images whose cells are not square
    #[arg(long)]
    pub strict_square: bool,

    /// Sort level files into difficulty directories by puzzle size
    #[arg(short, long)]
    pub sort_by_size: bool,

    /// Convert and report without writing level files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Overwrite level files that already exist
    #[arg(long)]
    pub no_skip: bool,

    /// Suppress progress output and everything but errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase diagnostic detail (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be kept
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Detection settings derived from the arguments
    pub fn detection_config(&self) -> DetectionConfig {
        DetectionConfig::default()
            .with_threshold(self.threshold)
            .with_square_cells_required(self.strict_square)
    }
}

/// Orchestrates batch conversion with progress tracking
///
/// Every file is converted independently. A failure is reported and counted,
/// and the batch moves on to the next file.
pub struct FileProcessor {
    cli: Cli,
    converter: Converter,
    writer: NonogramWriter,
    progress_manager: ProgressManager,
}

impl FileProcessor {
    /// Create a processor for the given arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the detection settings are invalid
    pub fn new(cli: Cli) -> Result<Self> {
        let mut converter = Converter::new(cli.detection_config())?;
        if cli.sort_by_size {
            converter = converter.with_classifier(SizeClassifier);
        }

        let writer = NonogramWriter::new(&cli.output)
            .overwrite(!cli.skip_existing())
            .dry_run(cli.dry_run);

        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Ok(Self {
            cli,
            converter,
            writer,
            progress_manager,
        })
    }

    /// Convert every matching file under the target
    ///
    /// # Errors
    ///
    /// Returns an error only if the target itself cannot be read; failures
    /// of individual files are counted in the summary
    pub fn process(&mut self) -> Result<BatchSummary> {
        let files = self.collect_files()?;

        if files.is_empty() {
            warn!(
                "No .{} images found in '{}'",
                self.cli.extension,
                self.cli.target.display()
            );
            return Ok(BatchSummary::default());
        }

        self.progress_manager.initialize(files.len());

        for file in &files {
            self.progress_manager.start_file(file);
            match self.process_file(file) {
                Ok(WriteOutcome::Kept(path)) => {
                    self.progress_manager.suspend(|| {
                        warn!("Skipping: {} (output exists)", path.display());
                    });
                    self.progress_manager.keep_file();
                }
                Ok(outcome) => {
                    self.progress_manager.suspend(|| {
                        info!("{} -> {}", file.display(), outcome.path().display());
                    });
                    self.progress_manager.complete_file();
                }
                Err(e) => {
                    self.progress_manager.suspend(|| {
                        error!("{}: {e}", file.display());
                    });
                    self.progress_manager.fail_file();
                }
            }
        }

        let summary = self.progress_manager.finish();
        info!(
            converted = summary.converted,
            kept = summary.kept,
            failed = summary.failed,
            "Batch finished"
        );
        Ok(summary)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if self.has_image_extension(target) {
                Ok(vec![target.clone()])
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("file must be a .{} image", self.cli.extension),
                ))
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| ConversionError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| ConversionError::FileSystem {
                        path: target.clone(),
                        operation: "read directory entry",
                        source: e,
                    })?
                    .path();
                if path.is_file() && self.has_image_extension(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or a directory",
            ))
        }
    }

    fn has_image_extension(&self, path: &Path) -> bool {
        let wanted = self.cli.extension.trim_start_matches('.');
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
    }

    fn process_file(&self, input_path: &Path) -> Result<WriteOutcome> {
        let conversion = self.converter.convert_file(input_path)?;
        self.writer
            .write(&conversion.name, conversion.difficulty, &conversion.document)
    }
}
