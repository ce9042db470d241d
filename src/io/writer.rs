//! Level file placement under the output root

use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::{ConversionError, Result};
use crate::output::difficulty::Difficulty;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to a converted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Document written to the path
    Written(PathBuf),
    /// A file already existed at the path and was left untouched
    Kept(PathBuf),
    /// Dry run, nothing written to the path
    Planned(PathBuf),
}

impl WriteOutcome {
    /// Target path of the document
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(path) | Self::Kept(path) | Self::Planned(path) => path,
        }
    }
}

/// Writes level documents below an output directory
#[derive(Debug, Clone)]
pub struct NonogramWriter {
    output_dir: PathBuf,
    overwrite: bool,
    dry_run: bool,
}

impl NonogramWriter {
    /// Create a writer rooted at `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            overwrite: false,
            dry_run: false,
        }
    }

    /// Replace existing level files instead of keeping them
    #[must_use]
    pub const fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Report target paths without touching the file system
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Output root
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path for a puzzle, inside the difficulty sub-directory when there is one
    pub fn output_path(&self, name: &str, difficulty: Difficulty) -> PathBuf {
        let mut path = self.output_dir.clone();
        if let Some(directory) = difficulty.directory() {
            path.push(directory);
        }
        path.push(format!("{name}.{OUTPUT_EXTENSION}"));
        path
    }

    /// Write `document` for the named puzzle
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the target directory cannot be created or the
    /// file cannot be written
    pub fn write(&self, name: &str, difficulty: Difficulty, document: &str) -> Result<WriteOutcome> {
        let path = self.output_path(name, difficulty);

        if self.dry_run {
            return Ok(WriteOutcome::Planned(path));
        }
        if !self.overwrite && path.exists() {
            return Ok(WriteOutcome::Kept(path));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConversionError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        fs::write(&path, document).map_err(|e| ConversionError::FileSystem {
            path: path.clone(),
            operation: "write level file",
            source: e,
        })?;

        Ok(WriteOutcome::Written(path))
    }
}
