//! Batch progress display and per-run tallies

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;

/// Outcome counts for a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Images converted into documents
    pub converted: usize,
    /// Images converted whose output file already existed
    pub kept: usize,
    /// Images that failed conversion or writing
    pub failed: usize,
}

impl BatchSummary {
    /// Total images handled
    pub const fn total(&self) -> usize {
        self.converted + self.kept + self.failed
    }
}

/// Tracks batch progress, optionally drawing a bar on stderr
pub struct ProgressManager {
    bar: ProgressBar,
    summary: BatchSummary,
}

impl ProgressManager {
    /// Create a manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Create a manager that never draws
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        bar.set_style(Self::batch_style());
        Self {
            bar,
            summary: BatchSummary::default(),
        }
    }

    /// Set the number of files in the batch
    pub fn initialize(&mut self, file_count: usize) {
        self.bar.set_length(file_count as u64);
        self.bar.set_position(0);
        self.summary = BatchSummary::default();
    }

    /// Show the file currently being converted
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Record a converted file
    pub fn complete_file(&mut self) {
        self.summary.converted += 1;
        self.bar.inc(1);
    }

    /// Record a converted file whose output was kept
    pub fn keep_file(&mut self) {
        self.summary.kept += 1;
        self.bar.inc(1);
    }

    /// Record a failed file
    pub fn fail_file(&mut self) {
        self.summary.failed += 1;
        self.bar.inc(1);
    }

    /// Run `f` with the bar hidden so log lines are not torn
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        self.bar.suspend(f)
    }

    /// Counts so far
    pub const fn summary(&self) -> BatchSummary {
        self.summary
    }

    /// Remove the bar and return the final counts
    pub fn finish(&self) -> BatchSummary {
        self.bar.finish_and_clear();
        self.summary
    }

    fn batch_style() -> ProgressStyle {
        let template = format!(
            "[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}
