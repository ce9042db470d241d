//! Input/output operations, configuration and error handling

/// Command-line interface and batch driver
pub mod cli;
/// Detection constants and configuration
pub mod configuration;
/// Error types and path context
pub mod error;
/// Image decoding
pub mod image;
/// Diagnostics subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
/// Level file output
pub mod writer;
