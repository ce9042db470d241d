//! CLI entry point for converting nonogram images into level files

use clap::Parser;
use nonoscan::io::cli::{Cli, FileProcessor};
use nonoscan::io::logging::init_logger;

fn main() -> nonoscan::Result<()> {
    let cli = Cli::parse();
    // A subscriber installed by the environment takes precedence
    let _ = init_logger(cli.verbose, cli.quiet);
    let mut processor = FileProcessor::new(cli)?;
    processor.process()?;
    Ok(())
}
