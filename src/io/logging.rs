//! Diagnostics output on stderr

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for the given verbosity
///
/// Quiet runs only report failures. Each `-v` lowers the level by one step.
pub const fn filter_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "nonoscan=error";
    }
    match verbosity {
        0 => "nonoscan=warn",
        1 => "nonoscan=info",
        2 => "nonoscan=debug",
        _ => "nonoscan=trace",
    }
}

/// Install the global diagnostics subscriber
///
/// `RUST_LOG` takes precedence over the verbosity flags.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_logger(
    verbosity: u8,
    quiet: bool,
) -> std::result::Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity, quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
}
