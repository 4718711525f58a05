//! Diagnostic logging. User-facing status lines are printed directly by the
//! commands; this only carries tracing output, which goes to stderr.

use tracing::Level;

/// Install the global subscriber. WARN by default, DEBUG with `--verbose`.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    // A subscriber may already be installed when embedded as a library
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
