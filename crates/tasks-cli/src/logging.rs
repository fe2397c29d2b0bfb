// crates/tasks-cli/src/logging.rs - Diagnostic logging bootstrap
//
// Diagnostics go to stderr so stdout carries nothing but command output.

use tracing::Level;

/// Install the global tracing subscriber
///
/// `level` is a validated config value; `verbose` forces debug. Calling this
/// twice is harmless: the second subscriber is rejected and ignored.
pub fn init(level: &str, verbose: bool) {
    let level = if verbose {
        Level::DEBUG
    } else {
        parse_level(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_level(level: &str) -> Level {
    level.parse().unwrap_or(Level::WARN)
}
