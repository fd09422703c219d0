//! Structured logging setup
//!
//! The terminal belongs to the UI while it runs, so logs only go to a file.
//! Without `--log-file` no subscriber is installed and `tracing` events are
//! discarded.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(path: &Path, verbose: bool) -> io::Result<()> {
    let file = File::create(path)?;
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
