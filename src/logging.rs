//! Diagnostics through `tracing`.
//!
//! The terminal is owned by the UI, so events go to a file next to the
//! config file. `RUST_LOG` overrides the default filter.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `path`.
///
/// Falls back to discarding output when the file cannot be opened; calling
/// this twice is harmless (the second call is ignored).
pub fn init(path: &Path, verbose: bool) {
    let default = if verbose { "pomomemo=debug" } else { "pomomemo=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(path));

    let result = match file {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        Err(_) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!(file = %path.display(), "diagnostics initialised");
    }
}
