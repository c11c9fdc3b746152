//! File logging
//!
//! Logging is off unless `TERMDIR_LOG` is set. Its value is the filter
//! (e.g. `debug` or `termdir=trace`). Output never goes to the terminal,
//! which is owned by the browser.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable that enables logging
pub const LOG_ENV: &str = "TERMDIR_LOG";

/// Default log file (<cache_dir>/termdir/termdir.log)
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("termdir").join("termdir.log"))
}

/// Install the global subscriber when `TERMDIR_LOG` is set.
///
/// Returns the file being written, or None when logging stays off.
pub fn init(log_file: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    let Ok(filter) = std::env::var(LOG_ENV) else {
        return Ok(None);
    };
    let Some(path) = log_file.map(Path::to_path_buf).or_else(default_log_path) else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot install logger: {}", e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(Some(path))
}
