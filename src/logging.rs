//! Tracing setup.
//!
//! The terminal belongs to the UI, so log records go to a file:
//!
//! - Linux: `~/.local/share/bluebank/bluebank.log`
//! - macOS: `~/Library/Application Support/bluebank/bluebank.log`
//! - Windows: `%LOCALAPPDATA%/bluebank/bluebank.log`
//!
//! The filter defaults to `bluebank=info` and can be overridden with `RUST_LOG`.

use color_eyre::{Result, eyre::eyre};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::constants::APP_NAME;

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "bluebank.log";

/// Directive used when `RUST_LOG` is not set.
const DEFAULT_DIRECTIVE: &str = "bluebank=info";

/// Returns the default log file path.
///
/// # Errors
///
/// Returns an error if the data directory cannot be determined.
pub fn default_log_path() -> Result<PathBuf> {
    let mut path = dirs::data_local_dir().ok_or_else(|| {
        eyre!("Could not determine data directory for the log file; pass --log-file instead")
    })?;
    path.push(APP_NAME);
    path.push(LOG_FILE_NAME);
    Ok(path)
}

/// Builds the level filter from `RUST_LOG`, falling back to the default.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber writing to `path`, or to the default path.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => default_log_path()?,
    };
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| eyre!("Failed to install log subscriber: {err}"))?;

    tracing::info!(path = %path.display(), version = env!("CARGO_PKG_VERSION"), "Logging started");
    Ok(path)
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}
