//! Application configuration.
//!
//! This module provides the [`AppConfig`] structure, read once at startup.
//! The app never writes it back: balance visibility and the active tab are
//! session state and reset on every launch.
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/bluebank/config.json`
//! - macOS: `~/Library/Application Support/bluebank/config.json`
//! - Windows: `%APPDATA%/bluebank/config.json`
//!
//! # Example
//!
//! ```json
//! {
//!   "data_file": "/home/me/bank.json",
//!   "tick_rate_ms": 100,
//!   "scroll_step": 2,
//!   "sheet_initial_offset": 0.0,
//!   "toast_ticks": 20
//! }
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    APP_NAME, DEFAULT_SCROLL_STEP, DEFAULT_SHEET_INITIAL_OFFSET, DEFAULT_TICK_RATE_MS,
    DEFAULT_TOAST_TICKS, tick_rate,
};

// ============================================================================
// Constants
// ============================================================================

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration. Every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Dataset file to load instead of the demo data. `--data` takes precedence.
    pub data_file: Option<PathBuf>,
    /// Interval between redraw ticks, in milliseconds.
    pub tick_rate_ms: u64,
    /// Rows scrolled per wheel notch or arrow key.
    pub scroll_step: u16,
    /// Base offset of the pull-up sheet slide, in rows.
    pub sheet_initial_offset: f32,
    /// Number of ticks a toast stays visible.
    pub toast_ticks: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            scroll_step: DEFAULT_SCROLL_STEP,
            sheet_initial_offset: DEFAULT_SHEET_INITIAL_OFFSET,
            toast_ticks: DEFAULT_TOAST_TICKS,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk.
    ///
    /// A missing file silently yields the defaults; an unreadable or
    /// malformed file is logged and also yields the defaults.
    #[must_use]
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("Config path unavailable, using defaults: {err}");
                return Self::default();
            }
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }

        match Self::try_load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded config");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON content
    /// cannot be parsed.
    pub fn try_load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Redraw interval, never faster than the supported minimum.
    #[must_use]
    pub fn tick_rate(&self) -> Duration {
        tick_rate(self.tick_rate_ms)
    }

    /// Scroll step, at least one row.
    #[must_use]
    pub fn scroll_step(&self) -> u16 {
        self.scroll_step.max(1)
    }
}

// ============================================================================
// Tests
// ============================================================================
