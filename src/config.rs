//! Optional user configuration
//!
//! Reads `<config_dir>/cek-outage/config.toml` when present. A missing or
//! malformed file falls back to defaults; configuration never blocks an
//! extraction run.

use std::path::PathBuf;

use serde::Deserialize;

use crate::fetch::DEFAULT_URL;

pub const DEFAULT_QUEUE: &str = "6.2";
pub const DEFAULT_UPDATE_INTERVAL: u64 = 30; // minutes
pub const MIN_UPDATE_INTERVAL: u64 = 5;
pub const MAX_UPDATE_INTERVAL: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Load-shedding queue identifier, e.g. "6.2".
    pub queue: String,
    /// Announcement page URL.
    pub url: String,
    /// Poll interval in minutes for watch mode.
    pub update_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            queue: DEFAULT_QUEUE.to_string(),
            url: DEFAULT_URL.to_string(),
            update_interval: DEFAULT_UPDATE_INTERVAL,
        }
    }
}

impl Config {
    /// Poll interval clamped to the supported range.
    pub fn clamped_interval(&self) -> u64 {
        self.update_interval
            .clamp(MIN_UPDATE_INTERVAL, MAX_UPDATE_INTERVAL)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cek-outage").join("config.toml"))
}

/// Load the user configuration, falling back to defaults.
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(_) => return Config::default(),
    };

    match toml::from_str(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring malformed config {}: {err}", path.display());
            Config::default()
        }
    }
}
