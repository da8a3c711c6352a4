//! Application settings, read from `inventory.toml`.

use crate::inventory::BootstrapPolicy;
use crate::query::PageSize;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};
use thiserror::Error;
use tracing::{info, warn};

pub const SETTINGS_FILE: &str = "inventory.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory of the file-backed key-value store.
    pub storage_dir: PathBuf,
    /// Key holding the product collection.
    pub storage_key: String,
    /// How long the delete alert stays visible.
    pub alert_ttl_ms: u64,
    pub default_page_size: PageSize,
    /// Capacity of the coordinator request channel.
    pub channel_capacity: usize,
    pub bootstrap: BootstrapPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./data"),
            storage_key: "products".into(),
            alert_ttl_ms: 3000,
            default_page_size: PageSize::Five,
            channel_capacity: 32,
            bootstrap: BootstrapPolicy::default(),
        }
    }
}

impl Settings {
    /// Parses a TOML settings file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn alert_ttl(&self) -> Duration {
        Duration::from_millis(self.alert_ttl_ms)
    }
}

/// Reads [`SETTINGS_FILE`] from the working directory.
///
/// A missing or broken file falls back to the defaults.
pub fn load_settings() -> Settings {
    match Settings::from_file(SETTINGS_FILE) {
        Ok(settings) => {
            info!(path = SETTINGS_FILE, "Loaded settings");
            settings
        }
        Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            info!(path = SETTINGS_FILE, "No settings file, using defaults");
            Settings::default()
        }
        Err(e) => {
            warn!(error = %e, "Using default settings");
            Settings::default()
        }
    }
}
