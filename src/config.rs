//! Configuration management
//!
//! Settings are read from `.ratings.toml` in the working directory, falling
//! back to `~/.ratings/config.toml`, falling back to built-in defaults.
//! Command-line flags override whatever is loaded here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;
use crate::storage::Backend;

/// rating-review configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend: memory, file
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Directory holding collection files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_backend() -> String {
    Backend::default().to_string()
}

fn default_data_dir() -> PathBuf {
    paths::data_dir()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_dir: default_data_dir(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log filter (e.g. "info", "debug"); `RUST_LOG` still wins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Config {
    /// Load the first config found: project file, then global file.
    ///
    /// Unreadable or malformed files are skipped with a warning.
    #[must_use]
    pub fn load() -> Self {
        let (config, skipped) = Self::discover();
        for (path, err) in &skipped {
            log::warn!("ignoring config {}: {err}", path.display());
        }
        config
    }

    /// Like [`Config::load`], but hands back the skipped files and their
    /// errors instead of logging them, for callers that set up logging
    /// after reading the config.
    #[must_use]
    pub fn discover() -> (Self, Vec<(PathBuf, anyhow::Error)>) {
        Self::discover_in(&[paths::project_config(), paths::global_config()])
    }

    /// Take the first loadable file from `candidates`, collecting failures
    #[must_use]
    pub fn discover_in(candidates: &[PathBuf]) -> (Self, Vec<(PathBuf, anyhow::Error)>) {
        let mut skipped = Vec::new();
        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from(path) {
                Ok(config) => return (config, skipped),
                Err(e) => skipped.push((path.clone(), e)),
            }
        }
        (Self::default(), skipped)
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Configured storage backend
    pub fn backend(&self) -> anyhow::Result<Backend> {
        self.storage.backend.parse().map_err(|e: String| anyhow::anyhow!(e))
    }
}
