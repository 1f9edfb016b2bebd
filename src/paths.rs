//! Centralized path definitions for rating-review
//!
//! ## Storage Layout
//!
//! ### Per-Project (working directory)
//!
//! ```text
//! project/
//! ├── .ratings.toml                  # Project config
//! └── .ratings/                      # Default data directory
//!     └── ratingandreviews.json      # One file per collection
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.ratings/
//! └── config.toml                    # Fallback config
//! ```

use std::path::PathBuf;

// =============================================================================
// Project-level paths
// =============================================================================

/// Default data directory name
pub const DATA_DIR: &str = ".ratings";

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".ratings.toml";

/// Get path to the project config file (`.ratings.toml`).
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG)
}

/// Get path to the default data directory (`.ratings/`).
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(DATA_DIR)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".ratings";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global directory.
///
/// Returns `~/.ratings/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.ratings/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
