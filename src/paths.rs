//! Centralized path definitions for standup-cli
//!
//! This module provides a single source of truth for the filesystem paths
//! used by standup-cli.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/standup-cli/
//! └── config.toml               # Persistent user defaults
//! ```
//!
//! The config directory can be overridden via the `STANDUP_CLI_CONFIG_DIR`
//! environment variable, which tests use to isolate state.

use std::path::PathBuf;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "STANDUP_CLI_CONFIG_DIR";

/// Application directory name under the platform config root
const APP_DIR: &str = "standup-cli";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the standup-cli config directory.
///
/// Returns `$STANDUP_CLI_CONFIG_DIR` when set, otherwise
/// `<platform config dir>/standup-cli` (e.g. `~/.config/standup-cli`).
#[must_use]
pub fn config_dir() -> PathBuf {
    std::env::var_os(CONFIG_DIR_ENV).map_or_else(
        || dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR),
        PathBuf::from,
    )
}

/// Get the config file path.
///
/// Contains persistent user defaults (`days`, `author`, `path`, `copy`).
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
