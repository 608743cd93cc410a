//! Global configuration management
//!
//! Provides persistent storage for user defaults. Config is stored at
//! `~/.config/standup-cli/config.toml` (XDG standard).
//!
//! Loading is forgiving: a missing or malformed file falls back to the
//! built-in defaults (a malformed file logs a warning), so a broken config
//! never prevents generating a standup.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Global standup-cli configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Persistent defaults for the generate options
    #[serde(default)]
    pub defaults: Defaults,
}

/// Persistent defaults for the generate options.
///
/// Each field seeds the corresponding CLI option when the flag is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Number of days to look back
    #[serde(default = "default_days")]
    pub days: u32,
    /// Author name filter (None = all authors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Repository path or URL (None = current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Copy the summary to the clipboard
    #[serde(default)]
    pub copy: bool,
}

const fn default_days() -> u32 {
    1
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            days: default_days(),
            author: None,
            path: None,
            copy: false,
        }
    }
}

impl GlobalConfig {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        paths::config_dir()
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from disk, or fall back to defaults.
    ///
    /// A malformed file logs a warning and yields the defaults rather than
    /// failing the whole run.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        let Ok(content) = fs::read_to_string(&path) else {
            return Self::default();
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring malformed config at {}: {err}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_path();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Set a default by key.
    ///
    /// Keys: `days` (integer), `author`, `path`, `copy` (true/false).
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "days" => {
                self.defaults.days = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid value for days: '{value}' (expected a positive integer)"))?;
            },
            "author" => self.defaults.author = Some(value.to_string()),
            "path" => self.defaults.path = Some(value.to_string()),
            "copy" => {
                self.defaults.copy = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid value for copy: '{value}' (expected true or false)"))?;
            },
            _ => anyhow::bail!("unknown config key: '{key}'. Use: days, author, path, copy"),
        }
        Ok(())
    }

    /// Restore a default to its built-in value by key
    pub fn unset(&mut self, key: &str) -> anyhow::Result<()> {
        match key {
            "days" => self.defaults.days = default_days(),
            "author" => self.defaults.author = None,
            "path" => self.defaults.path = None,
            "copy" => self.defaults.copy = false,
            _ => anyhow::bail!("unknown config key: '{key}'. Use: days, author, path, copy"),
        }
        Ok(())
    }
}
