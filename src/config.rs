//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_MAX_RECENT_SEARCHES, DEFAULT_REPOSITORY_DELAY_MS,
    DEFAULT_SEARCH_DEBOUNCE_MS, MAX_CONFIGURED_DELAY_MS,
};

/// Repository facade settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Artificial latency added to every query, in milliseconds (0 disables it)
    pub delay_ms: u64,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_REPOSITORY_DELAY_MS,
        }
    }
}

/// Search screen settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Pause after the last query change before searching, in milliseconds
    pub debounce_ms: u64,
    /// Number of recent searches kept
    pub max_recent_searches: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            max_recent_searches: DEFAULT_MAX_RECENT_SEARCHES,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ArchieWiki/config.toml`
/// - macOS: `~/Library/Application Support/ArchieWiki/config.toml`
/// - Windows: `%APPDATA%\ArchieWiki\config.toml`
///
/// The directory can be overridden with `ARCHIEWIKI_CONFIG_DIR`.
///
/// # Validation
///
/// - `delay_ms` and `debounce_ms` must not exceed 10 seconds
/// - `max_recent_searches` must be at least 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Repository facade settings
    #[serde(default)]
    pub repository: RepositoryConfig,
    /// Search screen settings
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Honors `ARCHIEWIKI_CONFIG_DIR`; otherwise:
    /// - Linux: `~/.config/ArchieWiki/`
    /// - macOS: `~/Library/Application Support/ArchieWiki/`
    /// - Windows: `%APPDATA%\ArchieWiki\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// Missing files yield the defaults; missing keys fall back per section.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.repository.delay_ms > MAX_CONFIGURED_DELAY_MS {
            anyhow::bail!(
                "repository.delay_ms must be at most {MAX_CONFIGURED_DELAY_MS} (got {})",
                self.repository.delay_ms
            );
        }

        if self.search.debounce_ms > MAX_CONFIGURED_DELAY_MS {
            anyhow::bail!(
                "search.debounce_ms must be at most {MAX_CONFIGURED_DELAY_MS} (got {})",
                self.search.debounce_ms
            );
        }

        if self.search.max_recent_searches == 0 {
            anyhow::bail!("search.max_recent_searches must be at least 1");
        }

        Ok(())
    }

    /// Artificial repository latency as a `Duration`.
    #[must_use]
    pub const fn repository_delay(&self) -> Duration {
        Duration::from_millis(self.repository.delay_ms)
    }

    /// Search debounce as a `Duration`.
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }
}
