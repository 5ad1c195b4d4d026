//! Configuration file management for studi.
//!
//! Provides a TOML-based config file at `~/.config/studi/config.toml` and a
//! resolution chain for the data directory: CLI flag > env var > config file
//! > default.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub storage: StorageSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StorageSection {
    pub data_dir: String,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the studi config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/studi` or `~/.config/studi`.
/// We intentionally ignore the platform-specific `dirs::config_dir()`
/// (which returns `~/Library/Application Support` on macOS).
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("studi");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("studi")
}

/// Return the path to the studi config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Return the default data directory.
///
/// XDG layout again: `$XDG_DATA_HOME/studi` or `~/.local/share/studi`.
pub fn default_data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("studi");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".local")
        .join("share")
        .join("studi")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct StudiConfig {
    pub data_dir: PathBuf,
}

impl StudiConfig {
    /// Resolve the data directory using the chain:
    /// `cli_data_dir` > `STUDI_DATA_DIR` env > `config_file.storage.data_dir`
    /// > [`default_data_dir`].
    pub fn resolve(cli_data_dir: Option<&str>) -> Result<Self> {
        let data_dir = if let Some(dir) = cli_data_dir {
            PathBuf::from(dir)
        } else if let Ok(dir) = std::env::var("STUDI_DATA_DIR") {
            PathBuf::from(dir)
        } else if let Ok(cfg) = load_config() {
            PathBuf::from(cfg.storage.data_dir)
        } else {
            default_data_dir()
        };

        Ok(Self { data_dir })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
