// SPDX-License-Identifier: MPL-2.0
//! Application configuration, loaded from and saved to `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Thumbnail size, grid columns, overscan rows
//! - `[storage]` - Message store and media directory locations
//! - `[auth]` - Authentication service URL and timeout
//!
//! The auth bearer token is never stored here; it comes from
//! `CHAT_LENS_AUTH_TOKEN` (see [`paths::auth_token`]).
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `CHAT_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use chat_lens::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.gallery.columns = 3;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when `settings.toml` cannot be parsed.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Grid settings. Out-of-range values are clamped when read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: u32,

    #[serde(default = "default_columns")]
    pub columns: u32,

    #[serde(default = "default_overscan_rows")]
    pub overscan_rows: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            columns: DEFAULT_COLUMNS,
            overscan_rows: DEFAULT_OVERSCAN_ROWS,
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn thumbnail_size(&self) -> u32 {
        self.thumbnail_size
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns.clamp(MIN_COLUMNS, MAX_COLUMNS)
    }

    #[must_use]
    pub fn overscan_rows(&self) -> u32 {
        self.overscan_rows
            .clamp(MIN_OVERSCAN_ROWS, MAX_OVERSCAN_ROWS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageConfig {
    /// Message store file. Defaults to `<data dir>/messages.db`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// Root of the downloaded media (`<media_dir>/media/<id>.<ext>`).
    /// Defaults to the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Message store path, falling back to the data directory.
    #[must_use]
    pub fn database_path(&self, data_dir: Option<&Path>) -> Option<PathBuf> {
        self.database_path
            .clone()
            .or_else(|| data_dir.map(|dir| dir.join(paths::DATABASE_FILE)))
    }

    /// Media root, falling back to the data directory.
    #[must_use]
    pub fn media_dir(&self, data_dir: Option<&Path>) -> Option<PathBuf> {
        self.media_dir
            .clone()
            .or_else(|| data_dir.map(Path::to_path_buf))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthConfig {
    /// Base URL of the authentication service. Without it every password
    /// change fails with "not configured".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default = "default_auth_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: DEFAULT_AUTH_TIMEOUT_SECS,
        }
    }
}

impl AuthConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .clamp(MIN_AUTH_TIMEOUT_SECS, MAX_AUTH_TIMEOUT_SECS),
        )
    }

    /// Base URL if set and non-blank.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_thumbnail_size() -> u32 {
    DEFAULT_THUMBNAIL_SIZE
}

fn default_columns() -> u32 {
    DEFAULT_COLUMNS
}

fn default_overscan_rows() -> u32 {
    DEFAULT_OVERSCAN_ROWS
}

fn default_auth_timeout_secs() -> u64 {
    DEFAULT_AUTH_TIMEOUT_SECS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    ThemeMode::parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid theme_mode: {raw}")))
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// Returns defaults plus a warning i18n key if the file exists but cannot be read.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "using default settings");
            (Config::default(), Some(LOAD_ERROR_KEY.to_string()))
        }
    }
}

/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                thumbnail_size: 200,
                columns: 3,
                overscan_rows: 1,
            },
            storage: StorageConfig {
                database_path: Some(PathBuf::from("/srv/chat/messages.db")),
                media_dir: None,
            },
            auth: AuthConfig {
                base_url: Some("https://auth.example.org".to_string()),
                timeout_secs: 30,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").unwrap();
        assert_eq!(config.gallery, GalleryConfig::default());
        assert_eq!(config.gallery.thumbnail_size(), 160);
        assert_eq!(config.gallery.columns(), 2);
        assert_eq!(config.auth.timeout(), Duration::from_secs(15));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config: Config = toml::from_str(
            "[gallery]\nthumbnail_size = 9000\ncolumns = 0\noverscan_rows = 50\n[auth]\ntimeout_secs = 0\n",
        )
        .unwrap();
        assert_eq!(config.gallery.thumbnail_size(), MAX_THUMBNAIL_SIZE);
        assert_eq!(config.gallery.columns(), MIN_COLUMNS);
        assert_eq!(config.gallery.overscan_rows(), MAX_OVERSCAN_ROWS);
        assert_eq!(config.auth.timeout(), Duration::from_secs(MIN_AUTH_TIMEOUT_SECS));
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"Dark\"\n").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n").is_err());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_malformed_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery\n").unwrap();

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn storage_paths_fall_back_to_data_dir() {
        let storage = StorageConfig::default();
        let data = Path::new("/data/ChatLens");
        assert_eq!(
            storage.database_path(Some(data)),
            Some(data.join("messages.db"))
        );
        assert_eq!(storage.media_dir(Some(data)), Some(data.to_path_buf()));
        assert_eq!(storage.media_dir(None), None);
    }

    #[test]
    fn blank_base_url_counts_as_unset() {
        let auth = AuthConfig {
            base_url: Some("  ".into()),
            ..AuthConfig::default()
        };
        assert_eq!(auth.base_url(), None);
    }
}
