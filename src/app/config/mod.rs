// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[content]` - Contentful space, credentials and content type
//! - `[window]` - Initial window size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `JOURNAL_STRIP_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! Credentials may also come from the environment (`CONTENTFUL_SPACE_ID`,
//! `CONTENTFUL_ACCESS_TOKEN`), which wins over the file.
//!
//! # Examples
//!
//! ```no_run
//! use journal_strip::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config::apply_env_overrides(&mut config);
//! let settings = config.contentful_settings();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::infrastructure::contentful::ContentfulSettings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing file cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Contentful connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,

    /// Delivery API token. Prefer the environment variable over the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    /// Content type id queried on start-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// API host, mainly for the preview API or a local mock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    #[serde(default = "default_window_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Content type to query, falling back to `journal`.
    #[must_use]
    pub fn content_type(&self) -> &str {
        non_blank(self.content.content_type.as_deref()).unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    /// Builds the Contentful adapter settings from the `[content]` section.
    #[must_use]
    pub fn contentful_settings(&self) -> ContentfulSettings {
        let content = &self.content;
        ContentfulSettings {
            space_id: non_blank(content.space_id.as_deref()).map(str::to_string),
            access_token: non_blank(content.access_token.as_deref()).map(str::to_string),
            environment: non_blank(content.environment.as_deref())
                .unwrap_or(DEFAULT_ENVIRONMENT)
                .to_string(),
            host: non_blank(content.host.as_deref())
                .unwrap_or(DEFAULT_HOST)
                .to_string(),
            ..ContentfulSettings::default()
        }
    }

    /// Initial window size, clamped to the minimum.
    #[must_use]
    pub fn window_size(&self) -> iced::Size {
        let width = self
            .window
            .width
            .filter(|w| w.is_finite())
            .unwrap_or(DEFAULT_WINDOW_WIDTH)
            .max(MIN_WINDOW_WIDTH);
        let height = self
            .window
            .height
            .filter(|h| h.is_finite())
            .unwrap_or(DEFAULT_WINDOW_HEIGHT)
            .max(MIN_WINDOW_HEIGHT);
        iced::Size::new(width, height)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_window_width() -> Option<f32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<f32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Environment Overrides
// =============================================================================

/// Applies `CONTENTFUL_*` environment variables on top of the file values.
pub fn apply_env_overrides(config: &mut Config) {
    apply_env_overrides_with(config, |name| std::env::var(name).ok());
}

/// Same as [`apply_env_overrides`] with an injectable variable lookup.
pub fn apply_env_overrides_with(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let read = |primary: &str, fallback: &str| {
        lookup(primary)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| lookup(fallback).filter(|v| !v.trim().is_empty()))
    };

    if let Some(space_id) = read(ENV_SPACE_ID, ENV_SPACE_ID_FALLBACK) {
        tracing::debug!("space id taken from environment");
        config.content.space_id = Some(space_id);
    }
    if let Some(token) = read(ENV_ACCESS_TOKEN, ENV_ACCESS_TOKEN_FALLBACK) {
        tracing::debug!("access token taken from environment");
        config.content.access_token = Some(token);
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
///
/// A missing file is not an error: defaults are written to it so the user
/// has a template to fill in.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        let config = Config::default();
        if let Err(err) = save_to_path(&config, &path) {
            tracing::debug!(path = %path.display(), %err, "could not write default config");
        }
        return (config, None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "config loaded");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "config unreadable, using defaults");
            (Config::default(), Some(LOAD_ERROR_KEY.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
