// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[toasts]` - Toast lookup pattern, dismissal timing and motion
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `FLASH_CUES_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use flash_cues::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let stagger = config.toasts.stagger_ms.unwrap_or(config::DEFAULT_STAGGER_MS);
//! # let _ = stagger;
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "it").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Toast lookup and auto-dismiss settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Structural pattern identifying toast message elements.
    #[serde(default = "default_selector", skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// Delay before the first toast fades (milliseconds).
    #[serde(
        default = "default_base_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_delay_ms: Option<u64>,

    /// Extra delay per toast index (milliseconds).
    #[serde(default = "default_stagger_ms", skip_serializing_if = "Option::is_none")]
    pub stagger_ms: Option<u64>,

    /// Fade transition duration (milliseconds).
    #[serde(default = "default_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,

    /// Delay between fade start and removal (milliseconds).
    #[serde(
        default = "default_removal_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub removal_delay_ms: Option<u64>,

    /// Upward shift while fading (logical pixels).
    #[serde(default = "default_shift_px", skip_serializing_if = "Option::is_none")]
    pub shift_px: Option<f32>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            base_delay_ms: default_base_delay_ms(),
            stagger_ms: default_stagger_ms(),
            fade_ms: default_fade_ms(),
            removal_delay_ms: default_removal_delay_ms(),
            shift_px: default_shift_px(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Toast settings.
    #[serde(default)]
    pub toasts: ToastConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_selector() -> Option<String> {
    Some(DEFAULT_TOAST_SELECTOR.to_string())
}

fn default_base_delay_ms() -> Option<u64> {
    Some(DEFAULT_BASE_DELAY_MS)
}

fn default_stagger_ms() -> Option<u64> {
    Some(DEFAULT_STAGGER_MS)
}

fn default_fade_ms() -> Option<u64> {
    Some(DEFAULT_FADE_MS)
}

fn default_removal_delay_ms() -> Option<u64> {
    Some(DEFAULT_REMOVAL_DELAY_MS)
}

fn default_shift_px() -> Option<f32> {
    Some(DEFAULT_SHIFT_PX)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|mut path| {
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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_config(config: &Config, path: &Path) {
        let content = toml::to_string_pretty(config).expect("failed to serialize config");
        fs::write(path, content).expect("failed to write config");
    }

    #[test]
    fn written_settings_load_back_unchanged() {
        let config = Config {
            general: GeneralConfig {
                language: Some("it".to_string()),
            },
            toasts: ToastConfig {
                selector: Some(".flash .body".to_string()),
                base_delay_ms: Some(4000),
                stagger_ms: Some(300),
                fade_ms: Some(500),
                removal_delay_ms: Some(600),
                shift_px: Some(12.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        write_config(&config, &config_path);
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toasts]\nstagger_ms = 500\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.toasts.stagger_ms, Some(500));
        assert_eq!(loaded.toasts.base_delay_ms, Some(DEFAULT_BASE_DELAY_MS));
        assert_eq!(
            loaded.toasts.selector.as_deref(),
            Some(DEFAULT_TOAST_SELECTOR)
        );
        assert!(loaded.general.language.is_none());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.toasts.base_delay_ms, Some(2200));
        assert_eq!(config.toasts.stagger_ms, Some(150));
        assert_eq!(config.toasts.fade_ms, Some(250));
        assert_eq!(config.toasts.removal_delay_ms, Some(300));
        assert_eq!(config.toasts.shift_px, Some(6.0));
        assert_eq!(config.toasts.selector.as_deref(), Some(".toast .msg"));
    }

    #[test]
    fn load_with_override_reports_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toasts]\nfade_ms = \"slow\"\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
            },
            ..Config::default()
        };

        write_config(&config, &base_dir.join(CONFIG_FILE));
        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }
}
