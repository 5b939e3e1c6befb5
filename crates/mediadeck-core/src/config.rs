//! Configuration types for mediadeck.
//!
//! [`Config::load`] reads `~/.config/mediadeck/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::diagnostics::BuildMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
card_height       = 9
show_descriptions = true

[diagnostics]
build_mode     = "auto"
component_name = "ContentFeed"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/mediadeck/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Rows per card, borders included.
    #[serde(default = "default_card_height")]
    pub card_height: u16,
    #[serde(default = "default_show_descriptions")]
    pub show_descriptions: bool,
}

fn default_card_height() -> u16 { 9 }
fn default_show_descriptions() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            card_height: default_card_height(),
            show_descriptions: default_show_descriptions(),
        }
    }
}

/// How the diagnostics overlay decides which build it is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildModeSetting {
    /// Follow the compiled profile (see [`BuildMode::detect`]).
    #[default]
    Auto,
    Development,
    Production,
}

impl BuildModeSetting {
    pub fn resolve(self) -> BuildMode {
        match self {
            BuildModeSetting::Auto => BuildMode::detect(),
            BuildModeSetting::Development => BuildMode::Development,
            BuildModeSetting::Production => BuildMode::Production,
        }
    }
}

/// `[diagnostics]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub build_mode: BuildModeSetting,
    #[serde(default = "default_component_name")]
    pub component_name: String,
}

fn default_component_name() -> String { "ContentFeed".to_string() }

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            build_mode: BuildModeSetting::default(),
            component_name: default_component_name(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/mediadeck/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load `path` layered on top of the built-in defaults. A missing file
    /// yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("mediadeck")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.ui.card_height, 9);
        assert!(cfg.ui.show_descriptions);
        assert_eq!(cfg.diagnostics.build_mode, BuildModeSetting::Auto);
        assert_eq!(cfg.diagnostics.component_name, "ContentFeed");
    }

    #[test]
    fn user_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[diagnostics]\nbuild_mode = \"production\"\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.diagnostics.build_mode, BuildModeSetting::Production);
        assert_eq!(cfg.diagnostics.component_name, "ContentFeed");
        assert_eq!(cfg.ui.card_height, 9);
    }

    #[test]
    fn missing_user_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.ui.card_height, 9);
    }

    #[test]
    fn explicit_settings_resolve() {
        assert_eq!(BuildModeSetting::Development.resolve(), BuildMode::Development);
        assert_eq!(BuildModeSetting::Production.resolve(), BuildMode::Production);
    }
}
