//! Settings file: board mode, board layout, seed entries and theme colors.

use crate::kernel::{default_seed, BoardMode, SeedEntry, DEFAULT_NEW_ITEM_NAME};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::paths::get_settings_path;

pub const DEFAULT_COLUMNS: u16 = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub mode: BoardMode,
    #[serde(default)]
    pub board: BoardSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<Vec<SeedEntry>>,
    #[serde(default)]
    pub theme: ThemeSettings,
}

impl Settings {
    pub fn seed(&self) -> Vec<SeedEntry> {
        self.seed.clone().unwrap_or_else(default_seed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Tiles per row inside a column.
    #[serde(default = "default_columns")]
    pub columns: u16,
    #[serde(default = "default_new_item_name")]
    pub new_item_name: String,
}

fn default_columns() -> u16 {
    DEFAULT_COLUMNS
}

fn default_new_item_name() -> String {
    DEFAULT_NEW_ITEM_NAME.to_string()
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            new_item_name: default_new_item_name(),
        }
    }
}

impl BoardSettings {
    pub fn columns(&self) -> u16 {
        self.columns.max(1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicked_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicked_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            title_fg: Some("cyan".to_string()),
            border: Some("dark_gray".to_string()),
            focus_border: Some("cyan".to_string()),
            tile_fg: Some("white".to_string()),
            tile_bg: None,
            clicked_fg: Some("#4c1d95".to_string()),
            clicked_bg: Some("#ddd6fe".to_string()),
            button_fg: Some("black".to_string()),
            button_bg: Some("gray".to_string()),
            cursor_fg: Some("yellow".to_string()),
        }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    NoSettingsDir,
    Io { path: PathBuf, source: std::io::Error },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::NoSettingsDir => write!(f, "cannot determine settings directory"),
            SettingsError::Io { path, source } => {
                write!(f, "settings io error at {}: {}", path.display(), source)
            }
            SettingsError::Parse { path, source } => {
                write!(f, "invalid settings file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::NoSettingsDir => None,
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
        }
    }
}

/// Creates `path` with default settings unless it already exists.
pub fn ensure_settings_file_at(path: &Path) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content).map_err(io_err)?;
    }
    Ok(())
}

pub fn ensure_settings_file() -> Result<PathBuf, SettingsError> {
    let path = get_settings_path().ok_or(SettingsError::NoSettingsDir)?;
    ensure_settings_file_at(&path)?;
    Ok(path)
}

pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads settings from `explicit`, or from the default location (created on first run).
/// Any failure is logged and falls back to defaults.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match ensure_settings_file() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(error = %e, "settings file unavailable, using defaults");
                return Settings::default();
            }
        },
    };

    match load_settings_from(&path) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "settings loaded");
            settings
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load settings, using defaults");
            Settings::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/settings.rs"]
mod tests;
