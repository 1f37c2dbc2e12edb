//! Storage utilities for the card news viewer
//!
//! Handles the optional `preferences.json` and the config directory lookup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Points at a preferences file outside the config directory.
pub const PREFERENCES_ENV: &str = "CARDNEWS_PREFERENCES";

const APP_NAME: &str = "cardnews";
const PREFERENCES_FILE: &str = "preferences.json";

/// Viewer preferences. Every field falls back to its default when missing
/// from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub window_size: [f32; 2],
    pub illustration_size: [u32; 2],
    /// Font with Hangul coverage. When unset, common system locations are probed.
    pub font_path: Option<PathBuf>,
    pub body_font_size: f32,
    pub heading_font_size: f32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            window_size: [1100.0, 720.0],
            illustration_size: [800, 500],
            font_path: None,
            body_font_size: 20.0,
            heading_font_size: 28.0,
        }
    }
}

impl Preferences {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StorageError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load from [`preferences_path`]. A missing or unreadable file yields the
    /// defaults; startup never fails on preferences.
    pub fn load_or_default() -> Self {
        let path = preferences_path();
        match Self::load(&path) {
            Ok(prefs) => {
                log::info!("loaded preferences from {}", path.display());
                prefs
            }
            Err(StorageError::NotFound(_)) => {
                log::debug!("no preferences at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("ignoring preferences at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// `$CARDNEWS_PREFERENCES` if set, otherwise `preferences.json` in the config dir.
pub fn preferences_path() -> PathBuf {
    std::env::var_os(PREFERENCES_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| config_dir(APP_NAME).join(PREFERENCES_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("cardcore-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_save_and_load() {
        let path = scratch_path("roundtrip.json");
        let prefs = Preferences {
            font_path: Some(PathBuf::from("/fonts/hangul.ttf")),
            body_font_size: 18.0,
            ..Preferences::default()
        };
        prefs.save(&path).unwrap();

        let loaded = Preferences::load(&path).unwrap();
        assert_eq!(loaded, prefs);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{ "heading_font_size": 32.0 }"#).unwrap();
        assert_eq!(prefs.heading_font_size, 32.0);
        assert_eq!(prefs.illustration_size, [800, 500]);
        assert_eq!(prefs.window_size, [1100.0, 720.0]);
        assert!(prefs.font_path.is_none());
    }

    #[test]
    fn test_missing_file() {
        let path = scratch_path("does-not-exist.json");
        assert!(matches!(Preferences::load(&path), Err(StorageError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_malformed_file() {
        let path = scratch_path("malformed.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Preferences::load(&path), Err(StorageError::Json(_))));
        let _ = std::fs::remove_file(&path);
    }
}
