/// User settings for the gallery
///
/// Settings are stored as JSON in the user's config directory:
/// - Linux: ~/.config/memorial-gallery/settings.json
/// - macOS: ~/Library/Application Support/memorial-gallery/settings.json
/// - Windows: %APPDATA%\memorial-gallery\settings.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::lightbox::DEFAULT_SWIPE_THRESHOLD;

/// Default gallery thumbnail edge in pixels
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 256;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the gallery reads at startup
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Folder holding the photos and videos
    pub media_root: PathBuf,

    /// Optional JSON media list
    /// - Some: items and captions come from the manifest, in manifest order
    /// - None: the media root is scanned and ordered by file name
    pub manifest: Option<PathBuf>,

    /// Horizontal drag distance that counts as a swipe
    pub swipe_threshold: f32,

    /// Edge length of generated gallery thumbnails
    pub thumbnail_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            media_root: PathBuf::from("pics"),
            manifest: None,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
        }
    }
}

impl Settings {
    /// Convert to JSON string for the settings file
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read settings from a file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Ok(Self::from_json(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load the user's settings, falling back to defaults on any problem
    pub fn load_or_default() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("⚠️  Could not determine config directory, using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                info!("⚙️  Settings loaded from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("⚠️  {}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Get the path where the settings file should be stored
    pub fn settings_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("memorial-gallery");
        path.push("settings.json");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.media_root, PathBuf::from("pics"));
        assert_eq!(settings.manifest, None);
        assert_eq!(settings.swipe_threshold, 50.0);
        assert_eq!(settings.thumbnail_size, 256);
    }

    #[test]
    fn test_serialization() {
        let settings = Settings {
            media_root: PathBuf::from("/srv/memorial"),
            manifest: Some(PathBuf::from("/srv/memorial/media.json")),
            swipe_threshold: 80.0,
            thumbnail_size: 128,
        };

        let json = settings.to_json().unwrap();
        let restored = Settings::from_json(&json).unwrap();

        assert_eq!(settings, restored);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "swipe_threshold": 30.0 }"#).unwrap();
        assert_eq!(settings.swipe_threshold, 30.0);
        assert_eq!(settings.media_root, PathBuf::from("pics"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Settings::load_from(&path), Err(SettingsError::Json(_))));
    }
}
