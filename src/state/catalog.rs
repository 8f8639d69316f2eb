use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::data::{MediaDescriptor, MediaKind};
use super::settings::Settings;

/// Supported photo extensions (lowercase)
const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "gif", "webp", "bmp", "heic", "heif"];

/// Supported video extensions (lowercase)
const VIDEO_EXTENSIONS: [&str; 4] = ["mov", "mp4", "m4v", "webm"];

/// Errors raised while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed media manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("media folder not found: {0}")]
    MissingRoot(PathBuf),

    #[error("media item {id:?} has an empty source")]
    EmptyLocator { id: String },

    #[error("duplicate media id {0:?}")]
    DuplicateId(String),
}

/// One entry of a JSON media manifest
///
/// ```json
/// [{ "name": "IMG_1839.JPG", "type": "image", "caption": "Beautiful Moment" }]
/// ```
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(rename = "type")]
    kind: MediaKind,
    #[serde(default)]
    caption: String,
}

/// The ordered list of media shown by the gallery.
///
/// A catalog is built once and then shared read-only (usually behind an
/// `Arc`), so indices stay stable for the lifetime of a lightbox session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaCatalog {
    items: Vec<MediaDescriptor>,
}

impl MediaCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(items: Vec<MediaDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(CatalogError::DuplicateId(item.id().to_string()));
            }
        }

        Ok(Self { items })
    }

    /// Parse a JSON manifest. Entry names are resolved against `media_root`.
    pub fn from_manifest_str(json: &str, media_root: &Path) -> Result<Self, CatalogError> {
        let entries: Vec<ManifestEntry> = serde_json::from_str(json)?;

        let mut items = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = entry.id.unwrap_or_else(|| entry.name.clone());
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyLocator { id });
            }

            let locator = media_root.join(&entry.name).to_string_lossy().to_string();
            let descriptor = MediaDescriptor::new(id.clone(), entry.kind, locator, entry.caption)
                .ok_or(CatalogError::EmptyLocator { id })?;
            items.push(descriptor);
        }

        Self::new(items)
    }

    /// Read and parse a JSON manifest file
    pub fn from_manifest_file(path: &Path, media_root: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_manifest_str(&json, media_root)
    }

    /// Recursively scan a folder for supported photos and videos.
    ///
    /// Files are ordered by name. The caption is the file stem and the id is
    /// the path relative to `root`.
    pub fn scan_folder(root: &Path) -> Result<Self, CatalogError> {
        if !root.is_dir() {
            return Err(CatalogError::MissingRoot(root.to_path_buf()));
        }

        debug!("🔍 Scanning media folder: {}", root.display());

        let mut items = Vec::new();
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("⚠️  Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let Some(kind) = path.extension().and_then(|ext| classify_extension(&ext.to_string_lossy()))
            else {
                continue;
            };

            let id = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();
            let caption = path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();

            let descriptor = MediaDescriptor::new(id.clone(), kind, path.to_string_lossy(), caption)
                .ok_or(CatalogError::EmptyLocator { id })?;
            items.push(descriptor);
        }

        Self::new(items)
    }

    /// Build the catalog the settings point at: the manifest if one is
    /// configured, otherwise a scan of the media root.
    pub fn load(settings: &Settings) -> Result<Self, CatalogError> {
        match &settings.manifest {
            Some(manifest) => Self::from_manifest_file(manifest, &settings.media_root),
            None => Self::scan_folder(&settings.media_root),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MediaDescriptor> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaDescriptor> {
        self.items.iter()
    }
}

/// Map a file extension to the kind of media it holds
pub fn classify_extension(extension: &str) -> Option<MediaKind> {
    let ext = extension.to_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// Load the catalog on a blocking worker so the UI stays responsive
pub async fn load_catalog_async(settings: Settings) -> Result<Arc<MediaCatalog>, String> {
    tokio::task::spawn_blocking(move || {
        let catalog = MediaCatalog::load(&settings).map_err(|e| e.to_string())?;
        info!(
            "🖼️  Loaded {} media items from {}",
            catalog.len(),
            settings.media_root.display()
        );
        Ok(Arc::new(catalog))
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const MANIFEST: &str = r#"[
        { "name": "IMG_1839.JPG", "type": "image", "caption": "Beautiful Moment" },
        { "name": "recorded-4765782681342.mov", "type": "video", "caption": "Special Recording" },
        { "id": "heic-1", "name": "36D969B7.HEIC", "type": "image" }
    ]"#;

    #[test]
    fn test_manifest_preserves_order_and_resolves_root() {
        let catalog = MediaCatalog::from_manifest_str(MANIFEST, Path::new("pics")).unwrap();

        assert_eq!(catalog.len(), 3);
        let first = catalog.get(0).unwrap();
        assert_eq!(first.id(), "IMG_1839.JPG");
        assert_eq!(first.kind(), MediaKind::Image);
        assert_eq!(Path::new(first.source_locator()), Path::new("pics/IMG_1839.JPG"));
        assert_eq!(first.caption(), "Beautiful Moment");

        assert!(catalog.get(1).unwrap().is_video());

        let third = catalog.get(2).unwrap();
        assert_eq!(third.id(), "heic-1");
        assert_eq!(third.caption(), "");
    }

    #[test]
    fn test_manifest_rejects_duplicates() {
        let json = r#"[
            { "name": "a.jpg", "type": "image" },
            { "name": "a.jpg", "type": "image" }
        ]"#;
        let err = MediaCatalog::from_manifest_str(json, Path::new("pics")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a.jpg"));
    }

    #[test]
    fn test_manifest_rejects_empty_name() {
        let json = r#"[{ "id": "blank", "name": " ", "type": "video" }]"#;
        let err = MediaCatalog::from_manifest_str(json, Path::new("pics")).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyLocator { id } if id == "blank"));
    }

    #[test]
    fn test_manifest_rejects_unknown_kind() {
        let json = r#"[{ "name": "a.txt", "type": "document" }]"#;
        let err = MediaCatalog::from_manifest_str(json, Path::new("pics")).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_empty_manifest_is_valid() {
        let catalog = MediaCatalog::from_manifest_str("[]", Path::new("pics")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_classify_extension() {
        assert_eq!(classify_extension("JPG"), Some(MediaKind::Image));
        assert_eq!(classify_extension("heic"), Some(MediaKind::Image));
        assert_eq!(classify_extension("MOV"), Some(MediaKind::Video));
        assert_eq!(classify_extension("txt"), None);
    }

    #[test]
    fn test_scan_folder_sorts_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.mov"), b"").unwrap();
        fs::write(dir.path().join("a.jpg"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.png"), b"").unwrap();

        let catalog = MediaCatalog::scan_folder(dir.path()).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|d| d.id()).collect();

        assert_eq!(catalog.len(), 3);
        assert_eq!(ids[0], "a.jpg");
        assert_eq!(ids[1], "b.mov");
        assert_eq!(Path::new(ids[2]), Path::new("nested/c.png"));
        assert_eq!(catalog.get(1).unwrap().kind(), MediaKind::Video);
        assert_eq!(catalog.get(0).unwrap().caption(), "a");
    }

    #[test]
    fn test_scan_missing_folder() {
        let err = MediaCatalog::scan_folder(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, CatalogError::MissingRoot(_)));
    }

    #[tokio::test]
    async fn test_load_catalog_async_reads_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("media.json");
        fs::write(&manifest, MANIFEST).unwrap();

        let settings = Settings {
            media_root: dir.path().to_path_buf(),
            manifest: Some(manifest),
            ..Settings::default()
        };

        let catalog = load_catalog_async(settings).await.unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[tokio::test]
    async fn test_load_catalog_async_reports_errors() {
        let settings = Settings {
            media_root: PathBuf::from("/definitely/not/here"),
            manifest: None,
            ..Settings::default()
        };

        let result = load_catalog_async(settings).await;
        assert!(result.is_err());
    }
}
