//! Decides what the viewer can actually put on screen for a photo.
//!
//! HEIC/HEIF files cannot be decoded by the renderer, and files may have
//! disappeared since the catalog was built. Both get a labelled placeholder
//! instead of a broken image.

use std::path::{Path, PathBuf};
use tracing::warn;

/// Extensions the renderer cannot decode
const UNSUPPORTED_IMAGE_EXTENSIONS: [&str; 2] = ["heic", "heif"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// The format needs converting (e.g., HEIC) before it can be shown
    UnsupportedFormat,
    /// The file is not on disk
    NotFound,
}

impl Placeholder {
    pub fn message(&self) -> &'static str {
        match self {
            Placeholder::UnsupportedFormat => "HEIC Image - Convert to JPG for viewing",
            Placeholder::NotFound => "Image Not Found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplaySource {
    File(PathBuf),
    Placeholder(Placeholder),
}

/// Whether the file extension is one the renderer cannot decode
pub fn is_unsupported_format(locator: &str) -> bool {
    Path::new(locator)
        .extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            UNSUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Resolve a photo locator to something displayable
pub fn resolve_image_source(locator: &str) -> DisplaySource {
    if is_unsupported_format(locator) {
        return DisplaySource::Placeholder(Placeholder::UnsupportedFormat);
    }

    let path = PathBuf::from(locator);
    if !path.is_file() {
        return DisplaySource::Placeholder(Placeholder::NotFound);
    }

    DisplaySource::File(path)
}

/// [`resolve_image_source`] on a blocking worker, keeping file checks off the UI thread
pub async fn resolve_image_source_async(locator: String) -> DisplaySource {
    tokio::task::spawn_blocking(move || resolve_image_source(&locator))
        .await
        .unwrap_or_else(|e| {
            warn!("⚠️  Image check failed: {}", e);
            DisplaySource::Placeholder(Placeholder::NotFound)
        })
}

/// Check on a blocking worker that a video file can be opened.
/// Stands in for the player's own buffering; callers tag the result with the
/// load it belongs to.
pub async fn probe_video(locator: String) -> Result<(), String> {
    tokio::task::spawn_blocking(move || {
        let path = Path::new(&locator);
        if path.is_file() {
            Ok(())
        } else {
            Err(format!("Video not found: {}", path.display()))
        }
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heic_is_placeholder() {
        assert_eq!(
            resolve_image_source("pics/36D969B7.HEIC"),
            DisplaySource::Placeholder(Placeholder::UnsupportedFormat)
        );
        assert!(is_unsupported_format("a.heif"));
        assert!(!is_unsupported_format("a.jpg"));
    }

    #[test]
    fn test_missing_file_is_placeholder() {
        assert_eq!(
            resolve_image_source("/definitely/not/here.jpg"),
            DisplaySource::Placeholder(Placeholder::NotFound)
        );
    }

    #[test]
    fn test_existing_file_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        std::fs::write(&path, b"").unwrap();

        assert_eq!(
            resolve_image_source(&path.to_string_lossy()),
            DisplaySource::File(path)
        );
    }

    #[tokio::test]
    async fn test_resolve_image_source_async() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        std::fs::write(&path, b"").unwrap();

        assert_eq!(
            resolve_image_source_async(path.to_string_lossy().to_string()).await,
            DisplaySource::File(path)
        );
        assert_eq!(
            resolve_image_source_async("/definitely/not/here.jpg".to_string()).await,
            DisplaySource::Placeholder(Placeholder::NotFound)
        );
    }

    #[tokio::test]
    async fn test_probe_video() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mov");
        std::fs::write(&path, b"").unwrap();

        assert!(probe_video(path.to_string_lossy().to_string()).await.is_ok());
        assert!(probe_video("/definitely/not/here.mov".to_string()).await.is_err());
    }
}
