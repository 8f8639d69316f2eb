/// Shared data structures for the gallery
///
/// These structs represent the data model that flows between
/// the catalog loaders, the lightbox and the UI layer.

use serde::{Deserialize, Serialize};

/// The kind of a media item, which decides how it is rendered
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Label shown under a gallery tile
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "Photo",
            MediaKind::Video => "Video",
        }
    }
}

/// Represents a single photo or video in the gallery
///
/// Descriptors are immutable once built. Use [`MediaDescriptor::new`],
/// which rejects an empty source locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescriptor {
    /// Unique, stable identifier (e.g., "IMG_1839.JPG")
    id: String,
    /// Photo or video
    kind: MediaKind,
    /// Where the media lives, usually a file path under the media root
    source_locator: String,
    /// Caption displayed in the gallery and the lightbox
    caption: String,
}

impl MediaDescriptor {
    /// Build a descriptor. Returns `None` when `source_locator` is empty.
    pub fn new(
        id: impl Into<String>,
        kind: MediaKind,
        source_locator: impl Into<String>,
        caption: impl Into<String>,
    ) -> Option<Self> {
        let source_locator = source_locator.into();
        if source_locator.trim().is_empty() {
            return None;
        }

        Some(Self {
            id: id.into(),
            kind,
            source_locator,
            caption: caption.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn source_locator(&self) -> &str {
        &self.source_locator
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_locator_is_rejected() {
        assert!(MediaDescriptor::new("a", MediaKind::Image, "", "A").is_none());
        assert!(MediaDescriptor::new("a", MediaKind::Image, "   ", "A").is_none());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&MediaKind::Video).unwrap();
        assert_eq!(json, "\"video\"");

        let kind: MediaKind = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(kind, MediaKind::Image);
    }
}
