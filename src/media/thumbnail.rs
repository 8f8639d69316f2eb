use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::{debug, warn};

/// A thumbnail to produce: gallery index and source file
#[derive(Debug, Clone)]
pub struct ThumbnailJob {
    pub index: usize,
    pub source: PathBuf,
}

/// Get the thumbnail cache directory
/// Returns ~/.cache/memorial-gallery/thumbnails on Linux
pub fn thumbnail_cache_dir() -> Option<PathBuf> {
    let mut path = dirs_next::cache_dir().or_else(dirs_next::home_dir)?;

    path.push("memorial-gallery");
    path.push("thumbnails");

    // Ensure the directory exists
    if let Err(e) = fs::create_dir_all(&path) {
        warn!("⚠️  Failed to create thumbnail cache {}: {}", path.display(), e);
        return None;
    }

    Some(path)
}

/// Get the thumbnail path for a source file (doesn't generate, just returns the expected path)
///
/// The key hashes the canonical source path with its modification time and
/// length, so the cache can be shared by every folder ever opened and an
/// edited photo gets a fresh thumbnail. Returns None if the source is gone.
pub fn thumbnail_path(cache_dir: &Path, source: &Path, size: u32) -> Option<PathBuf> {
    let canonical = fs::canonicalize(source).ok()?;
    let metadata = fs::metadata(&canonical).ok()?;
    let modified = metadata
        .modified()
        .ok()
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map(|age| age.as_nanos())
        .unwrap_or(0);

    let mut hasher = blake3::Hasher::new();
    hasher.update(canonical.to_string_lossy().as_bytes());
    hasher.update(&modified.to_le_bytes());
    hasher.update(&metadata.len().to_le_bytes());
    let key = hasher.finalize().to_hex();

    Some(cache_dir.join(format!("{}_{}.jpg", &key[..32], size)))
}

/// Generate a square-bounded thumbnail for a photo
/// Returns the path to the saved thumbnail, or None if the photo can't be decoded
pub fn generate_thumbnail(source: &Path, size: u32, cache_dir: &Path) -> Option<PathBuf> {
    let path = thumbnail_path(cache_dir, source, size)?;
    if path.exists() {
        return Some(path);
    }

    let img = match image::open(source) {
        Ok(img) => img,
        Err(e) => {
            debug!("No thumbnail for {}: {}", source.display(), e);
            return None;
        }
    };

    // JPEG has no alpha channel
    let thumbnail = img.resize(size, size, FilterType::Lanczos3).to_rgb8();

    if let Err(e) = thumbnail.save(&path) {
        warn!("⚠️  Failed to save thumbnail {}: {}", path.display(), e);
        return None;
    }

    debug!("📸 Generated thumbnail: {}", path.display());
    Some(path)
}

/// Generate thumbnails for a batch of photos on a blocking worker
/// Returns (gallery index, thumbnail path) for every one that succeeded
pub async fn generate_thumbnails_async(jobs: Vec<ThumbnailJob>, size: u32) -> Vec<(usize, PathBuf)> {
    let result = tokio::task::spawn_blocking(move || -> Vec<(usize, PathBuf)> {
        let Some(cache_dir) = thumbnail_cache_dir() else {
            return Vec::new();
        };

        jobs.iter()
            .filter_map(|job| {
                generate_thumbnail(&job.source, size, &cache_dir)
                    .map(|path| (job.index, path))
            })
            .collect()
    })
    .await;

    match result {
        Ok(thumbnails) => thumbnails,
        Err(e) => {
            warn!("⚠️  Thumbnail task failed: {}", e);
            Vec::new()
        }
    }
}
