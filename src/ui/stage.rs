use tracing::debug;

use crate::lightbox::PresentationSink;
use crate::media::source::{is_unsupported_format, DisplaySource, Placeholder};

/// Progress of the video currently attached to the stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoLoad {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    pub locator: String,
    pub caption: String,
    pub generation: u64,
    /// None until the file check for this generation comes back
    pub source: Option<DisplaySource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSlot {
    pub locator: String,
    /// Which load this slot belongs to. Completions for older loads are stale.
    pub generation: u64,
    pub load: VideoLoad,
}

/// What the lightbox overlay currently shows.
///
/// The lightbox controller writes to the stage through [`PresentationSink`];
/// the view reads it back every frame.
#[derive(Debug, Default)]
pub struct Stage {
    image: Option<ImageSlot>,
    video: Option<VideoSlot>,
    overlay_visible: bool,
    scroll_locked: bool,
    /// Last generation handed out by `show_image` or `show_video`
    generation: u64,
    /// A video load that still needs to be started by the runtime
    pending_load: Option<(u64, String)>,
    /// An image file check that still needs to be started by the runtime
    pending_image: Option<(u64, String)>,
}

impl Stage {
    pub fn image(&self) -> Option<&ImageSlot> {
        self.image.as_ref()
    }

    pub fn video(&self) -> Option<&VideoSlot> {
        self.video.as_ref()
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Hand the most recent video load to the runtime, at most once
    pub fn take_pending_load(&mut self) -> Option<(u64, String)> {
        self.pending_load.take()
    }

    /// Hand the most recent image file check to the runtime, at most once
    pub fn take_pending_image(&mut self) -> Option<(u64, String)> {
        self.pending_image.take()
    }

    /// Record where the current image resolved to.
    /// Returns false when the check is stale and was discarded.
    pub fn finish_image_resolve(&mut self, generation: u64, source: DisplaySource) -> bool {
        match self.image.as_mut() {
            Some(image) if image.generation == generation => {
                image.source = Some(source);
                true
            }
            _ => {
                debug!("Discarding stale image check {}", generation);
                false
            }
        }
    }

    /// Record the outcome of a video load.
    /// Returns false when the load is stale and was discarded.
    pub fn finish_video_load(&mut self, generation: u64, result: Result<(), String>) -> bool {
        match self.video.as_mut() {
            Some(video) if video.generation == generation => {
                video.load = match result {
                    Ok(()) => VideoLoad::Ready,
                    Err(e) => VideoLoad::Failed(e),
                };
                true
            }
            _ => {
                debug!("Discarding stale video load {}", generation);
                false
            }
        }
    }
}

impl PresentationSink for Stage {
    fn show_image(&mut self, source_locator: &str, caption: &str) {
        self.hide_image();

        self.generation += 1;
        // The format is known from the name alone; existence needs the disk
        let source = if is_unsupported_format(source_locator) {
            Some(DisplaySource::Placeholder(Placeholder::UnsupportedFormat))
        } else {
            self.pending_image = Some((self.generation, source_locator.to_string()));
            None
        };

        self.image = Some(ImageSlot {
            locator: source_locator.to_string(),
            caption: caption.to_string(),
            generation: self.generation,
            source,
        });
    }

    fn show_video(&mut self, source_locator: &str) {
        self.hide_video();

        self.generation += 1;
        self.video = Some(VideoSlot {
            locator: source_locator.to_string(),
            generation: self.generation,
            load: VideoLoad::Loading,
        });
        self.pending_load = Some((self.generation, source_locator.to_string()));
    }

    fn hide_image(&mut self) {
        self.image = None;
        self.pending_image = None;
    }

    fn hide_video(&mut self) {
        // Dropping the slot detaches the source; any in-flight load for it
        // becomes stale.
        self.video = None;
        self.pending_load = None;
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    fn set_background_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}
