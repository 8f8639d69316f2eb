use std::sync::Arc;
use tracing::{debug, info};

use super::error::LightboxError;
use super::gesture::Intent;
use super::navigation;
use super::sink::PresentationSink;
use crate::state::catalog::MediaCatalog;
use crate::state::data::{MediaDescriptor, MediaKind};

/// State of an open lightbox. Created fresh by every `open` and dropped on
/// `close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxSession {
    pub current_index: usize,
}

/// Owns the single lightbox session and drives a [`PresentationSink`].
///
/// States are `Closed` (no session) and `Open`. `open` moves to `Open`,
/// `close` back to `Closed`, and `next`/`previous` change the index while
/// staying `Open`.
pub struct LightboxController<S: PresentationSink> {
    catalog: Arc<MediaCatalog>,
    sink: S,
    session: Option<LightboxSession>,
}

impl<S: PresentationSink> LightboxController<S> {
    pub fn new(catalog: Arc<MediaCatalog>, sink: S) -> Self {
        Self {
            catalog,
            sink,
            session: None,
        }
    }

    /// Show the item at `index`.
    ///
    /// Fails with `EmptyCatalog` or `InvalidIndex` and leaves the current
    /// state untouched when `index` cannot be shown.
    pub fn open(&mut self, index: usize) -> Result<(), LightboxError> {
        navigation::validate_index(index, self.catalog.len())?;
        let descriptor = self
            .catalog
            .get(index)
            .ok_or(LightboxError::InvalidIndex {
                index,
                len: self.catalog.len(),
            })?;

        let was_open = self.session.is_some();
        self.session = Some(LightboxSession {
            current_index: index,
        });

        // Exactly one element ends up visible. The old video is always
        // detached before a new source is assigned.
        match descriptor.kind() {
            MediaKind::Video => {
                self.sink.hide_image();
                self.sink.hide_video();
                self.sink.show_video(descriptor.source_locator());
            }
            MediaKind::Image => {
                self.sink.hide_video();
                self.sink.show_image(descriptor.source_locator(), descriptor.caption());
            }
        }

        if !was_open {
            self.sink.set_overlay_visible(true);
            self.sink.set_background_scroll_locked(true);
            info!("🔍 Lightbox opened at {} ({})", index, descriptor.id());
        } else {
            debug!("Lightbox moved to {} ({})", index, descriptor.id());
        }

        Ok(())
    }

    /// Close the lightbox. Does nothing when already closed.
    pub fn close(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        self.sink.set_overlay_visible(false);
        self.sink.set_background_scroll_locked(false);

        let was_video = self
            .catalog
            .get(session.current_index)
            .is_some_and(MediaDescriptor::is_video);
        if was_video {
            // Stop playback before the surface goes away
            self.sink.hide_video();
        }

        info!("Lightbox closed");
    }

    /// Move to the following item, wrapping to the first
    pub fn next(&mut self) -> Result<(), LightboxError> {
        let session = self.session.ok_or(LightboxError::NotOpen)?;
        let index = navigation::next_index(session.current_index, self.catalog.len())?;
        self.open(index)
    }

    /// Move to the preceding item, wrapping to the last
    pub fn previous(&mut self) -> Result<(), LightboxError> {
        let session = self.session.ok_or(LightboxError::NotOpen)?;
        let index = navigation::previous_index(session.current_index, self.catalog.len())?;
        self.open(index)
    }

    /// Apply a navigation intent
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), LightboxError> {
        match intent {
            Intent::Next => self.next(),
            Intent::Previous => self.previous(),
            Intent::Close => {
                self.close();
                Ok(())
            }
        }
    }

    /// The item on screen, or `None` when closed
    pub fn current_descriptor(&self) -> Option<&MediaDescriptor> {
        let session = self.session?;
        self.catalog.get(session.current_index)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.map(|session| session.current_index)
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn catalog(&self) -> &Arc<MediaCatalog> {
        &self.catalog
    }

    /// Swap in a newly loaded catalog. Any open session is closed first so
    /// indices never outlive the catalog they address.
    pub fn replace_catalog(&mut self, catalog: Arc<MediaCatalog>) {
        self.close();
        self.catalog = catalog;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
