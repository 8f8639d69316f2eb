use iced::widget::stack;
use iced::{keyboard, Element, Subscription, Task, Theme};
use rfd::FileDialog;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod lightbox;
mod media;
mod state;
mod ui;

use lightbox::{GestureInterpreter, Intent, LightboxController, LightboxError};
use media::source::{is_unsupported_format, probe_video, resolve_image_source_async, DisplaySource};
use media::thumbnail::{generate_thumbnails_async, ThumbnailJob};
use state::catalog::{load_catalog_async, MediaCatalog};
use state::data::MediaKind;
use state::settings::Settings;
use ui::canvas::PointerTarget;
use ui::stage::Stage;

/// Main application state
struct MemorialGallery {
    settings: Settings,
    /// The lightbox, drawing onto the stage
    lightbox: LightboxController<Stage>,
    gestures: GestureInterpreter,
    /// Gallery index -> cached thumbnail
    thumbnails: HashMap<usize, PathBuf>,
    /// Bumped whenever the catalog is replaced so late thumbnails are dropped
    catalog_generation: u64,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Background catalog load finished
    CatalogLoaded(Result<Arc<MediaCatalog>, String>),
    /// Catalog load for a folder picked with "Open Folder" finished
    FolderLoaded(PathBuf, Result<Arc<MediaCatalog>, String>),
    /// Background thumbnail generation finished for a catalog generation
    ThumbnailsReady(u64, Vec<(usize, PathBuf)>),
    /// User clicked the "Open Folder" button
    OpenFolder,
    /// User clicked a gallery tile
    OpenItem(usize),
    /// Lightbox button pressed
    Navigate(Intent),
    /// Key pressed while the lightbox is open
    KeyPressed(keyboard::Key),
    PointerDown(f32),
    PointerUp(f32, PointerTarget),
    PointerCancelled,
    /// An image file check finished (generation, what to show)
    ImageResolved(u64, DisplaySource),
    /// A video load finished (generation, outcome)
    VideoProbed(u64, Result<(), String>),
}

impl MemorialGallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load_or_default();
        let gestures = GestureInterpreter::new(settings.swipe_threshold);

        info!(
            "🎨 Memorial gallery starting (media: {}, swipe threshold: {})",
            settings.media_root.display(),
            gestures.threshold()
        );

        let lightbox = LightboxController::new(Arc::new(MediaCatalog::default()), Stage::default());
        let task = Task::perform(load_catalog_async(settings.clone()), Message::CatalogLoaded);

        (
            MemorialGallery {
                settings,
                lightbox,
                gestures,
                thumbnails: HashMap::new(),
                catalog_generation: 0,
                status: "Loading memories…".to_string(),
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                self.status = format!("{} memories", catalog.len());
                self.install_catalog(catalog)
            }
            Message::CatalogLoaded(Err(e)) => {
                warn!("⚠️  Could not load media: {}", e);
                self.status = format!("⚠️  Could not load media: {}", e);
                Task::none()
            }
            Message::FolderLoaded(folder, Ok(catalog)) => {
                info!("📁 Showing {} memories from {}", catalog.len(), folder.display());
                self.status = format!("{} memories", catalog.len());
                self.settings.media_root = folder;
                self.settings.manifest = None;
                self.install_catalog(catalog)
            }
            Message::FolderLoaded(folder, Err(e)) => {
                // The previous folder stays in charge
                warn!("⚠️  Could not load {}: {}", folder.display(), e);
                self.status = format!("⚠️  Could not load {}: {}", folder.display(), e);
                Task::none()
            }
            Message::ThumbnailsReady(generation, thumbnails) => {
                if generation == self.catalog_generation {
                    debug!("📸 {} thumbnails ready", thumbnails.len());
                    self.thumbnails.extend(thumbnails);
                }
                Task::none()
            }
            Message::OpenFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Folder with Photos and Videos")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.status = format!("Loading memories from {}…", folder_path.display());
                    self.lightbox.close();

                    // Settings only switch over once the folder actually loads
                    let mut candidate = self.settings.clone();
                    candidate.media_root = folder_path.clone();
                    candidate.manifest = None;

                    return Task::perform(load_catalog_async(candidate), move |result| {
                        Message::FolderLoaded(folder_path.clone(), result)
                    });
                }

                Task::none()
            }
            Message::OpenItem(index) => {
                if let Err(e) = self.lightbox.open(index) {
                    warn!("⚠️  Could not open item {}: {}", index, e);
                }
                self.start_pending_loads()
            }
            Message::Navigate(intent) => self.apply_intent(intent),
            Message::KeyPressed(key) => {
                if !self.lightbox.is_open() {
                    return Task::none();
                }
                match key_name(&key).and_then(|code| self.gestures.on_key(code)) {
                    Some(intent) => self.apply_intent(intent),
                    None => Task::none(),
                }
            }
            Message::PointerDown(x) => {
                self.gestures.on_pointer_down(x);
                Task::none()
            }
            Message::PointerUp(x, target) => {
                let pressed = self.gestures.is_tracking();
                match self.gestures.on_pointer_up(x) {
                    Some(intent) => self.apply_intent(intent),
                    // A tap on the backdrop dismisses the viewer
                    None if pressed && target == PointerTarget::Backdrop => {
                        self.apply_intent(Intent::Close)
                    }
                    None => Task::none(),
                }
            }
            Message::PointerCancelled => {
                self.gestures.cancel();
                Task::none()
            }
            Message::ImageResolved(generation, source) => {
                self.lightbox.sink_mut().finish_image_resolve(generation, source);
                Task::none()
            }
            Message::VideoProbed(generation, result) => {
                self.lightbox.sink_mut().finish_video_load(generation, result);
                Task::none()
            }
        }
    }

    /// Swap in a freshly loaded catalog and start its thumbnails
    fn install_catalog(&mut self, catalog: Arc<MediaCatalog>) -> Task<Message> {
        self.lightbox.replace_catalog(catalog.clone());
        self.gestures.cancel();
        self.thumbnails.clear();
        self.catalog_generation += 1;

        let jobs: Vec<ThumbnailJob> = catalog
            .iter()
            .enumerate()
            .filter(|(_, descriptor)| descriptor.kind() == MediaKind::Image)
            .filter(|(_, descriptor)| !is_unsupported_format(descriptor.source_locator()))
            .map(|(index, descriptor)| ThumbnailJob {
                index,
                source: PathBuf::from(descriptor.source_locator()),
            })
            .collect();

        if jobs.is_empty() {
            return Task::none();
        }

        let generation = self.catalog_generation;
        Task::perform(
            generate_thumbnails_async(jobs, self.settings.thumbnail_size),
            move |thumbnails| Message::ThumbnailsReady(generation, thumbnails),
        )
    }

    /// Feed a navigation intent into the lightbox
    fn apply_intent(&mut self, intent: Intent) -> Task<Message> {
        match self.lightbox.dispatch(intent) {
            Ok(()) => {
                if let Some(descriptor) = self.lightbox.current_descriptor() {
                    debug!("{:?} -> {}", intent, descriptor.id());
                }
            }
            // Stale handlers can fire after the lightbox closed
            Err(LightboxError::NotOpen) => debug!("Ignoring {:?} while closed", intent),
            Err(e) => warn!("⚠️  {:?} failed: {}", intent, e),
        }

        self.start_pending_loads()
    }

    /// Start checking whatever image or video the lightbox just attached.
    /// The controller doesn't wait for either; a newer load makes these stale.
    fn start_pending_loads(&mut self) -> Task<Message> {
        let stage = self.lightbox.sink_mut();

        let image = match stage.take_pending_image() {
            Some((generation, locator)) => {
                Task::perform(resolve_image_source_async(locator), move |source| {
                    Message::ImageResolved(generation, source)
                })
            }
            None => Task::none(),
        };

        let video = match stage.take_pending_load() {
            Some((generation, locator)) => Task::perform(probe_video(locator), move |result| {
                Message::VideoProbed(generation, result)
            }),
            None => Task::none(),
        };

        Task::batch([image, video])
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let gallery = ui::gallery::gallery_view(self.lightbox.catalog(), &self.thumbnails, &self.status);

        let stage = self.lightbox.sink();
        if !stage.overlay_visible() {
            return gallery;
        }

        let position = self
            .lightbox
            .current_index()
            .map(|index| (index, self.lightbox.catalog().len()));

        stack![gallery, ui::gallery::lightbox_view(stage, position)].into()
    }

    /// Keys only matter while the lightbox is open
    fn subscription(&self) -> Subscription<Message> {
        if self.lightbox.is_open() {
            keyboard::on_key_press(|key, _modifiers| Some(Message::KeyPressed(key)))
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Name of a key as the gesture interpreter expects it
fn key_name(key: &keyboard::Key) -> Option<&str> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::Escape) => Some("Escape"),
        keyboard::Key::Named(Named::ArrowLeft) => Some("ArrowLeft"),
        keyboard::Key::Named(Named::ArrowRight) => Some("ArrowRight"),
        keyboard::Key::Character(c) => Some(c.as_str()),
        _ => None,
    }
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    iced::application("In Loving Memory", MemorialGallery::update, MemorialGallery::view)
        .subscription(MemorialGallery::subscription)
        .theme(MemorialGallery::theme)
        .centered()
        .run_with(MemorialGallery::new)
}
