/// Lightbox module
///
/// The modal viewer that shows one enlarged photo or video at a time.
///
/// Architecture:
/// - `controller.rs` - open/close lifecycle and navigation over the catalog
/// - `navigation.rs` - pure wraparound index arithmetic
/// - `gesture.rs` - turns swipes and key presses into navigation intents
/// - `sink.rs` - the rendering surface the controller drives
///
/// The controller never renders anything itself. It issues commands to a
/// [`PresentationSink`], which keeps this module free of any UI toolkit.

pub mod controller;
pub mod error;
pub mod gesture;
pub mod navigation;
pub mod sink;

pub use controller::LightboxController;
pub use error::LightboxError;
pub use gesture::{GestureInterpreter, Intent, DEFAULT_SWIPE_THRESHOLD};
pub use sink::PresentationSink;
