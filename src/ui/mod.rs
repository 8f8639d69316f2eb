/// User interface module
///
/// - `gallery.rs` - the gallery grid and the lightbox overlay views
/// - `stage.rs` - the presentation sink the lightbox drives
/// - `canvas.rs` - swipe capture for the lightbox

pub mod canvas;
pub mod gallery;
pub mod stage;
