/// The rendering surface driven by the lightbox controller.
///
/// Implementations own the actual image and video elements. The controller
/// issues a command and returns immediately; it never waits for media to
/// finish loading, so a sink must cope with being redirected mid-load.
pub trait PresentationSink {
    /// Point the image element at `source_locator` and make it visible
    fn show_image(&mut self, source_locator: &str, caption: &str);

    /// Point the video element at `source_locator`, start a fresh load and
    /// make it visible. Any previous video is stopped and detached first.
    fn show_video(&mut self, source_locator: &str);

    fn hide_image(&mut self);

    /// Stop playback, clear the video source and hide the element
    fn hide_video(&mut self);

    fn set_overlay_visible(&mut self, visible: bool);

    fn set_background_scroll_locked(&mut self, locked: bool);
}
