use thiserror::Error;

/// Errors raised by lightbox operations.
///
/// All of them are recoverable. UI handlers log and ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LightboxError {
    /// The requested index is outside the catalog
    #[error("media index {index} is out of range for a catalog of {len} items")]
    InvalidIndex { index: usize, len: usize },

    /// There is nothing to show
    #[error("the media catalog is empty")]
    EmptyCatalog,

    /// Navigation was requested while the lightbox is closed
    #[error("the lightbox is not open")]
    NotOpen,
}
