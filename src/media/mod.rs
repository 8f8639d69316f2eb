/// Media file handling
///
/// This module handles:
/// - Deciding whether a photo can be displayed or needs a placeholder
/// - Generating and caching gallery thumbnails

pub mod source;
pub mod thumbnail;
