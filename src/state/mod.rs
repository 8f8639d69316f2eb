/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The media catalog and its loaders (catalog.rs)
/// - User settings (settings.rs)

pub mod catalog;
pub mod data;
pub mod settings;
