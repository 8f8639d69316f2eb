use iced::widget::{
    button, canvas, column, container, horizontal_space, image, opaque, row, scrollable, stack,
    text, Space,
};
use iced::{Alignment, Color, ContentFit, Element, Length};
use iced_aw::Wrap;
use std::collections::HashMap;
use std::path::PathBuf;

use super::canvas::{PointerTarget, SwipeSurface};
use super::stage::{ImageSlot, Stage, VideoLoad, VideoSlot};
use crate::lightbox::Intent;
use crate::media::source::{is_unsupported_format, DisplaySource};
use crate::state::catalog::MediaCatalog;
use crate::state::data::{MediaDescriptor, MediaKind};
use crate::Message;

/// Edge length of a gallery tile
const TILE: f32 = 220.0;

/// Largest frame for the photo or video; the rest of the overlay is backdrop
const MEDIA_MAX_WIDTH: f32 = 1100.0;
const MEDIA_MAX_HEIGHT: f32 = 760.0;

/// The scrollable grid of photos and videos
pub fn gallery_view<'a>(
    catalog: &'a MediaCatalog,
    thumbnails: &'a HashMap<usize, PathBuf>,
    status: &'a str,
) -> Element<'a, Message> {
    let header = column![
        text("In Loving Memory").size(44),
        row![
            text(status).size(16),
            button("Open Folder")
                .on_press(Message::OpenFolder)
                .padding(10),
        ]
        .spacing(20)
        .align_y(Alignment::Center),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    // An empty catalog offers nothing to open
    let body: Element<'a, Message> = if catalog.is_empty() {
        text("No photos or videos to show yet.").size(18).into()
    } else {
        let tiles = catalog
            .iter()
            .enumerate()
            .map(|(index, descriptor)| tile(index, descriptor, thumbnails.get(&index)))
            .collect();
        Wrap::with_elements(tiles).into()
    };

    let content = column![header, body]
        .spacing(30)
        .padding(40)
        .width(Length::Fill)
        .align_x(Alignment::Center);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One clickable gallery tile
fn tile<'a>(
    index: usize,
    descriptor: &'a MediaDescriptor,
    thumbnail: Option<&'a PathBuf>,
) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match (descriptor.kind(), thumbnail) {
        (MediaKind::Image, Some(path)) => image(image::Handle::from_path(path))
            .width(Length::Fixed(TILE))
            .height(Length::Fixed(TILE))
            .content_fit(ContentFit::Cover)
            .into(),
        (MediaKind::Image, None) => placeholder_tile("🖼"),
        (MediaKind::Video, _) => placeholder_tile("▶"),
    };

    let detail = match descriptor.kind() {
        MediaKind::Video => "Video • Click to play".to_string(),
        MediaKind::Image if is_unsupported_format(descriptor.source_locator()) => {
            format!("{} • HEIC format", descriptor.kind().label())
        }
        MediaKind::Image => descriptor.kind().label().to_string(),
    };

    let content = column![
        preview,
        text(descriptor.caption()).size(16),
        text(detail).size(12),
    ]
    .spacing(6)
    .width(Length::Fixed(TILE));

    container(button(content).on_press(Message::OpenItem(index)).padding(6))
        .padding(8)
        .into()
}

fn placeholder_tile<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(40))
        .width(Length::Fixed(TILE))
        .height(Length::Fixed(TILE))
        .center_x(Length::Fixed(TILE))
        .center_y(Length::Fixed(TILE))
        .style(container::rounded_box)
        .into()
}

/// The modal viewer drawn over the gallery
///
/// `position` is the (index, total) pair shown in the corner.
pub fn lightbox_view<'a>(stage: &'a Stage, position: Option<(usize, usize)>) -> Element<'a, Message> {
    let counter = match position {
        Some((index, total)) => format!("{} / {}", index + 1, total),
        None => String::new(),
    };

    let top_bar = row![
        text(counter).size(16),
        horizontal_space(),
        button(text("✕").size(22))
            .on_press(Message::Navigate(Intent::Close))
            .padding(10),
    ]
    .align_y(Alignment::Center)
    .padding(20);

    // Exactly one of the two is attached at a time
    let media: Element<'a, Message> = match (stage.video(), stage.image()) {
        (Some(video), _) => video_panel(video),
        (None, Some(image)) => image_panel(image),
        (None, None) => Space::new(Length::Fill, Length::Fill).into(),
    };

    // Presses on the frame swipe; presses around it fall through to the backdrop
    let framed = container(stack![
        container(media)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        canvas(SwipeSurface::new(PointerTarget::Media))
            .width(Length::Fill)
            .height(Length::Fill),
    ])
    .max_width(MEDIA_MAX_WIDTH)
    .max_height(MEDIA_MAX_HEIGHT);

    let middle = row![
        button(text("‹").size(40))
            .on_press(Message::Navigate(Intent::Previous))
            .padding(12),
        container(framed)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        button(text("›").size(40))
            .on_press(Message::Navigate(Intent::Next))
            .padding(12),
    ]
    .align_y(Alignment::Center)
    .padding(20)
    .height(Length::Fill);

    let backdrop = canvas(SwipeSurface::new(PointerTarget::Backdrop))
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = container(stack![backdrop, column![top_bar, middle]])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &iced::Theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.92).into()),
            text_color: Some(Color::WHITE),
            ..container::Style::default()
        });

    // Swallow every event so the gallery underneath can't scroll
    if stage.scroll_locked() {
        opaque(overlay)
    } else {
        overlay.into()
    }
}

fn image_panel<'a>(slot: &'a ImageSlot) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match &slot.source {
        Some(DisplaySource::File(path)) => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => text("Loading…").size(18).into(),
        Some(DisplaySource::Placeholder(placeholder)) => container(text(placeholder.message()).size(22))
            .width(Length::Fixed(600.0))
            .height(Length::Fixed(400.0))
            .center_x(Length::Fixed(600.0))
            .center_y(Length::Fixed(400.0))
            .style(container::rounded_box)
            .into(),
    };

    column![picture, text(&slot.caption).size(18)]
        .spacing(12)
        .align_x(Alignment::Center)
        .into()
}

fn video_panel<'a>(slot: &'a VideoSlot) -> Element<'a, Message> {
    let status = match &slot.load {
        VideoLoad::Loading => "Loading…".to_string(),
        VideoLoad::Ready => "Ready to play".to_string(),
        VideoLoad::Failed(e) => format!("⚠️  {}", e),
    };

    let name = std::path::Path::new(&slot.locator)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| slot.locator.clone());

    column![
        text("▶").size(72),
        text(name).size(18),
        text(status).size(14),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .into()
}
