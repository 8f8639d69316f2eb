use iced::mouse::{self, Cursor};
use iced::touch;
use iced::widget::canvas::{self, Program};
use iced::{Rectangle, Renderer, Theme};

use crate::Message;

/// Which part of the lightbox a press landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed area around the photo or video
    Backdrop,
    /// The photo or video itself
    Media,
}

/// Transparent surface over the lightbox that reports drags and swipes.
///
/// It only reports raw horizontal coordinates and the part of the overlay it
/// covers. Deciding whether a drag was a swipe is left to the gesture
/// interpreter.
pub struct SwipeSurface {
    pub target: PointerTarget,
}

impl SwipeSurface {
    pub fn new(target: PointerTarget) -> Self {
        Self { target }
    }
}

impl Program<Message> for SwipeSurface {
    type State = SwipeState;

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        // Nothing to draw, the media is rendered underneath
        vec![]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Mouse button press - start of a drag
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if cursor.is_over(bounds) {
                    if let Some(position) = cursor.position() {
                        state.is_pressed = true;
                        return (
                            canvas::event::Status::Captured,
                            Some(Message::PointerDown(position.x)),
                        );
                    }
                }
            }

            // Mouse button release - end of the drag, wherever the cursor is
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.is_pressed {
                    state.is_pressed = false;
                    let message = match cursor.position() {
                        Some(position) => Message::PointerUp(position.x, self.target),
                        None => Message::PointerCancelled,
                    };
                    return (canvas::event::Status::Captured, Some(message));
                }
            }

            canvas::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(position) {
                    state.is_pressed = true;
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::PointerDown(position.x)),
                    );
                }
            }

            canvas::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                if state.is_pressed {
                    state.is_pressed = false;
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::PointerUp(position.x, self.target)),
                    );
                }
            }

            canvas::Event::Touch(touch::Event::FingerLost { .. }) => {
                if state.is_pressed {
                    state.is_pressed = false;
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::PointerCancelled),
                    );
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }
}

/// Whether a press is in progress on the surface
#[derive(Debug, Clone, Default)]
pub struct SwipeState {
    pub is_pressed: bool,
}
