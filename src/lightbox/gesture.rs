//! Gesture interpretation
//!
//! Converts raw pointer coordinates and key codes into navigation
//! [`Intent`]s. The interpreter never touches lightbox state; the caller
//! feeds the intents it produces into the controller.

/// Horizontal drag distance that counts as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// An abstract navigation command, decoupled from the input that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    Close,
}

/// Turns drags and key presses into intents
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    /// Fixed swipe magnitude
    threshold: f32,
    /// Start coordinate of the gesture in progress
    start: Option<f32>,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl GestureInterpreter {
    /// Create an interpreter with the given swipe threshold.
    /// Negative values use their magnitude; non-finite values fall back to
    /// [`DEFAULT_SWIPE_THRESHOLD`].
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.abs()
        } else {
            DEFAULT_SWIPE_THRESHOLD
        };

        Self {
            threshold,
            start: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Record the start of a gesture. A new press always supersedes an
    /// unfinished one.
    pub fn on_pointer_down(&mut self, x: f32) {
        self.start = Some(x);
    }

    /// Whether a press is waiting for its release
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Finish the gesture started by [`on_pointer_down`](Self::on_pointer_down).
    ///
    /// Dragging left by at least the threshold means `Next`, dragging right
    /// means `Previous`. Anything shorter is a tap and yields nothing, as does
    /// a release without a recorded press.
    pub fn on_pointer_up(&mut self, x: f32) -> Option<Intent> {
        let start = self.start.take()?;
        let delta = x - start;

        if delta <= -self.threshold {
            Some(Intent::Next)
        } else if delta >= self.threshold {
            Some(Intent::Previous)
        } else {
            None
        }
    }

    /// Drop an aborted gesture (e.g., the touch was lost)
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Map a key name to an intent. Callers only forward keys while the
    /// lightbox is open.
    pub fn on_key(&self, code: &str) -> Option<Intent> {
        match code {
            "Escape" => Some(Intent::Close),
            "ArrowLeft" => Some(Intent::Previous),
            "ArrowRight" => Some(Intent::Next),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_left_is_next() {
        let mut gestures = GestureInterpreter::default();
        gestures.on_pointer_down(100.0);
        assert_eq!(gestures.on_pointer_up(40.0), Some(Intent::Next));
    }

    #[test]
    fn test_swipe_right_is_previous() {
        let mut gestures = GestureInterpreter::default();
        gestures.on_pointer_down(100.0);
        assert_eq!(gestures.on_pointer_up(160.0), Some(Intent::Previous));
    }

    #[test]
    fn test_short_drag_is_a_tap() {
        let mut gestures = GestureInterpreter::default();
        gestures.on_pointer_down(100.0);
        assert_eq!(gestures.on_pointer_up(120.0), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut gestures = GestureInterpreter::default();
        gestures.on_pointer_down(100.0);
        assert_eq!(gestures.on_pointer_up(50.0), Some(Intent::Next));

        gestures.on_pointer_down(100.0);
        assert_eq!(gestures.on_pointer_up(150.0), Some(Intent::Previous));

        gestures.on_pointer_down(100.0);
        assert_eq!(gestures.on_pointer_up(50.5), None);
    }

    #[test]
    fn test_new_press_supersedes_old() {
        let mut gestures = GestureInterpreter::default();
        gestures.on_pointer_down(300.0);
        gestures.on_pointer_down(100.0);
        // Relative to 300 this would be a swipe left
        assert_eq!(gestures.on_pointer_up(120.0), None);
    }

    #[test]
    fn test_state_resets_after_gesture() {
        let mut gestures = GestureInterpreter::default();
        gestures.on_pointer_down(100.0);
        assert_eq!(gestures.on_pointer_up(0.0), Some(Intent::Next));
        // No press recorded any more
        assert_eq!(gestures.on_pointer_up(0.0), None);

        gestures.on_pointer_down(100.0);
        assert!(gestures.is_tracking());
        gestures.cancel();
        assert!(!gestures.is_tracking());
        assert_eq!(gestures.on_pointer_up(0.0), None);
    }

    #[test]
    fn test_custom_threshold() {
        let mut gestures = GestureInterpreter::new(-10.0);
        assert_eq!(gestures.threshold(), 10.0);

        gestures.on_pointer_down(100.0);
        assert_eq!(gestures.on_pointer_up(85.0), Some(Intent::Next));

        assert_eq!(GestureInterpreter::new(f32::NAN).threshold(), DEFAULT_SWIPE_THRESHOLD);
    }

    #[test]
    fn test_key_mapping() {
        let gestures = GestureInterpreter::default();
        assert_eq!(gestures.on_key("Escape"), Some(Intent::Close));
        assert_eq!(gestures.on_key("ArrowRight"), Some(Intent::Next));
        assert_eq!(gestures.on_key("ArrowLeft"), Some(Intent::Previous));
        assert_eq!(gestures.on_key("a"), None);
    }
}
