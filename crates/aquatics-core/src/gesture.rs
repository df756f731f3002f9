use crate::constants::SWIPE_THRESHOLD_PX;
use glam::Vec2;

/// Which way a completed swipe moves a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dragged left: show the next item.
    Forward,
    /// Dragged right: show the previous item.
    Back,
}

/// Tracks one horizontal drag from press to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeTracker {
    start: Vec2,
    last: Vec2,
    active: bool,
    threshold: f32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            start: Vec2::ZERO,
            last: Vec2::ZERO,
            active: false,
            threshold,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn press(&mut self, at: Vec2) {
        self.start = at;
        self.last = at;
        self.active = true;
    }

    pub fn move_to(&mut self, at: Vec2) {
        if self.active {
            self.last = at;
        }
    }

    /// Finish the drag. Only a horizontal travel strictly beyond the
    /// threshold counts as a swipe.
    pub fn release(&mut self) -> Option<SwipeDirection> {
        if !self.active {
            return None;
        }
        let dx = self.last.x - self.start.x;
        self.reset();
        if !(dx.abs() > self.threshold) {
            None
        } else if dx < 0.0 {
            Some(SwipeDirection::Forward)
        } else {
            Some(SwipeDirection::Back)
        }
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.start = Vec2::ZERO;
        self.last = Vec2::ZERO;
        self.active = false;
    }
}

/// Map a keyboard key to a carousel step.
#[inline]
pub fn swipe_for_key(key: &str) -> Option<SwipeDirection> {
    match key {
        "ArrowRight" => Some(SwipeDirection::Forward),
        "ArrowLeft" => Some(SwipeDirection::Back),
        _ => None,
    }
}

/// Whether a key event aimed at this element belongs to text editing, in
/// which case carousels leave the arrow keys alone.
pub fn is_text_entry(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || ["INPUT", "TEXTAREA", "SELECT"]
            .iter()
            .any(|t| tag_name.eq_ignore_ascii_case(t))
}
