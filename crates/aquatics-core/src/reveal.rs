//! Fade-in timing for sections that appear as they scroll into view.

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub duration_sec: f32,
    pub delay_sec: f32,
}

impl Reveal {
    pub fn new(duration_sec: f32, delay_sec: f32) -> Result<Self, ConfigError> {
        for (name, value) in [("duration_sec", duration_sec), ("delay_sec", delay_sec)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        Ok(Self {
            duration_sec,
            delay_sec,
        })
    }

    /// Whole-section fade.
    pub fn section() -> Self {
        Self {
            duration_sec: REVEAL_SECTION_DURATION_SEC,
            delay_sec: 0.0,
        }
    }

    /// Card `index` inside a revealed section; later cards start later.
    pub fn item(index: usize) -> Self {
        Self {
            duration_sec: REVEAL_ITEM_DURATION_SEC,
            delay_sec: REVEAL_ITEM_BASE_DELAY_SEC + index as f32 * REVEAL_ITEM_STAGGER_SEC,
        }
    }

    #[inline]
    pub fn target_opacity(visible: bool) -> f32 {
        if visible {
            1.0
        } else {
            0.0
        }
    }

    /// Whether sections start shown. They are only pre-hidden when an
    /// observer is in place to fade them in.
    #[inline]
    pub fn starts_visible(observing: bool) -> bool {
        !observing
    }

    /// CSS `transition` value. Fading out skips the stagger delay.
    pub fn transition_css(&self, visible: bool) -> String {
        let delay = if visible { self.delay_sec } else { 0.0 };
        format!(
            "opacity {:.2}s ease-out {:.2}s",
            self.duration_sec, delay
        )
    }
}

/// True once enough of the target is on screen to count as visible.
#[inline]
pub fn crosses_threshold(intersection_ratio: f64) -> bool {
    intersection_ratio >= REVEAL_VISIBLE_THRESHOLD
}
