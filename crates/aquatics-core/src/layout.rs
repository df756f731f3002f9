use crate::constants::NARROW_VIEWPORT_MAX_PX;

/// How a card list is presented at a given viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// One card at a time, swipeable.
    Single,
    /// All cards side by side.
    Grid,
}

impl Layout {
    #[inline]
    pub fn for_width(width: f32) -> Self {
        if width < NARROW_VIEWPORT_MAX_PX {
            Layout::Single
        } else {
            Layout::Grid
        }
    }

    #[inline]
    pub fn swipe_enabled(self) -> bool {
        self == Layout::Single
    }
}
