use glam::Vec2;
use web_sys as web;

/// Latest pointer position in client coordinates.
///
/// Move events overwrite it as they arrive; the frame loop reads whatever is
/// there when it runs, so bursts of events between frames collapse to one.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub latest: Option<Vec2>,
}

impl PointerState {
    #[inline]
    pub fn record(&mut self, at: Vec2) {
        if at.is_finite() {
            self.latest = Some(at);
        }
    }
}

#[inline]
pub fn mouse_client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// First active touch, if any finger is down.
#[inline]
pub fn first_touch_pos(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}
