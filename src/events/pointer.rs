use crate::dom;
use crate::input::{self, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feed window-wide mouse and touch movement into the shared pointer state
/// read by the bubble field.
pub fn wire_pointer_tracking(pointer: Rc<RefCell<PointerState>>) {
    let on_mouse = pointer.clone();
    dom::add_window_listener("mousemove", move |ev: web::MouseEvent| {
        on_mouse.borrow_mut().record(input::mouse_client_pos(&ev));
    });

    let on_touch = pointer;
    dom::add_window_listener("touchmove", move |ev: web::TouchEvent| {
        if let Some(at) = input::first_touch_pos(&ev) {
            on_touch.borrow_mut().record(at);
        }
    });
}
