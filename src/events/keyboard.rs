use crate::carousel::CarouselView;
use crate::dom;
use aquatics_core::{is_text_entry, swipe_for_key};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn targets_text_entry(ev: &web::KeyboardEvent) -> bool {
    let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return false;
    };
    let editable = el
        .dyn_ref::<web::HtmlElement>()
        .map(|h| h.is_content_editable())
        .unwrap_or(false);
    is_text_entry(&el.tag_name(), editable)
}

pub fn handle_carousel_keydown(ev: &web::KeyboardEvent, views: &[Rc<RefCell<CarouselView>>]) {
    let Some(dir) = swipe_for_key(&ev.key()) else {
        return;
    };
    if targets_text_entry(ev) {
        return;
    }
    let mut handled = false;
    for view in views {
        let mut v = view.borrow_mut();
        if v.listens_to_keys() {
            v.step(dir);
            handled = true;
        }
    }
    if handled {
        ev.prevent_default();
    }
}

/// Arrow keys step every carousel that opted in with `data-carousel-keys`.
pub fn wire_carousel_keys(views: Rc<Vec<Rc<RefCell<CarouselView>>>>) {
    if !views.iter().any(|v| v.borrow().keyboard_opt_in()) {
        return;
    }
    dom::add_window_listener("keydown", move |ev: web::KeyboardEvent| {
        handle_carousel_keydown(&ev, &views);
    });
}
