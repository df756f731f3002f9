use crate::carousel::CarouselView;
use crate::dom;
use crate::input;
use aquatics_core::Layout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mouse and touch drag handlers on the carousel root.
pub fn wire_swipe(view: &Rc<RefCell<CarouselView>>) {
    let root = view.borrow().root.clone();

    let v = view.clone();
    dom::add_listener(&root, "mousedown", move |ev: web::MouseEvent| {
        v.borrow_mut().press(input::mouse_client_pos(&ev));
    });
    let v = view.clone();
    dom::add_listener(&root, "mousemove", move |ev: web::MouseEvent| {
        v.borrow_mut().drag(input::mouse_client_pos(&ev));
    });
    for kind in ["mouseup", "mouseleave"] {
        let v = view.clone();
        dom::add_listener(&root, kind, move |_: web::MouseEvent| {
            v.borrow_mut().release();
        });
    }

    let v = view.clone();
    dom::add_listener(&root, "touchstart", move |ev: web::TouchEvent| {
        if let Some(at) = input::first_touch_pos(&ev) {
            v.borrow_mut().press(at);
        }
    });
    let v = view.clone();
    dom::add_listener(&root, "touchmove", move |ev: web::TouchEvent| {
        if let Some(at) = input::first_touch_pos(&ev) {
            v.borrow_mut().drag(at);
        }
    });
    // `touches` is already empty on end, so the last move point decides.
    for kind in ["touchend", "touchcancel"] {
        let v = view.clone();
        dom::add_listener(&root, kind, move |_: web::TouchEvent| {
            v.borrow_mut().release();
        });
    }
}

/// One click handler per indicator, selecting its item directly.
pub fn wire_indicators(view: &Rc<RefCell<CarouselView>>) {
    let dots: Vec<web::Element> = {
        let v = view.borrow();
        (0..v.dot_count()).filter_map(|i| v.dot(i).cloned()).collect()
    };
    for (i, dot) in dots.iter().enumerate() {
        let v = view.clone();
        dom::add_listener(dot, "click", move |ev: web::MouseEvent| {
            ev.stop_propagation();
            v.borrow_mut().select(i);
        });
    }
}

/// Switch every carousel between single-card and grid when the window
/// crosses the narrow breakpoint.
pub fn wire_layout_resize(views: Rc<Vec<Rc<RefCell<CarouselView>>>>) {
    dom::add_window_listener("resize", move |_: web::Event| {
        let Some(vp) = dom::viewport() else {
            return;
        };
        let layout = Layout::for_width(vp.width);
        for view in views.iter() {
            view.borrow_mut().set_layout(layout);
        }
    });
}
