use crate::constants::{REVEAL_ITEM_SELECTOR, REVEAL_SELECTOR};
use crate::dom;
use aquatics_core::constants::REVEAL_VISIBLE_THRESHOLD;
use aquatics_core::{crosses_threshold, Reveal};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn apply(target: &web::Element, visible: bool) {
    let opacity = Reveal::target_opacity(visible).to_string();
    dom::set_style(target, "transition", &Reveal::section().transition_css(visible));
    dom::set_style(target, "opacity", &opacity);
    for (i, item) in dom::query_all_within(target, REVEAL_ITEM_SELECTOR)
        .iter()
        .enumerate()
    {
        dom::set_style(item, "transition", &Reveal::item(i).transition_css(visible));
        dom::set_style(item, "opacity", &opacity);
    }
}

/// Fade `[data-reveal]` sections in as they enter the viewport and back out
/// as they leave. Returns the number of observed sections.
pub fn wire_reveals(document: &web::Document) -> anyhow::Result<usize> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(0);
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let visible =
                    entry.is_intersecting() && crosses_threshold(entry.intersection_ratio());
                apply(&entry.target(), visible);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_VISIBLE_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    // Hide only once something will bring the sections back.
    for t in &targets {
        apply(t, Reveal::starts_visible(true));
        observer.observe(t);
    }
    Ok(targets.len())
}
