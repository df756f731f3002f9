#![cfg(target_arch = "wasm32")]
use aquatics_core::{Layout, Page, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod bubbles;
mod carousel;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod reveal;
mod style;

use constants::{BUBBLE_LAYER_ID, CAROUSEL_SELECTOR};

/// Build the bubble field for `page` and start its frame loop. Pages without
/// a bubble layer in their markup get none.
fn mount_bubble_field(
    document: &web::Document,
    page: Page,
    pointer: Rc<RefCell<input::PointerState>>,
) -> anyhow::Result<Option<frame::AnimationLoop>> {
    let Some(preset) = page.field_preset() else {
        return Ok(None);
    };
    let Some(layer_el) = document.get_element_by_id(BUBBLE_LAYER_ID) else {
        log::info!("[bubbles] no #{} on {:?}; skipping", BUBBLE_LAYER_ID, page);
        return Ok(None);
    };
    let viewport = dom::viewport().ok_or_else(|| anyhow::anyhow!("no viewport size"))?;

    let params = bubbles::params_for_layer(&layer_el, page, preset);
    let mut rng = StdRng::from_entropy();
    let field = ParticleField::new(params, viewport, &mut rng)?;
    let layer = bubbles::BubbleLayer::mount(document, &layer_el, &field)?;
    log::info!(
        "[bubbles] mounted {} bubbles ({:?}) at {:.0}x{:.0}",
        field.len(),
        preset,
        viewport.width,
        viewport.height
    );

    events::wire_pointer_tracking(pointer.clone());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        layer,
        pointer,
        rng,
    }));
    Ok(Some(frame::start_loop(frame_ctx)))
}

fn mount_carousels(document: &web::Document) -> usize {
    let layout = dom::viewport()
        .map(|vp| Layout::for_width(vp.width))
        .unwrap_or(Layout::Grid);
    let mut views = Vec::new();
    for root in dom::query_all(document, CAROUSEL_SELECTOR) {
        match carousel::CarouselView::mount(root, layout) {
            Ok(view) => {
                let view = Rc::new(RefCell::new(view));
                events::wire_swipe(&view);
                events::wire_indicators(&view);
                views.push(view);
            }
            Err(e) => log::error!("[carousel] mount failed: {:#}", e),
        }
    }
    let count = views.len();
    if count > 0 {
        let views = Rc::new(views);
        events::wire_layout_resize(views.clone());
        events::wire_carousel_keys(views);
    }
    count
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aquatics-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let path = window
        .location()
        .pathname()
        .map_err(|e| anyhow::anyhow!("pathname: {:?}", e))?;
    let page = Page::from_path(&path);
    log::info!("[page] {} -> {:?}", path, page);

    if let Some(page) = page {
        let pointer = Rc::new(RefCell::new(input::PointerState::default()));
        match mount_bubble_field(&document, page, pointer) {
            Ok(Some(anim)) => {
                // A persisted page may come back from the back/forward cache;
                // the browser already suspends frames while it is hidden.
                dom::add_window_listener("pagehide", move |ev: web::PageTransitionEvent| {
                    if !ev.persisted() {
                        anim.stop();
                    }
                });
            }
            Ok(None) => {}
            Err(e) => log::error!("[bubbles] mount failed: {:#}", e),
        }
    }

    let carousels = mount_carousels(&document);
    let reveals = match reveal::wire_reveals(&document) {
        Ok(n) => n,
        Err(e) => {
            log::error!("[reveal] {:#}", e);
            0
        }
    };
    log::info!("[page] carousels={} reveals={}", carousels, reveals);
    Ok(())
}
