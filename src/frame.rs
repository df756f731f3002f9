use crate::bubbles::BubbleLayer;
use crate::dom;
use crate::input::PointerState;
use aquatics_core::ParticleField;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField,
    pub layer: BubbleLayer,
    pub pointer: Rc<RefCell<PointerState>>,
    pub rng: StdRng,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Window size is polled here rather than tracked through resize events.
        let Some(viewport) = dom::viewport() else {
            return;
        };
        let pointer = self.pointer.borrow().latest;
        self.field.tick(pointer, viewport, &mut self.rng);
        self.layer.render(&self.field);
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running `requestAnimationFrame` loop.
pub struct AnimationLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl AnimationLoop {
    /// Cancel the pending frame and release the frame callback. The context
    /// is never touched again after this returns.
    pub fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        // Dropping the closure breaks the closure -> slot reference cycle.
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn schedule(tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let stopped = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    let stopped_clone = stopped.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        if stopped_clone.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        schedule(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut()>));

    schedule(&tick, &pending);
    AnimationLoop {
        tick,
        pending,
        stopped,
    }
}
