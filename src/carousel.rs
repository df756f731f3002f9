use crate::constants::*;
use crate::dom;
use aquatics_core::{Carousel, CarouselConfig, Layout, SwipeDirection, SwipeTracker};
use glam::Vec2;
use smallvec::SmallVec;
use web_sys as web;

/// A `[data-carousel]` card list bound to its index and drag state.
pub struct CarouselView {
    pub root: web::Element,
    items: Vec<web::Element>,
    dots: SmallVec<[web::Element; 8]>,
    carousel: Carousel,
    tracker: SwipeTracker,
    layout: Layout,
    keyboard: bool,
}

impl CarouselView {
    pub fn mount(root: web::Element, layout: Layout) -> anyhow::Result<Self> {
        let items = dom::query_all_within(&root, CAROUSEL_ITEM_SELECTOR);
        let dots: SmallVec<[web::Element; 8]> =
            dom::query_all_within(&root, CAROUSEL_DOT_SELECTOR).into_iter().collect();
        let wrap = root.get_attribute(ATTR_CAROUSEL_WRAP);
        let threshold = root.get_attribute(ATTR_SWIPE_THRESHOLD);
        let keyboard = root.has_attribute(ATTR_CAROUSEL_KEYS);

        let cfg = CarouselConfig::from_attrs(
            items.len(),
            wrap.as_deref(),
            threshold.as_deref(),
            keyboard,
        )
        .or_else(|e| {
            if items.is_empty() {
                return Err(e);
            }
            log::warn!("[carousel] ignoring overrides: {}", e);
            Ok(CarouselConfig {
                keyboard,
                ..CarouselConfig::new(items.len())
            })
        })?;
        if !dots.is_empty() && dots.len() != items.len() {
            log::warn!(
                "[carousel] {} indicators for {} items; extra indicators select by policy",
                dots.len(),
                items.len()
            );
        }

        let view = Self {
            root,
            items,
            dots,
            carousel: Carousel::new(cfg.item_count, cfg.policy)?,
            tracker: SwipeTracker::new(cfg.swipe_threshold),
            layout,
            keyboard: cfg.keyboard,
        };
        view.render();
        Ok(view)
    }

    #[inline]
    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    pub fn dot(&self, i: usize) -> Option<&web::Element> {
        self.dots.get(i)
    }

    #[inline]
    pub fn keyboard_opt_in(&self) -> bool {
        self.keyboard
    }

    #[inline]
    pub fn listens_to_keys(&self) -> bool {
        self.keyboard && self.layout.swipe_enabled()
    }

    pub fn set_layout(&mut self, layout: Layout) {
        if layout != self.layout {
            self.layout = layout;
            self.tracker.cancel();
            self.render();
        }
    }

    pub fn press(&mut self, at: Vec2) {
        if self.layout.swipe_enabled() {
            self.tracker.press(at);
        }
    }

    pub fn drag(&mut self, at: Vec2) {
        self.tracker.move_to(at);
    }

    pub fn release(&mut self) {
        if let Some(dir) = self.tracker.release() {
            self.step(dir);
        }
    }

    pub fn step(&mut self, dir: SwipeDirection) {
        if self.carousel.step(dir) {
            log::debug!("[carousel] {:?} -> {}", dir, self.carousel.index());
            self.render();
        }
    }

    pub fn select(&mut self, index: usize) {
        if self.carousel.select(index) {
            log::debug!("[carousel] select -> {}", self.carousel.index());
            self.render();
        }
    }

    fn render(&self) {
        let single = self.layout == Layout::Single;
        let current = self.carousel.index();
        for (i, item) in self.items.iter().enumerate() {
            dom::set_class(item, CLASS_HIDDEN, single && i != current);
        }
        for (i, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, CLASS_ACTIVE, i == current);
            dom::set_class(dot, CLASS_HIDDEN, !single);
        }
    }
}
