pub mod keyboard;
pub mod pointer;
pub mod swipe;

pub use keyboard::wire_carousel_keys;
pub use pointer::wire_pointer_tracking;
pub use swipe::{wire_indicators, wire_layout_resize, wire_swipe};
