/// Markup hooks and fixed styling the frontend attaches to.
///
/// Tuning numbers for motion live in `aquatics_core::constants`; this file
/// only names DOM selectors, attributes and classes.
// Bubble layer
pub const BUBBLE_LAYER_ID: &str = "bubble-layer";
pub const ATTR_BUBBLE_COUNT: &str = "data-bubble-count";
pub const ATTR_BUBBLE_PRESET: &str = "data-bubble-preset";

// Carousels
pub const CAROUSEL_SELECTOR: &str = "[data-carousel]";
pub const CAROUSEL_ITEM_SELECTOR: &str = "[data-carousel-item]";
pub const CAROUSEL_DOT_SELECTOR: &str = "[data-carousel-dot]";
pub const ATTR_CAROUSEL_WRAP: &str = "data-carousel-wrap";
pub const ATTR_SWIPE_THRESHOLD: &str = "data-swipe-threshold";
pub const ATTR_CAROUSEL_KEYS: &str = "data-carousel-keys";

// Reveal
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_ITEM_SELECTOR: &str = "[data-reveal-item]";

// State classes
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_ACTIVE: &str = "active";

// Fixed bubble look; per-bubble size, opacity and stacking are appended.
pub const BUBBLE_BASE_STYLE: &str = "position:fixed;top:0;left:0;border-radius:50%;\
pointer-events:none;will-change:transform;\
background:radial-gradient(circle at 35% 35%, rgba(255,255,255,0.8), rgba(255,255,255,0.05), rgba(255,255,255,0));\
border:1px solid rgba(255,255,255,0.2);\
box-shadow:inset -2px -2px 6px rgba(255,255,255,0.2), inset 2px 2px 4px rgba(0,0,0,0.1);";
