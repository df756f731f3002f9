// Shared motion and interaction tuning constants used by the web frontend.

// Bubble field
pub const DEFAULT_BUBBLE_COUNT: usize = 50;
pub const MAX_BUBBLE_COUNT: usize = 500; // one DOM node each
pub const REPEL_RADIUS: f32 = 120.0; // pointer influence radius in CSS px
pub const REPEL_GAIN: f32 = 1.5;
pub const REPEL_DEPTH_BIAS: f32 = 0.5; // shallow bubbles still feel half the push
pub const BUOYANCY: f32 = 0.005; // upward acceleration per frame at depth 0
pub const DAMPING: f32 = 0.96; // velocity multiplier per frame

// Scale pulsation
pub const SCALE_MIN: f32 = 0.9;
pub const SCALE_MAX: f32 = 1.1;
pub const SCALE_STEP: f32 = 0.002;

// Spawn ranges
pub const RISE_SPEED_MIN: f32 = 0.1;
pub const RISE_SPEED_SPAN: f32 = 0.3;
pub const ROTATION_SPEED_SPAN: f32 = 0.1; // degrees per frame, centred on 0
pub const OPACITY_BASE: f32 = 0.1;
pub const OPACITY_SPAN: f32 = 0.3;

// Preset shapes
pub const LIVELY_SIZE_BASE: f32 = 30.0;
pub const LIVELY_SIZE_SPAN: f32 = 50.0;
pub const LIVELY_DX_SPREAD: f32 = 0.3;
pub const LIVELY_JITTER: f32 = 0.05;

pub const CALM_SIZE_BASE: f32 = 20.0;
pub const CALM_SIZE_SPAN: f32 = 40.0;
pub const CALM_DX_SPREAD: f32 = 0.2;
pub const CALM_JITTER: f32 = 0.01;

// Gestures
pub const SWIPE_THRESHOLD_PX: f32 = 40.0;

// Layout
pub const NARROW_VIEWPORT_MAX_PX: f32 = 768.0; // below this, carousels show one card

// Reveal timing (seconds)
pub const REVEAL_VISIBLE_THRESHOLD: f64 = 0.2; // fraction of the target in view
pub const REVEAL_SECTION_DURATION_SEC: f32 = 1.2;
pub const REVEAL_ITEM_DURATION_SEC: f32 = 1.0;
pub const REVEAL_ITEM_BASE_DELAY_SEC: f32 = 0.3;
pub const REVEAL_ITEM_STAGGER_SEC: f32 = 0.2;
