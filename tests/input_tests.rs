// Host-side tests for pure input and style helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod style {
    include!("../src/style.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use aquatics_core::Particle;
use glam::Vec2;
use input::PointerState;

fn particle() -> Particle {
    Particle {
        pos: Vec2::new(12.5, -3.25),
        vel: Vec2::ZERO,
        size: 30.0,
        rotation: 90.0,
        rotation_speed: 0.0,
        scale: 1.0,
        scale_dir: 1.0,
        opacity: 0.25,
        depth: 0.5,
    }
}

#[test]
fn pointer_state_starts_empty() {
    assert_eq!(PointerState::default().latest, None);
}

#[test]
fn pointer_state_keeps_latest_position() {
    let mut ps = PointerState::default();
    ps.record(Vec2::new(10.0, 20.0));
    ps.record(Vec2::new(11.0, 21.0));
    ps.record(Vec2::new(15.0, 30.0));
    assert_eq!(ps.latest, Some(Vec2::new(15.0, 30.0)));
}

#[test]
fn pointer_state_ignores_non_finite_positions() {
    let mut ps = PointerState::default();
    ps.record(Vec2::new(5.0, 5.0));
    ps.record(Vec2::new(f32::NAN, 5.0));
    ps.record(Vec2::new(5.0, f32::INFINITY));
    assert_eq!(ps.latest, Some(Vec2::new(5.0, 5.0)));
}

#[test]
fn bubble_transform_formats_css() {
    assert_eq!(
        style::bubble_transform(&particle()),
        "translate(12.50px, -3.25px) rotate(90.00deg) scale(1.000)"
    );
}

#[test]
fn bubble_style_carries_size_opacity_and_stacking() {
    let flat = style::bubble_style(constants::BUBBLE_BASE_STYLE, &particle(), false);
    assert!(flat.starts_with(constants::BUBBLE_BASE_STYLE));
    assert!(flat.contains("width:30.0px;height:30.0px;"));
    assert!(flat.contains("opacity:0.250;"));
    assert!(flat.contains("z-index:10;"));
    assert!(flat.contains("transform:translate(12.50px, -3.25px)"));

    let layered = style::bubble_style("", &particle(), true);
    assert!(layered.contains("z-index:5;"));
}

#[test]
fn markup_hooks_are_well_formed() {
    assert!(constants::BUBBLE_BASE_STYLE.contains("position:fixed"));
    assert!(constants::BUBBLE_BASE_STYLE.contains("pointer-events:none"));
    assert!(constants::BUBBLE_BASE_STYLE.ends_with(';'));
    for sel in [
        constants::CAROUSEL_SELECTOR,
        constants::CAROUSEL_ITEM_SELECTOR,
        constants::CAROUSEL_DOT_SELECTOR,
        constants::REVEAL_SELECTOR,
        constants::REVEAL_ITEM_SELECTOR,
    ] {
        assert!(sel.starts_with("[data-") && sel.ends_with(']'), "{}", sel);
    }
}
