// Host-side tests for tuning constants, presets, pages, layout and reveal timing.

use aquatics_core::constants::*;
use aquatics_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_within_reasonable_bounds() {
    assert!(DEFAULT_BUBBLE_COUNT > 0 && DEFAULT_BUBBLE_COUNT <= MAX_BUBBLE_COUNT);
    assert!(REPEL_RADIUS > 0.0);
    assert!(REPEL_GAIN > 0.0);
    assert!(BUOYANCY > 0.0);

    // Drag must bleed off speed without reversing it
    assert!(DAMPING > 0.0 && DAMPING < 1.0);

    assert!(SCALE_MIN < 1.0 && SCALE_MAX > 1.0);
    assert!(SCALE_STEP > 0.0 && SCALE_STEP < SCALE_MAX - SCALE_MIN);

    assert!(OPACITY_BASE + OPACITY_SPAN <= 1.0);
    assert!(RISE_SPEED_MIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn presets_have_logical_relationships() {
    assert!(LIVELY_SIZE_BASE > CALM_SIZE_BASE);
    assert!(LIVELY_SIZE_SPAN > CALM_SIZE_SPAN);
    assert!(LIVELY_JITTER > CALM_JITTER);
    assert!(LIVELY_DX_SPREAD > CALM_DX_SPREAD);

    // A swipe should need more travel than a twitch but less than a card width
    assert!(SWIPE_THRESHOLD_PX > 8.0 && SWIPE_THRESHOLD_PX < NARROW_VIEWPORT_MAX_PX / 4.0);

    assert!(REVEAL_VISIBLE_THRESHOLD > 0.0 && REVEAL_VISIBLE_THRESHOLD < 1.0);
}

#[test]
fn presets_validate() {
    assert!(FieldParams::lively().validate().is_ok());
    assert!(FieldParams::calm().validate().is_ok());
    assert_eq!(FieldParams::default(), FieldParams::calm());
    // Layering is a page choice, not a preset one
    assert!(!FieldParams::lively().depth_layering);
    assert!(!FieldParams::calm().depth_layering);
    assert!(FieldParams::calm().with_depth_layering(true).depth_layering);
}

#[test]
fn preset_names_parse() {
    assert_eq!("lively".parse::<FieldPreset>(), Ok(FieldPreset::Lively));
    assert_eq!("CALM".parse::<FieldPreset>(), Ok(FieldPreset::Calm));
    assert_eq!(
        "stormy".parse::<FieldPreset>(),
        Err(ConfigError::UnknownPreset("stormy".to_string()))
    );
}

#[test]
fn field_params_from_attrs() {
    let p = FieldParams::from_attrs(FieldPreset::Calm, None, None).unwrap();
    assert_eq!(p, FieldParams::calm());

    let p = FieldParams::from_attrs(FieldPreset::Calm, Some("lively"), Some("12")).unwrap();
    assert_eq!(p.count, 12);
    assert_eq!(p.size_base, LIVELY_SIZE_BASE);

    assert_eq!(
        FieldParams::from_attrs(FieldPreset::Lively, None, Some("0")),
        Err(ConfigError::NoBubbles)
    );
    assert!(FieldParams::from_attrs(FieldPreset::Lively, None, Some("500")).is_ok());
    assert_eq!(
        FieldParams::from_attrs(FieldPreset::Lively, None, Some("100000")),
        Err(ConfigError::TooManyBubbles {
            max: MAX_BUBBLE_COUNT,
            got: 100_000
        })
    );
    assert!(matches!(
        FieldParams::from_attrs(FieldPreset::Lively, None, Some("lots")),
        Err(ConfigError::NotANumber { .. })
    ));
    assert!(matches!(
        FieldParams::from_attrs(FieldPreset::Lively, Some("fizzy"), None),
        Err(ConfigError::UnknownPreset(_))
    ));
}

#[test]
fn config_errors_read_well() {
    assert_eq!(ConfigError::EmptyCarousel.to_string(), "carousel has no items");
    assert_eq!(
        ConfigError::UnknownWrapPolicy("x".into()).to_string(),
        "unknown wrap policy \"x\" (expected \"wrap\" or \"clamp\")"
    );
    assert_eq!(
        ConfigError::TooManyBubbles { max: 500, got: 501 }.to_string(),
        "bubble count 501 exceeds the maximum of 500"
    );
}

#[test]
fn pages_resolve_from_paths() {
    assert_eq!(Page::from_path("/"), Some(Page::Home));
    assert_eq!(Page::from_path(""), Some(Page::Home));
    assert_eq!(Page::from_path("/about"), Some(Page::About));
    assert_eq!(Page::from_path("/about/"), Some(Page::About));
    assert_eq!(Page::from_path("/shop"), Some(Page::Shop));
    assert_eq!(Page::from_path("/guides"), Some(Page::Guides));
    assert_eq!(Page::from_path("/socials"), Some(Page::Socials));
    assert_eq!(Page::from_path("/guides/freshwater"), None);
    assert_eq!(Page::from_path("/nope"), None);

    for page in Page::ALL {
        assert_eq!(Page::from_path(page.path()), Some(page));
    }
}

#[test]
fn routed_pages_carry_a_bubble_field() {
    assert_eq!(Page::Home.field_preset(), Some(FieldPreset::Lively));
    for page in [Page::About, Page::Shop, Page::Guides, Page::Socials] {
        assert_eq!(page.field_preset(), Some(FieldPreset::Calm));
    }
    assert_eq!(Page::Blog.field_preset(), None);
    assert_eq!(Page::Contact.field_preset(), None);
}

#[test]
fn only_guides_layers_bubbles_by_depth() {
    for page in Page::ALL {
        assert_eq!(page.depth_layering(), page == Page::Guides, "{:?}", page);
    }
    // Socials shares the calm preset but keeps one flat layer
    assert_eq!(Page::Socials.field_preset(), Page::Guides.field_preset());
    assert!(!Page::Socials.depth_layering());
}

#[test]
fn layout_switches_at_breakpoint() {
    assert_eq!(Layout::for_width(375.0), Layout::Single);
    assert_eq!(Layout::for_width(767.9), Layout::Single);
    assert_eq!(Layout::for_width(768.0), Layout::Grid);
    assert_eq!(Layout::for_width(1440.0), Layout::Grid);
    assert!(Layout::Single.swipe_enabled());
    assert!(!Layout::Grid.swipe_enabled());
}

#[test]
fn reveal_staggers_items() {
    let section = Reveal::section();
    assert_eq!(section.duration_sec, 1.2);
    assert_eq!(section.delay_sec, 0.0);

    assert!((Reveal::item(0).delay_sec - 0.3).abs() < 1e-6);
    assert!((Reveal::item(2).delay_sec - 0.7).abs() < 1e-6);
    assert_eq!(Reveal::item(5).duration_sec, 1.0);
}

#[test]
fn reveal_transition_css() {
    assert_eq!(
        Reveal::section().transition_css(true),
        "opacity 1.20s ease-out 0.00s"
    );
    assert_eq!(
        Reveal::item(1).transition_css(true),
        "opacity 1.00s ease-out 0.50s"
    );
    // fading out does not wait for the stagger
    assert_eq!(
        Reveal::item(1).transition_css(false),
        "opacity 1.00s ease-out 0.00s"
    );
    assert_eq!(Reveal::target_opacity(true), 1.0);
    assert_eq!(Reveal::target_opacity(false), 0.0);
}

#[test]
fn reveal_rejects_negative_timing() {
    assert!(Reveal::new(0.5, 0.1).is_ok());
    assert!(Reveal::new(-1.0, 0.0).is_err());
    assert!(Reveal::new(1.0, f32::INFINITY).is_err());
}

#[test]
fn sections_stay_shown_without_an_observer() {
    assert!(Reveal::starts_visible(false));
    assert!(!Reveal::starts_visible(true));
}

#[test]
fn reveal_threshold() {
    assert!(crosses_threshold(0.2));
    assert!(crosses_threshold(1.0));
    assert!(!crosses_threshold(0.19));
    assert!(!crosses_threshold(0.0));
}
