use aquatics_core::Particle;

/// Per-frame transform for one bubble.
#[inline]
pub fn bubble_transform(p: &Particle) -> String {
    format!(
        "translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.3})",
        p.pos.x, p.pos.y, p.rotation, p.scale
    )
}

/// Inline style set once when a bubble node is created.
pub fn bubble_style(base: &str, p: &Particle, depth_layering: bool) -> String {
    format!(
        "{}width:{:.1}px;height:{:.1}px;opacity:{:.3};z-index:{};transform:{};",
        base,
        p.size,
        p.size,
        p.opacity,
        p.z_index(depth_layering),
        bubble_transform(p)
    )
}
