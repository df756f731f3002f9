//! Ambient bubble field.
//!
//! A fixed number of bubbles drift upward with a little sideways jitter, are
//! pushed away from the pointer, and re-enter from the bottom once they float
//! off the top. Each bubble carries a `depth` in \[0, 1\] drawn at spawn that
//! scales its size, opacity, drift and how strongly the pointer shoves it.
//!
//! Everything here is a plain per-frame step with no platform calls; the web
//! frontend feeds it the latest pointer position and the current window size.

use crate::constants::*;
use crate::error::ConfigError;
use glam::Vec2;
use rand::Rng;
use std::str::FromStr;

/// Named tuning bundle chosen per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldPreset {
    /// Larger, busier bubbles.
    Lively,
    /// Smaller, steadier bubbles.
    Calm,
}

impl FromStr for FieldPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lively" => Ok(FieldPreset::Lively),
            "calm" => Ok(FieldPreset::Calm),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub count: usize,
    pub size_base: f32,
    pub size_span: f32,
    pub initial_dx_spread: f32,
    pub jitter: f32,
    pub repel_radius: f32,
    pub repel_gain: f32,
    pub repel_depth_bias: f32,
    pub buoyancy: f32,
    pub damping: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub scale_step: f32,
    /// Stack bubbles by depth instead of on one flat layer.
    pub depth_layering: bool,
}

impl FieldParams {
    pub fn lively() -> Self {
        Self {
            size_base: LIVELY_SIZE_BASE,
            size_span: LIVELY_SIZE_SPAN,
            initial_dx_spread: LIVELY_DX_SPREAD,
            jitter: LIVELY_JITTER,
            ..Self::calm()
        }
    }

    pub fn calm() -> Self {
        Self {
            count: DEFAULT_BUBBLE_COUNT,
            size_base: CALM_SIZE_BASE,
            size_span: CALM_SIZE_SPAN,
            initial_dx_spread: CALM_DX_SPREAD,
            jitter: CALM_JITTER,
            repel_radius: REPEL_RADIUS,
            repel_gain: REPEL_GAIN,
            repel_depth_bias: REPEL_DEPTH_BIAS,
            buoyancy: BUOYANCY,
            damping: DAMPING,
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
            scale_step: SCALE_STEP,
            depth_layering: false,
        }
    }

    pub fn from_preset(preset: FieldPreset) -> Self {
        match preset {
            FieldPreset::Lively => Self::lively(),
            FieldPreset::Calm => Self::calm(),
        }
    }

    /// Build from raw markup attribute values on top of the page's preset.
    pub fn from_attrs(
        page_preset: FieldPreset,
        preset: Option<&str>,
        count: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let preset = match preset {
            Some(raw) => raw.parse()?,
            None => page_preset,
        };
        let params = Self::from_preset(preset);
        match count {
            Some(raw) => {
                let n: usize = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
                    name: "data-bubble-count",
                    value: raw.to_string(),
                })?;
                params.with_count(n)
            }
            None => Ok(params),
        }
    }

    /// Override the bubble count, rejecting an empty or oversized field.
    pub fn with_count(mut self, count: usize) -> Result<Self, ConfigError> {
        check_count(count)?;
        self.count = count;
        Ok(self)
    }

    pub fn with_depth_layering(mut self, on: bool) -> Self {
        self.depth_layering = on;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_count(self.count)?;
        let non_negative = [
            ("size_base", self.size_base),
            ("size_span", self.size_span),
            ("initial_dx_spread", self.initial_dx_spread),
            ("jitter", self.jitter),
            ("repel_radius", self.repel_radius),
            ("repel_gain", self.repel_gain),
            ("repel_depth_bias", self.repel_depth_bias),
            ("buoyancy", self.buoyancy),
            ("damping", self.damping),
            ("scale_min", self.scale_min),
            ("scale_max", self.scale_max),
            ("scale_step", self.scale_step),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        if self.scale_min > self.scale_max {
            return Err(ConfigError::InvertedScaleBounds {
                min: self.scale_min,
                max: self.scale_max,
            });
        }
        Ok(())
    }
}

#[inline]
fn check_count(count: usize) -> Result<(), ConfigError> {
    if count == 0 {
        return Err(ConfigError::NoBubbles);
    }
    if count > MAX_BUBBLE_COUNT {
        return Err(ConfigError::TooManyBubbles {
            max: MAX_BUBBLE_COUNT,
            got: count,
        });
    }
    Ok(())
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::calm()
    }
}

/// Window size in CSS pixels, read fresh every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Top-left corner of the bubble box.
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Degrees.
    pub rotation: f32,
    pub rotation_speed: f32,
    pub scale: f32,
    /// +1 while growing, -1 while shrinking.
    pub scale_dir: f32,
    pub opacity: f32,
    pub depth: f32,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(params: &FieldParams, viewport: Viewport, rng: &mut R) -> Self {
        let depth: f32 = rng.gen();
        let size = params.size_base + depth * params.size_span;
        let pos = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        let dx = (rng.gen::<f32>() - 0.5) * params.initial_dx_spread * (1.0 + depth);
        let dy = rise_velocity(depth, rng);
        Self {
            pos,
            vel: Vec2::new(dx, dy),
            size,
            rotation: rng.gen::<f32>() * 360.0,
            rotation_speed: (rng.gen::<f32>() - 0.5) * ROTATION_SPEED_SPAN,
            scale: params.scale_min + rng.gen::<f32>() * (params.scale_max - params.scale_min),
            scale_dir: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            opacity: OPACITY_BASE + depth * OPACITY_SPAN,
            depth,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size * 0.5)
    }

    /// Stacking order; deeper bubbles sit in front when layering is on.
    #[inline]
    pub fn z_index(&self, depth_layering: bool) -> i32 {
        if depth_layering {
            (self.depth * 10.0).round() as i32
        } else {
            10
        }
    }
}

/// Fresh upward velocity for a bubble at `depth`.
#[inline]
fn rise_velocity<R: Rng + ?Sized>(depth: f32, rng: &mut R) -> f32 {
    -((rng.gen::<f32>() * RISE_SPEED_SPAN + RISE_SPEED_MIN) * (1.0 + depth))
}

/// Velocity change pushing a bubble centred at `center` away from `pointer`.
///
/// Zero outside the radius, and zero when the pointer sits exactly on the
/// centre since there is no direction to push in.
#[inline]
pub fn repulsion(center: Vec2, pointer: Vec2, depth: f32, params: &FieldParams) -> Vec2 {
    let away = center - pointer;
    let dist = away.length();
    if !(dist > 0.0 && dist < params.repel_radius) {
        return Vec2::ZERO;
    }
    let strength =
        (1.0 - dist / params.repel_radius) * params.repel_gain * (params.repel_depth_bias + depth);
    let push = away / dist * strength;
    if push.is_finite() {
        push
    } else {
        Vec2::ZERO
    }
}

pub struct ParticleField {
    params: FieldParams,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        params: FieldParams,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        let particles = (0..params.count)
            .map(|_| Particle::spawn(&params, viewport, rng))
            .collect();
        Ok(Self { params, particles })
    }

    /// Build a field around existing bubbles, e.g. to resume a known state.
    pub fn from_particles(
        params: FieldParams,
        particles: Vec<Particle>,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        if particles.is_empty() {
            return Err(ConfigError::NoBubbles);
        }
        Ok(Self { params, particles })
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every bubble by one display frame. Returns how many bubbles
    /// re-entered from the bottom.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        pointer: Option<Vec2>,
        viewport: Viewport,
        rng: &mut R,
    ) -> usize {
        let params = &self.params;
        let mut respawned = 0;
        for p in &mut self.particles {
            if let Some(ptr) = pointer {
                p.vel += repulsion(p.center(), ptr, p.depth, params);
            }
            p.vel.y -= params.buoyancy * (1.0 + p.depth);
            p.vel.x += (rng.gen::<f32>() - 0.5) * params.jitter;

            p.pos += p.vel;
            p.vel *= params.damping;
            p.rotation += p.rotation_speed;

            p.scale = (p.scale + params.scale_step * p.scale_dir)
                .clamp(params.scale_min, params.scale_max);
            if p.scale >= params.scale_max {
                p.scale_dir = -1.0;
            } else if p.scale <= params.scale_min {
                p.scale_dir = 1.0;
            }

            if p.pos.y + p.size < 0.0 {
                p.pos.y = viewport.height + p.size;
                p.pos.x = rng.gen::<f32>() * viewport.width;
                p.vel.y = rise_velocity(p.depth, rng);
                respawned += 1;
            }
            if p.pos.x < -p.size {
                p.pos.x = viewport.width + p.size;
            } else if p.pos.x > viewport.width + p.size {
                p.pos.x = -p.size;
            }
        }
        if respawned > 0 {
            log::trace!("[bubbles] respawned {} of {}", respawned, self.particles.len());
        }
        respawned
    }
}
