//! Single-item carousel index used on narrow viewports.

use crate::constants::SWIPE_THRESHOLD_PX;
use crate::error::ConfigError;
use crate::gesture::SwipeDirection;
use std::str::FromStr;

/// What happens when stepping past either end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WrapPolicy {
    /// Continue from the other end.
    #[default]
    Wrap,
    /// Stay on the first/last item.
    Clamp,
}

impl FromStr for WrapPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" => Ok(WrapPolicy::Wrap),
            "clamp" => Ok(WrapPolicy::Clamp),
            _ => Err(ConfigError::UnknownWrapPolicy(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub item_count: usize,
    pub policy: WrapPolicy,
    pub swipe_threshold: f32,
    /// Listen to left/right arrow keys.
    pub keyboard: bool,
}

impl CarouselConfig {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            policy: WrapPolicy::default(),
            swipe_threshold: SWIPE_THRESHOLD_PX,
            keyboard: false,
        }
    }

    /// Build from raw markup attribute values; missing ones keep defaults.
    pub fn from_attrs(
        item_count: usize,
        wrap: Option<&str>,
        threshold: Option<&str>,
        keyboard: bool,
    ) -> Result<Self, ConfigError> {
        if item_count == 0 {
            return Err(ConfigError::EmptyCarousel);
        }
        let mut cfg = Self::new(item_count);
        if let Some(w) = wrap {
            cfg.policy = w.parse()?;
        }
        if let Some(t) = threshold {
            let value: f32 = t.trim().parse().map_err(|_| ConfigError::NotANumber {
                name: "data-swipe-threshold",
                value: t.to_string(),
            })?;
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter {
                    name: "swipe_threshold",
                    value,
                });
            }
            cfg.swipe_threshold = value;
        }
        cfg.keyboard = keyboard;
        Ok(cfg)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    item_count: usize,
    policy: WrapPolicy,
}

impl Carousel {
    pub fn new(item_count: usize, policy: WrapPolicy) -> Result<Self, ConfigError> {
        if item_count == 0 {
            return Err(ConfigError::EmptyCarousel);
        }
        Ok(Self {
            index: 0,
            item_count,
            policy,
        })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn policy(&self) -> WrapPolicy {
        self.policy
    }

    /// Returns true if the index moved.
    pub fn next(&mut self) -> bool {
        let target = match self.policy {
            WrapPolicy::Wrap => (self.index + 1) % self.item_count,
            WrapPolicy::Clamp => (self.index + 1).min(self.item_count - 1),
        };
        self.move_to(target)
    }

    /// Returns true if the index moved.
    pub fn prev(&mut self) -> bool {
        let target = match self.policy {
            WrapPolicy::Wrap => (self.index + self.item_count - 1) % self.item_count,
            WrapPolicy::Clamp => self.index.saturating_sub(1),
        };
        self.move_to(target)
    }

    pub fn step(&mut self, dir: SwipeDirection) -> bool {
        match dir {
            SwipeDirection::Forward => self.next(),
            SwipeDirection::Back => self.prev(),
        }
    }

    /// Jump straight to `index`, normalised into range by the policy.
    pub fn select(&mut self, index: usize) -> bool {
        let target = match self.policy {
            WrapPolicy::Wrap => index % self.item_count,
            WrapPolicy::Clamp => index.min(self.item_count - 1),
        };
        self.move_to(target)
    }

    #[inline]
    fn move_to(&mut self, target: usize) -> bool {
        let changed = target != self.index;
        self.index = target;
        changed
    }
}
