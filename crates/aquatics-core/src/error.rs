use thiserror::Error;

/// Rejected tuning or markup configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("carousel has no items")]
    EmptyCarousel,
    #[error("unknown wrap policy {0:?} (expected \"wrap\" or \"clamp\")")]
    UnknownWrapPolicy(String),
    #[error("unknown bubble preset {0:?} (expected \"lively\" or \"calm\")")]
    UnknownPreset(String),
    #[error("bubble count must be at least 1")]
    NoBubbles,
    #[error("bubble count {got} exceeds the maximum of {max}")]
    TooManyBubbles { max: usize, got: usize },
    #[error("scale bounds inverted: min {min} > max {max}")]
    InvertedScaleBounds { min: f32, max: f32 },
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },
    #[error("attribute {name} is not a number: {value:?}")]
    NotANumber { name: &'static str, value: String },
}
