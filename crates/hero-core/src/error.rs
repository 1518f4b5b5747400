use thiserror::Error;

/// Configuration errors raised when building a [`crate::Scene`].
///
/// Nothing on the per-frame path can fail; these only surface from
/// [`crate::SceneParams::validate`] and constructors that call it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("{name} must be a finite positive number, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("anchor radius band is inverted: min {min} > max {max}")]
    InvertedRadiusBand { min: f32, max: f32 },
    #[error("line buffer capacity must be at least one segment")]
    ZeroLineCapacity,
    #[error("blob subdivisions {value} exceed the maximum of {max}")]
    TooManySubdivisions { value: u32, max: u32 },
    #[error("palette stop {0} has a non-finite or out-of-range component")]
    BadPaletteStop(&'static str),
    #[error("invalid hex colour {0:?}")]
    BadColor(String),
}

pub type Result<T> = std::result::Result<T, SceneError>;
