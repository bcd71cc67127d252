//! Error types for world construction and configuration.

use thiserror::Error;

use crate::math::vec2::Vec2;

/// Errors raised when building a world or changing its configuration.
///
/// Stepping never fails; only inputs that would put malformed state into a
/// [`World`](crate::world::World) are rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Body radius must be finite and strictly positive.
    #[error("Invalid radius: {0} (must be > 0)")]
    InvalidRadius(f64),

    /// Obstacle extents must satisfy `max > min` on both axes.
    #[error("Invalid obstacle: min {min:?} must be strictly below max {max:?}")]
    InvalidObstacle { min: Vec2, max: Vec2 },

    /// World bounds must satisfy `max > min` on both axes.
    #[error("Invalid bounds: min {min:?} must be strictly below max {max:?}")]
    InvalidBounds { min: Vec2, max: Vec2 },

    /// A coordinate or velocity contained NaN or infinity.
    #[error("Non-finite {0}")]
    NonFinite(&'static str),

    #[error("Invalid restitution: {0} (must be in (0, 1])")]
    InvalidRestitution(f64),

    #[error("Invalid speed scale: {0} (must be finite and > 0)")]
    InvalidSpeedScale(f64),

    #[error("Invalid sub-step budget: {0} (must be at least 1)")]
    InvalidSubSteps(u32),

    #[error("Invalid fire parameters: {0}")]
    InvalidFireParams(String),

    /// Configuration document could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for fallible world and configuration operations.
pub type SimResult<T> = std::result::Result<T, SimError>;
