use crate::collision::aabb::AABB;
use crate::error::{SimError, SimResult};
use crate::math::vec2::Vec2;

/// A static axis-aligned rectangle. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    rect: AABB,
}

impl Obstacle {
    /// Obstacles whose shorter side is below this are labelled thin.
    pub const THIN_THRESHOLD: f64 = 4.0;

    /// Creates an obstacle spanning `min..max`. Both extents must be strictly positive.
    pub fn new(min: Vec2, max: Vec2) -> SimResult<Self> {
        let rect = AABB { min, max };
        if !rect.is_valid() {
            return Err(SimError::InvalidObstacle { min, max });
        }
        Ok(Self { rect })
    }

    pub fn rect(&self) -> &AABB {
        &self.rect
    }

    pub fn min(&self) -> Vec2 {
        self.rect.min
    }

    pub fn max(&self) -> Vec2 {
        self.rect.max
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Labelling hint for renderers; the solver treats thin and thick obstacles alike.
    pub fn is_thin(&self) -> bool {
        self.width().min(self.height()) < Self::THIN_THRESHOLD
    }
}
