use crate::error::{SimError, SimResult};
use crate::math::vec2::Vec2;

/// A moving circular particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vec2,
    /// Position at the start of the current tick; discrete mode uses it for tunnel detection.
    pub prev_position: Vec2,
    pub velocity: Vec2, // units per tick
    pub radius: f64,
    /// Number of impacts resolved so far. Never decreases.
    pub bounce_count: u32,
}

impl Body {
    /// Creates a body whose `prev_position` starts equal to `position`.
    ///
    /// Rejects non-finite position or velocity and any radius that is not strictly positive.
    pub fn new(position: Vec2, velocity: Vec2, radius: f64) -> SimResult<Self> {
        if !position.is_finite() {
            return Err(SimError::NonFinite("position"));
        }
        if !velocity.is_finite() {
            return Err(SimError::NonFinite("velocity"));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimError::InvalidRadius(radius));
        }

        Ok(Self {
            position,
            prev_position: position,
            velocity,
            radius,
            bounce_count: 0,
        })
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Moves along the current velocity for `time` ticks.
    pub fn advance(&mut self, time: f64) {
        self.position += self.velocity * time;
    }

    /// Mirrors the velocity about `normal`, then scales the whole vector by `restitution`.
    pub fn bounce(&mut self, normal: Vec2, restitution: f64) {
        self.velocity = self.velocity.reflect(normal) * restitution;
        self.bounce_count = self.bounce_count.saturating_add(1);
    }
}
