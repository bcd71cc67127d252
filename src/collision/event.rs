use crate::math::vec2::Vec2;

/// Index of an obstacle in [`World::obstacles`](crate::world::World::obstacles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(pub usize);

/// Result of a swept query: when along the path the surface is reached, and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Parametric time along the velocity, in the same units as the query budget.
    pub time: f64,
    /// Outward unit normal of the face that was hit.
    pub normal: Vec2,
}

/// A single impact found by the swept solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Time of impact, in `[0, remaining]` of the sub-step that found it.
    /// Discrete mode has no time of impact and reports the full `dt` instead.
    pub time: f64,
    /// Unit contact normal, pointing away from the surface that was hit.
    pub normal: Vec2,
    /// `None` means the body hit the world boundary.
    pub obstacle: Option<ObstacleId>,
}

impl CollisionEvent {
    pub fn from_hit(hit: SweepHit, obstacle: Option<ObstacleId>) -> Self {
        Self {
            time: hit.time,
            normal: hit.normal,
            obstacle,
        }
    }

    pub fn is_boundary(&self) -> bool {
        self.obstacle.is_none()
    }
}
