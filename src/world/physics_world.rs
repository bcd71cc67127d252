use tracing::debug;

use crate::collision::aabb::AABB;
use crate::collision::event::ObstacleId;
use crate::common::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::integration::integrator;
use crate::integration::stats::{SimStats, StepStats};
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::objects::obstacle::Obstacle;

/// Owns every body, obstacle and the playfield bounds.
///
/// Bodies and obstacles only enter through validated `add_*` calls and are
/// exposed read-only, so the integrator is the single writer during a step.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) bodies: Vec<Body>,
    pub(crate) obstacles: Vec<Obstacle>,
    pub(crate) bounds: AABB,
    pub(crate) stats: SimStats,
}

impl World {
    /// Creates an empty world over `bounds`. Degenerate or non-finite bounds are rejected.
    pub fn new(bounds: AABB) -> SimResult<Self> {
        if !bounds.is_valid() {
            return Err(SimError::InvalidBounds {
                min: bounds.min,
                max: bounds.max,
            });
        }
        Ok(Self {
            bodies: Vec::new(),
            obstacles: Vec::new(),
            bounds,
            stats: SimStats::default(),
        })
    }

    /// Same as [`World::new`], taking the corners as given rather than sorting them.
    pub fn from_extents(min: Vec2, max: Vec2) -> SimResult<Self> {
        Self::new(AABB { min, max })
    }

    /// Adds a body and returns its index.
    pub fn add_body(&mut self, position: Vec2, velocity: Vec2, radius: f64) -> SimResult<usize> {
        let body = Body::new(position, velocity, radius)?;
        let index = self.bodies.len();
        self.bodies.push(body);
        Ok(index)
    }

    /// Adds a static obstacle spanning `min..max` and returns its id.
    pub fn add_obstacle(&mut self, min: Vec2, max: Vec2) -> SimResult<ObstacleId> {
        let obstacle = Obstacle::new(min, max)?;
        let id = ObstacleId(self.obstacles.len());
        self.obstacles.push(obstacle);
        Ok(id)
    }

    /// Removes every body; obstacles, bounds and counters are kept.
    pub fn clear_bodies(&mut self) {
        self.bodies.clear();
    }

    /// Drops bodies slower than `min_speed` and returns how many were removed.
    pub fn remove_slow_bodies(&mut self, min_speed: f64) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|body| body.speed() >= min_speed);
        before - self.bodies.len()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacle(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(id.0)
    }

    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Total impacts since creation or the last reset.
    pub fn collision_count(&self) -> u64 {
        self.stats.collision_count
    }

    /// Total tunnels detected in discrete mode since creation or the last reset.
    pub fn tunnel_count(&self) -> u64 {
        self.stats.tunnel_count
    }

    pub fn reset_stats(&mut self) {
        debug!(
            collisions = self.stats.collision_count,
            tunnels = self.stats.tunnel_count,
            "resetting world counters"
        );
        self.stats.reset();
    }

    /// Advances the simulation by one time step `dt`.
    pub fn step(&mut self, dt: f64, config: &SimConfig) -> StepStats {
        integrator::step(self, dt, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_world() -> World {
        World::new(AABB::new(Vec2::new(0.0, 0.0), Vec2::new(800.0, 600.0))).expect("valid bounds")
    }

    #[test]
    fn test_world_new() {
        let world = test_world();
        assert!(world.bodies().is_empty());
        assert!(world.obstacles().is_empty());
        assert_eq!(world.bounds().max, Vec2::new(800.0, 600.0));
        assert_eq!(world.collision_count(), 0);
        assert_eq!(world.tunnel_count(), 0);
    }

    #[test]
    fn test_world_rejects_malformed_bounds() {
        assert!(matches!(
            World::new(AABB::new(Vec2::ZERO, Vec2::new(10.0, 0.0))),
            Err(SimError::InvalidBounds { .. })
        ));
        assert!(World::new(AABB::new(Vec2::ZERO, Vec2::new(f64::NAN, 10.0))).is_err());
        assert!(World::new(AABB::new(Vec2::new(-5.0, -5.0), Vec2::new(f64::INFINITY, 5.0))).is_err());
    }

    #[test]
    fn test_world_from_extents() {
        assert!(World::from_extents(Vec2::ZERO, Vec2::new(10.0, 10.0)).is_ok());
        assert!(matches!(
            World::from_extents(Vec2::ZERO, Vec2::new(10.0, 0.0)),
            Err(SimError::InvalidBounds { .. })
        ));
        // Corners are not sorted here.
        assert!(World::from_extents(Vec2::new(10.0, 10.0), Vec2::ZERO).is_err());
    }

    #[test]
    fn test_add_body_and_obstacle() {
        let mut world = test_world();
        let idx1 = world.add_body(Vec2::new(10.0, 10.0), Vec2::new(1.0, 0.0), 5.0).expect("valid body");
        let idx2 = world.add_body(Vec2::new(20.0, 10.0), Vec2::new(0.0, 1.0), 5.0).expect("valid body");
        assert_eq!(idx1, 0);
        assert_eq!(idx2, 1);

        let id = world.add_obstacle(Vec2::new(100.0, 0.0), Vec2::new(102.0, 300.0)).expect("valid obstacle");
        assert_eq!(id, ObstacleId(0));
        assert!(world.obstacle(id).expect("stored").is_thin());
        assert!(world.obstacle(ObstacleId(5)).is_none());
    }

    #[test]
    fn test_add_rejects_malformed_input() {
        let mut world = test_world();
        assert_eq!(
            world.add_body(Vec2::ZERO, Vec2::ZERO, -2.0),
            Err(SimError::InvalidRadius(-2.0))
        );
        assert!(world.add_obstacle(Vec2::new(5.0, 5.0), Vec2::new(5.0, 6.0)).is_err());
        assert!(world.bodies().is_empty());
        assert!(world.obstacles().is_empty());
    }

    #[test]
    fn test_clear_and_remove_slow_bodies() {
        let mut world = test_world();
        world.add_body(Vec2::new(50.0, 50.0), Vec2::new(0.05, 0.0), 5.0).expect("valid body");
        world.add_body(Vec2::new(60.0, 50.0), Vec2::new(4.0, 3.0), 5.0).expect("valid body");

        assert_eq!(world.remove_slow_bodies(0.1), 1);
        assert_eq!(world.bodies().len(), 1);
        assert_eq!(world.bodies()[0].velocity, Vec2::new(4.0, 3.0));

        world.clear_bodies();
        assert!(world.bodies().is_empty());
    }

    #[test]
    fn test_step_accumulates_and_reset_clears() {
        let mut world = test_world();
        world.add_body(Vec2::new(790.0, 300.0), Vec2::new(20.0, 0.0), 5.0).expect("valid body");

        let stats = world.step(1.0, &SimConfig::default());
        assert_eq!(stats.collisions_this_tick, 1);
        assert_eq!(world.collision_count(), 1);

        world.reset_stats();
        assert_eq!(world.collision_count(), 0);
        assert_eq!(world.bodies().len(), 1);
    }
}
