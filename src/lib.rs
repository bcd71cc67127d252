//! Continuous collision detection for circular bodies bouncing among static
//! axis-aligned rectangles, with a discrete stepping mode kept for contrast.

pub mod math;
pub mod objects;
pub mod integration;
pub mod collision;
pub mod world;
pub mod common;
pub mod error;

// Re-export key types for easier use
pub use math::vec2::Vec2;
pub use objects::{Body, Obstacle};
pub use collision::{CollisionEvent, ObstacleId, AABB};
pub use common::{SimConfig, SimMode};
pub use error::{SimError, SimResult};
pub use integration::{step, step_with_sink, EventSink, StepStats};
pub use world::{Command, FireParams, Simulation, World};
