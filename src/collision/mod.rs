pub mod aabb;
pub mod discrete;
pub mod event;
pub mod solver;
pub mod sweep;

// Re-export key types
pub use aabb::AABB;
pub use discrete::{boundary_contacts, circle_rect_contact, DiscreteContact};
pub use event::{CollisionEvent, ObstacleId, SweepHit};
pub use solver::earliest_collision;
pub use sweep::{ray_vs_boundary, ray_vs_expanded_rect, segment_crosses_rect, PARALLEL_EPSILON};
