use crate::collision::aabb::AABB;
use crate::collision::event::{CollisionEvent, ObstacleId};
use crate::collision::sweep::{ray_vs_boundary, ray_vs_expanded_rect};
use crate::math::vec2::Vec2;
use crate::objects::obstacle::Obstacle;

/// Finds the earliest impact of a moving disc within `remaining` time.
///
/// Every obstacle is tested, in stored order, followed by the world boundary.
/// On an exact time tie the first candidate found is kept, so obstacles win over
/// the boundary and lower indices win over higher ones. The returned time is
/// always within `[0, remaining]`; `None` means the disc can travel the whole
/// budget unobstructed.
pub fn earliest_collision(
    position: Vec2,
    velocity: Vec2,
    radius: f64,
    remaining: f64,
    obstacles: &[Obstacle],
    bounds: &AABB,
) -> Option<CollisionEvent> {
    if remaining.is_nan() || remaining <= 0.0 {
        return None;
    }

    let mut earliest: Option<CollisionEvent> = None;

    for (idx, obstacle) in obstacles.iter().enumerate() {
        let Some(hit) = ray_vs_expanded_rect(position, velocity, remaining, obstacle.rect(), radius) else {
            continue;
        };
        if earliest.map_or(true, |event| hit.time < event.time) {
            earliest = Some(CollisionEvent::from_hit(hit, Some(ObstacleId(idx))));
        }
    }

    if let Some(hit) = ray_vs_boundary(position, velocity, remaining, bounds, radius) {
        if earliest.map_or(true, |event| hit.time < event.time) {
            earliest = Some(CollisionEvent::from_hit(hit, None));
        }
    }

    earliest.map(|mut event| {
        event.time = event.time.clamp(0.0, remaining);
        event
    })
}
