//! End-of-step overlap tests used by discrete stepping.
//!
//! These only look at where a body ended up, never at the path it took, which
//! is exactly why fast bodies can skip over thin obstacles in discrete mode.

use crate::collision::aabb::AABB;
use crate::math::vec2::Vec2;

/// Overlap between a disc and a surface, with the shortest way out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscreteContact {
    /// Unit direction to push the disc along to separate it.
    pub normal: Vec2,
    /// Distance the disc has to move along `normal` to just touch the surface.
    pub depth: f64,
}

/// Tests a disc against a rectangle using the closest point on the rectangle.
///
/// On overlap the separation axis is the side of the rectangle the disc is least
/// buried in; an exact tie prefers x, then the lower face.
pub fn circle_rect_contact(position: Vec2, radius: f64, rect: &AABB) -> Option<DiscreteContact> {
    let closest = rect.closest_point(position);
    if position.distance_squared(closest) >= radius * radius {
        return None;
    }

    let sides = [
        (position.x + radius - rect.min.x, Vec2::new(-1.0, 0.0)),
        (rect.max.x - (position.x - radius), Vec2::new(1.0, 0.0)),
        (position.y + radius - rect.min.y, Vec2::new(0.0, -1.0)),
        (rect.max.y - (position.y - radius), Vec2::new(0.0, 1.0)),
    ];

    let mut best = sides[0];
    for side in &sides[1..] {
        if side.0 < best.0 {
            best = *side;
        }
    }

    Some(DiscreteContact {
        normal: best.1,
        depth: best.0.max(0.0),
    })
}

/// Every wall of `bounds` the disc currently pokes through. At most two (a corner).
pub fn boundary_contacts(position: Vec2, radius: f64, bounds: &AABB) -> impl Iterator<Item = DiscreteContact> {
    let walls = [
        (bounds.min.x + radius - position.x, Vec2::new(1.0, 0.0)),
        (position.x + radius - bounds.max.x, Vec2::new(-1.0, 0.0)),
        (bounds.min.y + radius - position.y, Vec2::new(0.0, 1.0)),
        (position.y + radius - bounds.max.y, Vec2::new(0.0, -1.0)),
    ];

    walls
        .into_iter()
        .filter(|(depth, _)| *depth > 0.0)
        .map(|(depth, normal)| DiscreteContact { normal, depth })
}
