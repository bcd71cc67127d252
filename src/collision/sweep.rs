//! Swept geometry primitives.
//!
//! A moving disc is treated as a point travelling along `origin + velocity * t`
//! against obstacles grown outward by the disc's radius (the Minkowski sum of a
//! disc and a box, approximated by a box). Intersections use the slab method.

use crate::collision::aabb::AABB;
use crate::collision::event::SweepHit;
use crate::math::vec2::Vec2;

/// Velocity components smaller than this are treated as parallel to an axis.
pub const PARALLEL_EPSILON: f64 = 1e-6;

/// Parametric interval `[entry, exit]` during which a ray lies between `lo` and `hi` on one axis.
///
/// A ray that is parallel to the slab is either inside it for all time
/// (`(-inf, inf)`) or never (`None`).
fn slab_interval(origin: f64, velocity: f64, lo: f64, hi: f64) -> Option<(f64, f64)> {
    if velocity.abs() > PARALLEL_EPSILON {
        let t1 = (lo - origin) / velocity;
        let t2 = (hi - origin) / velocity;
        Some((t1.min(t2), t1.max(t2)))
    } else if origin >= lo && origin <= hi {
        Some((f64::NEG_INFINITY, f64::INFINITY))
    } else {
        None
    }
}

/// Earliest time in `[0, max_time]` at which a disc of `radius` moving from `origin`
/// with `velocity` touches `rect`, together with the normal of the face it meets.
///
/// Returns `None` if the path misses, if the contact lies behind the origin or
/// beyond `max_time`, or if the disc already overlaps the rectangle.
pub fn ray_vs_expanded_rect(
    origin: Vec2,
    velocity: Vec2,
    max_time: f64,
    rect: &AABB,
    radius: f64,
) -> Option<SweepHit> {
    let expanded = rect.expanded(radius);
    let (entry_x, exit_x) = slab_interval(origin.x, velocity.x, expanded.min.x, expanded.max.x)?;
    let (entry_y, exit_y) = slab_interval(origin.y, velocity.y, expanded.min.y, expanded.max.y)?;

    let entry = entry_x.max(entry_y);
    let exit = exit_x.min(exit_y);
    if entry > exit || entry < 0.0 || entry > max_time {
        return None;
    }

    // The slab entered last is the face that was hit; x wins an exact corner tie.
    let normal = if entry_x >= entry_y {
        Vec2::new(-velocity.x.signum(), 0.0)
    } else {
        Vec2::new(0.0, -velocity.y.signum())
    };

    Some(SweepHit { time: entry, normal })
}

/// Earliest time in `[0, max_time]` at which a disc of `radius` reaches one of the
/// four walls of `bounds` while moving toward it.
///
/// Each wall is a one-sided test: only a body heading outward can hit it, and a
/// body already past a wall it is heading through reports an immediate hit at `t = 0`.
/// Normals point back into the playfield.
pub fn ray_vs_boundary(
    origin: Vec2,
    velocity: Vec2,
    max_time: f64,
    bounds: &AABB,
    radius: f64,
) -> Option<SweepHit> {
    let mut best: Option<SweepHit> = None;

    let walls = [
        (velocity.x < -PARALLEL_EPSILON, bounds.min.x + radius, origin.x, velocity.x, Vec2::new(1.0, 0.0)),
        (velocity.x > PARALLEL_EPSILON, bounds.max.x - radius, origin.x, velocity.x, Vec2::new(-1.0, 0.0)),
        (velocity.y < -PARALLEL_EPSILON, bounds.min.y + radius, origin.y, velocity.y, Vec2::new(0.0, 1.0)),
        (velocity.y > PARALLEL_EPSILON, bounds.max.y - radius, origin.y, velocity.y, Vec2::new(0.0, -1.0)),
    ];

    for (approaching, wall, start, speed, normal) in walls {
        if !approaching {
            continue;
        }
        let time = ((wall - start) / speed).max(0.0);
        if time > max_time {
            continue;
        }
        if best.map_or(true, |hit| time < hit.time) {
            best = Some(SweepHit { time, normal });
        }
    }

    best
}

/// Checks whether the segment from `start` to `end` touches `rect` anywhere.
pub fn segment_crosses_rect(start: Vec2, end: Vec2, rect: &AABB) -> bool {
    let delta = end - start;
    let Some((entry_x, exit_x)) = slab_interval(start.x, delta.x, rect.min.x, rect.max.x) else {
        return false;
    };
    let Some((entry_y, exit_y)) = slab_interval(start.y, delta.y, rect.min.y, rect.max.y) else {
        return false;
    };

    let entry = entry_x.max(entry_y);
    let exit = exit_x.min(exit_y);
    entry <= exit && exit >= 0.0 && entry <= 1.0
}
