use tracing::{debug, trace, warn};

use crate::collision::aabb::AABB;
use crate::collision::discrete::{boundary_contacts, circle_rect_contact, DiscreteContact};
use crate::collision::event::{CollisionEvent, ObstacleId};
use crate::collision::solver::earliest_collision;
use crate::collision::sweep::segment_crosses_rect;
use crate::common::config::{SimConfig, SimMode};
use crate::integration::stats::{EventSink, StepStats};
use crate::objects::body::Body;
use crate::objects::obstacle::Obstacle;
use crate::world::World;

/// Leftover travel time below this is considered consumed.
const TIME_EPSILON: f64 = 1e-6;

/// Advances every body in `world` by `dt` ticks and returns what happened.
///
/// Bodies are processed in stored order. A non-finite or non-positive `dt`
/// leaves the world untouched and returns zero counts.
pub fn step(world: &mut World, dt: f64, config: &SimConfig) -> StepStats {
    step_with_sink(world, dt, config, &mut ())
}

/// Same as [`step`], forwarding each impact and tunnel to `sink`.
pub fn step_with_sink<S: EventSink + ?Sized>(
    world: &mut World,
    dt: f64,
    config: &SimConfig,
    sink: &mut S,
) -> StepStats {
    let mut stats = StepStats::default();
    if !dt.is_finite() || dt <= 0.0 {
        if dt != 0.0 {
            warn!(dt, "ignoring step with invalid dt");
        }
        return stats;
    }

    let restitution = config.effective_restitution();
    let bounds = world.bounds;
    let obstacles = &world.obstacles;
    // Per-obstacle overlap flags, reused across bodies in discrete mode.
    let mut overlapped = vec![false; obstacles.len()];

    for (idx, body) in world.bodies.iter_mut().enumerate() {
        body.prev_position = body.position;
        match config.mode {
            SimMode::Continuous => {
                let exhausted = advance_continuous(
                    idx,
                    body,
                    dt,
                    obstacles,
                    &bounds,
                    restitution,
                    config.max_sub_steps,
                    &mut stats,
                    sink,
                );
                if exhausted {
                    stats.budget_exhausted += 1;
                }
            }
            SimMode::Discrete => {
                advance_discrete(idx, body, dt, obstacles, &bounds, restitution, &mut overlapped, &mut stats, sink);
            }
        }
    }

    world.stats.record(&stats);
    stats
}

/// Sub-steps one body from impact to impact until its time budget is spent.
///
/// Returns true when `max_sub_steps` impacts were resolved with time still left;
/// that leftover travel is dropped for this tick.
#[allow(clippy::too_many_arguments)]
fn advance_continuous<S: EventSink + ?Sized>(
    idx: usize,
    body: &mut Body,
    dt: f64,
    obstacles: &[Obstacle],
    bounds: &AABB,
    restitution: f64,
    max_sub_steps: u32,
    stats: &mut StepStats,
    sink: &mut S,
) -> bool {
    let mut remaining = dt;
    let mut iterations = 0u32;

    while remaining > TIME_EPSILON && iterations < max_sub_steps {
        let Some(event) = earliest_collision(body.position, body.velocity, body.radius, remaining, obstacles, bounds) else {
            body.advance(remaining);
            remaining = 0.0;
            break;
        };

        body.advance(event.time);
        remaining -= event.time;
        body.bounce(event.normal, restitution);

        trace!(
            body = idx,
            time = event.time,
            obstacle = ?event.obstacle,
            "impact resolved"
        );
        stats.collisions_this_tick += 1;
        sink.on_collision(idx, &event);
        iterations += 1;
    }

    if remaining > TIME_EPSILON {
        debug!(body = idx, remaining, max_sub_steps, "sub-step budget exhausted, dropping leftover travel");
        return true;
    }
    false
}

/// Moves one body the full step, then pushes it out of whatever it ended up inside.
///
/// Tunnels are only counted, never corrected.
#[allow(clippy::too_many_arguments)]
fn advance_discrete<S: EventSink + ?Sized>(
    idx: usize,
    body: &mut Body,
    dt: f64,
    obstacles: &[Obstacle],
    bounds: &AABB,
    restitution: f64,
    overlapped: &mut [bool],
    stats: &mut StepStats,
    sink: &mut S,
) {
    body.advance(dt);

    for (i, obstacle) in obstacles.iter().enumerate() {
        overlapped[i] = false;
        if let Some(contact) = circle_rect_contact(body.position, body.radius, obstacle.rect()) {
            overlapped[i] = true;
            resolve_contact(body, &contact, restitution);
            let event = CollisionEvent {
                time: dt,
                normal: contact.normal,
                obstacle: Some(ObstacleId(i)),
            };
            stats.collisions_this_tick += 1;
            sink.on_collision(idx, &event);
        }
    }

    // Any swept crossing without an end-of-step overlap counts, even a graze that bounced fine.
    for (i, obstacle) in obstacles.iter().enumerate() {
        if !overlapped[i] && segment_crosses_rect(body.prev_position, body.position, obstacle.rect()) {
            trace!(body = idx, obstacle = i, "tunnelled through obstacle");
            stats.tunnels_this_tick += 1;
            sink.on_tunnel(idx, ObstacleId(i));
        }
    }

    for contact in boundary_contacts(body.position, body.radius, bounds) {
        resolve_contact(body, &contact, restitution);
        let event = CollisionEvent {
            time: dt,
            normal: contact.normal,
            obstacle: None,
        };
        stats.collisions_this_tick += 1;
        sink.on_collision(idx, &event);
    }
}

/// Pushes the body out along the contact normal and reflects it if it is still moving inward.
fn resolve_contact(body: &mut Body, contact: &DiscreteContact, restitution: f64) {
    body.position += contact.normal * contact.depth;
    if body.velocity.dot(contact.normal) < 0.0 {
        body.bounce(contact.normal, restitution);
    } else {
        body.bounce_count = body.bounce_count.saturating_add(1);
    }
}
