//! Collision counters and the event sink seam.

use crate::collision::event::{CollisionEvent, ObstacleId};

/// Counts produced by a single [`step`](crate::integration::step) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStats {
    pub collisions_this_tick: u32,
    pub tunnels_this_tick: u32,
    /// Bodies that ran out of sub-steps with travel time left over; the leftover was dropped.
    pub budget_exhausted: u32,
}

impl StepStats {
    pub fn is_empty(&self) -> bool {
        *self == StepStats::default()
    }
}

/// Cumulative totals across steps. Only cleared by an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimStats {
    pub collision_count: u64,
    pub tunnel_count: u64,
}

impl SimStats {
    pub fn record(&mut self, step: &StepStats) {
        self.collision_count += u64::from(step.collisions_this_tick);
        self.tunnel_count += u64::from(step.tunnels_this_tick);
    }

    pub fn reset(&mut self) {
        *self = SimStats::default();
    }
}

/// An impact together with the index of the body that made it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyCollision {
    pub body: usize,
    pub event: CollisionEvent,
}

/// Receives every impact and tunnel as the integrator finds them.
pub trait EventSink {
    fn on_collision(&mut self, body: usize, event: &CollisionEvent);

    fn on_tunnel(&mut self, _body: usize, _obstacle: ObstacleId) {}
}

/// Discards everything.
impl EventSink for () {
    fn on_collision(&mut self, _body: usize, _event: &CollisionEvent) {}
}

impl EventSink for Vec<BodyCollision> {
    fn on_collision(&mut self, body: usize, event: &CollisionEvent) {
        self.push(BodyCollision { body, event: *event });
    }
}
