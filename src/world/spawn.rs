//! Launching groups of bodies, the way the toys "fire" a volley.

use std::ops::Range;

use rand::Rng;

use crate::error::{SimError, SimResult};
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::world::World;

/// Describes one volley of identical bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireParams {
    pub count: u32,
    pub origin: Vec2,
    /// Aim direction in radians, counter-clockwise from +x.
    pub angle: f64,
    /// Total width of the aiming cone in radians. Each body gets a uniform offset within it.
    pub spread: f64,
    /// Launch speed before `speed_scale` is applied, in units per tick.
    pub speed: f64,
    pub radius: f64,
}

impl Default for FireParams {
    fn default() -> Self {
        FireParams {
            count: 1,
            origin: Vec2::ZERO,
            angle: 0.0,
            spread: 0.0,
            speed: 10.0,
            radius: 5.0,
        }
    }
}

impl FireParams {
    /// Largest volley a single call may add.
    pub const MAX_COUNT: u32 = 10_000;

    pub fn validate(&self) -> SimResult<()> {
        if self.count > Self::MAX_COUNT {
            return Err(SimError::InvalidFireParams(format!(
                "count {} exceeds the limit of {}",
                self.count,
                Self::MAX_COUNT
            )));
        }
        if !self.origin.is_finite() {
            return Err(SimError::NonFinite("fire origin"));
        }
        if !self.angle.is_finite() || !self.spread.is_finite() || self.spread < 0.0 {
            return Err(SimError::InvalidFireParams(format!(
                "angle {} / spread {} must be finite, spread >= 0",
                self.angle, self.spread
            )));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(SimError::InvalidFireParams(format!("speed {} must be finite and >= 0", self.speed)));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SimError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

/// Adds `params.count` bodies to `world` and returns the range of their indices.
///
/// Speed is multiplied by `speed_scale` at launch; bodies already in flight are
/// unaffected. Nothing is added if any parameter is invalid. A seeded `rng`
/// makes volleys reproducible.
pub fn fire_bodies<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    params: &FireParams,
    speed_scale: f64,
) -> SimResult<Range<usize>> {
    params.validate()?;
    crate::common::config::validate_speed_scale(speed_scale)?;

    let speed = params.speed * speed_scale;
    let half_spread = params.spread * 0.5;

    let mut volley = Vec::with_capacity(params.count as usize);
    for _ in 0..params.count {
        let offset = if half_spread > 0.0 {
            rng.gen_range(-half_spread..=half_spread)
        } else {
            0.0
        };
        let velocity = Vec2::from_angle(params.angle + offset) * speed;
        volley.push(Body::new(params.origin, velocity, params.radius)?);
    }

    let start = world.bodies.len();
    world.bodies.extend(volley);
    Ok(start..world.bodies.len())
}
