//! Frame driver: queued UI commands are applied once per tick, right before stepping.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::common::config::{validate_restitution, validate_speed_scale, validate_sub_steps, SimConfig, SimMode};
use crate::error::SimResult;
use crate::integration::stats::StepStats;
use crate::world::spawn::{fire_bodies, FireParams};
use crate::world::World;

/// A request from the outside (sliders, buttons) to change the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// New launch speed multiplier; only bodies fired afterwards are affected.
    SetSpeed(f64),
    SetMode(SimMode),
    SetRestitution(f64),
    SetMaxSubSteps(u32),
    Fire(FireParams),
    /// Removes all bodies and zeroes the cumulative counters. Obstacles stay.
    Reset,
}

impl Command {
    fn validate(&self) -> SimResult<()> {
        match self {
            Command::SetSpeed(scale) => validate_speed_scale(*scale),
            Command::SetRestitution(restitution) => validate_restitution(*restitution),
            Command::SetMaxSubSteps(steps) => validate_sub_steps(*steps),
            Command::Fire(params) => params.validate(),
            Command::SetMode(_) | Command::Reset => Ok(()),
        }
    }
}

/// Owns a [`World`], its configuration and a seeded RNG for firing bodies.
#[derive(Debug)]
pub struct Simulation {
    world: World,
    config: SimConfig,
    commands: VecDeque<Command>,
    rng: StdRng,
}

impl Simulation {
    pub fn new(world: World, config: SimConfig, seed: u64) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            world,
            config,
            commands: VecDeque::new(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Queues a command for the next tick. Invalid commands are rejected here and never queued.
    pub fn push_command(&mut self, command: Command) -> SimResult<()> {
        if let Err(err) = command.validate() {
            warn!(?command, %err, "rejected command");
            return Err(err);
        }
        self.commands.push_back(command);
        Ok(())
    }

    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    /// Applies queued commands in order, then advances the world by `dt`.
    pub fn tick(&mut self, dt: f64) -> StepStats {
        while let Some(command) = self.commands.pop_front() {
            self.apply(command);
        }
        self.world.step(dt, &self.config)
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::SetSpeed(scale) => self.config.speed_scale = scale,
            Command::SetMode(mode) => self.config.mode = mode,
            Command::SetRestitution(restitution) => self.config.restitution = restitution,
            Command::SetMaxSubSteps(steps) => self.config.max_sub_steps = steps,
            Command::Fire(params) => {
                match fire_bodies(&mut self.world, &mut self.rng, &params, self.config.speed_scale) {
                    Ok(range) => debug!(fired = range.len(), "fired bodies"),
                    Err(err) => warn!(%err, "fire command failed"),
                }
            }
            Command::Reset => {
                self.world.clear_bodies();
                self.world.reset_stats();
            }
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Swaps in a freshly built world, e.g. after the viewport was resized.
    /// Queued commands and the RNG state carry over.
    pub fn replace_world(&mut self, world: World) -> World {
        std::mem::replace(&mut self.world, world)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
