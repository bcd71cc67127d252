pub mod physics_world;
pub mod simulation;
pub mod spawn;

pub use physics_world::World;
pub use simulation::{Command, Simulation};
pub use spawn::{fire_bodies, FireParams};
