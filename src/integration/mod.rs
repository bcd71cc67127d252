pub mod integrator;
pub mod stats;

pub use integrator::{step, step_with_sink};
pub use stats::{BodyCollision, EventSink, SimStats, StepStats};
