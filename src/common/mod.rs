pub mod config;

pub use config::{SimConfig, SimMode};
