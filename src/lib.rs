//! Shape Arena - rigid 2D shapes battling inside a rectangular arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shape geometry, collision dispatch, tick loop)
//! - `settings`: Arena and spawn configuration
//!
//! Rendering, frame scheduling, and input handling live outside this crate.
//! The sim exposes shape geometry and health tiers for a renderer to consume,
//! and a single `sim::tick` entry point for a frame loop to drive.

pub mod settings;
pub mod sim;

pub use settings::{SetupError, SimConfig};

/// Simulation configuration constants
pub mod consts {
    /// Arena dimensions for the default headless run
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 800.0;

    /// Spawn inset from the arena walls
    pub const SPAWN_MARGIN: f32 = 70.0;

    /// Colliders spawned per shape kind
    pub const COUNT_PER_KIND: u32 = 75;

    /// Shape size parameter range (radius / circumradius)
    pub const MIN_SIZE: f32 = 5.0;
    pub const MAX_SIZE: f32 = 15.0;

    /// Velocity component magnitude cap (units per tick)
    pub const MAX_SPEED: f32 = 2.0;

    /// Starting health for every collider
    pub const START_HEALTH: i32 = 3;
}
