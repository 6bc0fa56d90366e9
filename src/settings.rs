//! Simulation configuration
//!
//! Everything needed to reproduce a run: arena dimensions, spawn parameters,
//! and the RNG seed. Serializable so a run can be replayed from a config dump.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Construction-time validation failures.
///
/// The sim itself has no recoverable-error surface: all geometric operations
/// are total. Bad inputs are rejected up front instead.
#[derive(thiserror::Error, Debug)]
pub enum SetupError {
    /// Shape size parameter is not a finite non-negative number
    #[error("shape size must be finite and non-negative, got {0}")]
    InvalidShapeSize(f32),

    /// Arena corners do not describe a rectangle with positive area
    #[error("degenerate arena: top-left ({0}, {1}), bottom-right ({2}, {3})")]
    DegenerateArena(f32, f32, f32, f32),

    /// A configured numeric range is empty, inverted, or non-finite
    #[error("invalid {name} range: {lo}..{hi}")]
    InvalidRange {
        name: &'static str,
        lo: f32,
        hi: f32,
    },

    /// Spawn margin consumes the whole arena interior
    #[error("spawn margin {margin} leaves no interior in a {width}x{height} arena")]
    MarginTooLarge {
        margin: f32,
        width: f32,
        height: f32,
    },
}

/// Parameters for one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Arena width (x spans `0..arena_width`)
    pub arena_width: f32,
    /// Arena height (y spans `0..arena_height`)
    pub arena_height: f32,
    /// Spawn centers are inset from every wall by this much
    pub spawn_margin: f32,
    /// How many colliders of each shape kind to spawn
    pub count_per_kind: u32,
    /// Shape size parameter range
    pub min_size: f32,
    pub max_size: f32,
    /// Velocity components are drawn from `-max_speed..max_speed`
    pub max_speed: f32,
    /// RNG seed for reproducible spawns
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            spawn_margin: SPAWN_MARGIN,
            count_per_kind: COUNT_PER_KIND,
            min_size: MIN_SIZE,
            max_size: MAX_SIZE,
            max_speed: MAX_SPEED,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Reject configs that would produce degenerate geometry or empty
    /// sampling ranges.
    pub fn validate(&self) -> Result<(), SetupError> {
        if !(self.arena_width.is_finite() && self.arena_height.is_finite())
            || self.arena_width <= 0.0
            || self.arena_height <= 0.0
        {
            return Err(SetupError::DegenerateArena(
                0.0,
                self.arena_height,
                self.arena_width,
                0.0,
            ));
        }
        if !self.spawn_margin.is_finite() || self.spawn_margin < 0.0 {
            return Err(SetupError::InvalidRange {
                name: "spawn margin",
                lo: 0.0,
                hi: self.spawn_margin,
            });
        }
        if 2.0 * self.spawn_margin >= self.arena_width
            || 2.0 * self.spawn_margin >= self.arena_height
        {
            return Err(SetupError::MarginTooLarge {
                margin: self.spawn_margin,
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if !(self.min_size.is_finite() && self.max_size.is_finite())
            || self.min_size < 0.0
            || self.min_size >= self.max_size
        {
            return Err(SetupError::InvalidRange {
                name: "size",
                lo: self.min_size,
                hi: self.max_size,
            });
        }
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(SetupError::InvalidRange {
                name: "speed",
                lo: -self.max_speed,
                hi: self.max_speed,
            });
        }
        Ok(())
    }
}
