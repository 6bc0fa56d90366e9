//! Deterministic simulation module
//!
//! All arena logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only (spawn time; ticks themselves draw no randomness)
//! - Stable iteration order (spawn order, stable IDs)
//! - No rendering or platform dependencies

pub mod collider;
pub mod shape;
pub mod state;
pub mod tick;

pub use collider::{Collider, HealthTier};
pub use shape::{Circle, Hexagon, Relation, Shape, ShapeKind, Triangle};
pub use state::{Arena, SimState};
pub use tick::{TickReport, tick};
