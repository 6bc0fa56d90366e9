//! Simulation state: the arena, the live collider set, and seeded spawn
//!
//! The state is an explicit struct handed to `tick` by the caller; there are
//! no module-level globals. Everything is serializable so a run can be
//! snapshotted and replayed deterministically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collider::Collider;
use super::shape::{Circle, Hexagon, Shape, ShapeKind, Triangle};
use crate::settings::{SetupError, SimConfig};

/// Spawn order for the shape kinds; fixed so a seed always produces the
/// same population.
const SPAWN_ORDER: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Hexagon, ShapeKind::Triangle];

/// The rectangular arena, as two corner points in shape-center space
///
/// y grows upward: `top_left` is `(min_x, max_y)`, `bottom_right` is
/// `(max_x, min_y)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    top_left: Vec2,
    bottom_right: Vec2,
}

impl Arena {
    pub fn new(top_left: Vec2, bottom_right: Vec2) -> Result<Self, SetupError> {
        let finite = top_left.is_finite() && bottom_right.is_finite();
        if !finite || top_left.x >= bottom_right.x || bottom_right.y >= top_left.y {
            return Err(SetupError::DegenerateArena(
                top_left.x,
                top_left.y,
                bottom_right.x,
                bottom_right.y,
            ));
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        self.top_left
    }

    #[inline]
    pub fn bottom_right(&self) -> Vec2 {
        self.bottom_right
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.bottom_right.x - self.top_left.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.top_left.y - self.bottom_right.y
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Arena bounds used for reflection
    pub arena: Arena,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Live colliders, in spawn order (stable IDs for deterministic
    /// iteration)
    pub colliders: Vec<Collider>,
}

impl SimState {
    /// Build a state with a randomized population per the config.
    ///
    /// For each shape kind, `count_per_kind` colliders are placed uniformly
    /// inside the arena inset by `spawn_margin`, with sizes and velocity
    /// components drawn from the configured ranges.
    pub fn new(config: &SimConfig) -> Result<Self, SetupError> {
        config.validate()?;

        let arena = Arena::new(
            Vec2::new(0.0, config.arena_height),
            Vec2::new(config.arena_width, 0.0),
        )?;

        let mut rng = Pcg32::seed_from_u64(config.seed);
        let mut colliders =
            Vec::with_capacity(SPAWN_ORDER.len() * config.count_per_kind as usize);
        let mut next_id = 0u32;

        for kind in SPAWN_ORDER {
            for _ in 0..config.count_per_kind {
                let center = Vec2::new(
                    rng.random_range(config.spawn_margin..config.arena_width - config.spawn_margin),
                    rng.random_range(
                        config.spawn_margin..config.arena_height - config.spawn_margin,
                    ),
                );
                let size = rng.random_range(config.min_size..config.max_size);
                let velocity = Vec2::new(
                    rng.random_range(-config.max_speed..config.max_speed),
                    rng.random_range(-config.max_speed..config.max_speed),
                );

                let shape = match kind {
                    ShapeKind::Circle => Shape::Circle(Circle::new(center, size)?),
                    ShapeKind::Hexagon => Shape::Hexagon(Hexagon::new(center, size)?),
                    ShapeKind::Triangle => Shape::Triangle(Triangle::new(center, size)?),
                };

                colliders.push(Collider::new(next_id, shape, velocity));
                next_id += 1;
            }
        }

        Ok(Self {
            seed: config.seed,
            arena,
            time_ticks: 0,
            colliders,
        })
    }

    /// Build a state from an explicit collider set (tests, embedding)
    pub fn with_colliders(arena: Arena, colliders: Vec<Collider>) -> Self {
        Self {
            seed: 0,
            arena,
            time_ticks: 0,
            colliders,
        }
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.colliders.len()
    }

    /// Live colliders per shape kind, in `[circle, triangle, hexagon]` order
    pub fn kind_census(&self) -> [usize; 3] {
        let mut census = [0usize; 3];
        for collider in &self.colliders {
            match collider.shape().kind() {
                ShapeKind::Circle => census[0] += 1,
                ShapeKind::Triangle => census[1] += 1,
                ShapeKind::Hexagon => census[2] += 1,
            }
        }
        census
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_rejects_degenerate_corners() {
        assert!(Arena::new(Vec2::new(0.0, 100.0), Vec2::new(200.0, 0.0)).is_ok());
        // Zero width
        assert!(Arena::new(Vec2::new(50.0, 100.0), Vec2::new(50.0, 0.0)).is_err());
        // Inverted height
        assert!(Arena::new(Vec2::new(0.0, 0.0), Vec2::new(200.0, 100.0)).is_err());
        // Non-finite corner
        assert!(Arena::new(Vec2::new(0.0, f32::NAN), Vec2::new(200.0, 0.0)).is_err());
    }

    #[test]
    fn spawn_produces_configured_population() {
        let config = SimConfig {
            count_per_kind: 10,
            seed: 42,
            ..Default::default()
        };
        let state = SimState::new(&config).unwrap();

        assert_eq!(state.live_count(), 30);
        assert_eq!(state.kind_census(), [10, 10, 10]);
        assert_eq!(state.time_ticks, 0);

        // Every spawn sits inside the margin, clear of the walls.
        for collider in &state.colliders {
            let c = collider.shape().center();
            assert!(c.x >= config.spawn_margin && c.x <= config.arena_width - config.spawn_margin);
            assert!(c.y >= config.spawn_margin && c.y <= config.arena_height - config.spawn_margin);
            assert_eq!(collider.health(), 3);
        }
    }

    #[test]
    fn spawn_is_deterministic_per_seed() {
        let config = SimConfig {
            count_per_kind: 25,
            seed: 7,
            ..Default::default()
        };
        let a = SimState::new(&config).unwrap();
        let b = SimState::new(&config).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );

        // A different seed produces a different population.
        let other = SimState::new(&SimConfig {
            seed: 8,
            ..config
        })
        .unwrap();
        assert_ne!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&other).unwrap()
        );
    }

    #[test]
    fn spawn_rejects_invalid_config() {
        let config = SimConfig {
            max_speed: 0.0,
            ..Default::default()
        };
        assert!(SimState::new(&config).is_err());
    }
}
