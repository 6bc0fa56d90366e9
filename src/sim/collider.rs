//! Collider: a shape paired with a velocity and a health counter
//!
//! Collision dispatch lives here. It pattern-matches the concrete shape-kind
//! pair exhaustively, so the shape set stays closed and compile-checked.
//! Two of the pair tests are deliberate approximations carried over from the
//! arena's observable behavior:
//!
//! - Circle vs polygon uses "polygon contains the circle center, or every
//!   signed edge distance is within the radius". That detects interior and
//!   near-vertex approach but is not an exact circle-vs-convex-polygon test
//!   (which would clamp to edge segments, not infinite lines).
//! - Polygon vs polygon uses vertex containment either way, which misses
//!   deep edge-crossing overlaps where no vertex penetrates.
//!
//! Both stay as specified; "fixing" them changes observable collisions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shape::{Circle, Relation, Shape};
use crate::consts::START_HEALTH;

/// Display tier for the rendering collaborator, derived from health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthTier {
    /// Untouched (health 3)
    Full,
    /// One hit taken (health 2)
    Worn,
    /// One hit from removal (health 1)
    Critical,
}

/// A simulated body: exclusive owner of its shape and velocity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collider {
    pub id: u32,
    shape: Shape,
    velocity: Vec2,
    health: i32,
}

impl Collider {
    pub fn new(id: u32, shape: Shape, velocity: Vec2) -> Self {
        Self {
            id,
            shape,
            velocity,
            health: START_HEALTH,
        }
    }

    /// Read surface for rendering: current geometry
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Display tier for color selection; `None` once depleted
    pub fn tier(&self) -> Option<HealthTier> {
        match self.health {
            3 => Some(HealthTier::Full),
            2 => Some(HealthTier::Worn),
            1 => Some(HealthTier::Critical),
            _ => None,
        }
    }

    /// Advance the shape by one tick's worth of velocity
    pub fn advance(&mut self) {
        let delta = self.velocity;
        self.shape.translate(delta);
    }

    pub fn invert_velocity(&mut self) {
        self.velocity = -self.velocity;
    }

    /// One point of damage. Removal is the tick loop's job; health is not
    /// clamped here.
    pub fn deal_damage(&mut self) {
        self.health -= 1;
    }

    /// Symmetric pairwise collision test, dispatched on the shape-kind pair
    pub fn check_collision(&self, other: &Collider) -> bool {
        use Shape::{Circle, Hexagon, Triangle};

        match (&self.shape, &other.shape) {
            (Circle(a), Circle(b)) => {
                a.center().distance(b.center()) <= a.radius() + b.radius()
            }
            (Circle(circle), polygon @ (Triangle(_) | Hexagon(_)))
            | (polygon @ (Triangle(_) | Hexagon(_)), Circle(circle)) => {
                polygon.contains(circle.center()) || reaches_every_edge(polygon, circle)
            }
            (a @ (Triangle(_) | Hexagon(_)), b @ (Triangle(_) | Hexagon(_))) => {
                a.vertices().iter().any(|&v| b.contains(v))
                    || b.vertices().iter().any(|&v| a.contains(v))
            }
        }
    }

    /// True iff the shape's extent straddles any of the four arena boundary
    /// lines. The trigger for velocity inversion.
    pub fn check_bounds_collision(&self, top_left: Vec2, bottom_right: Vec2) -> bool {
        [
            self.shape.relative_to_horizontal(top_left.y),
            self.shape.relative_to_horizontal(bottom_right.y),
            self.shape.relative_to_vertical(top_left.x),
            self.shape.relative_to_vertical(bottom_right.x),
        ]
        .contains(&Relation::Between)
    }
}

/// The circle-vs-polygon edge heuristic: the circle reaches past every edge
/// line at once. A circle operand here would violate the closed dispatch
/// invariant.
fn reaches_every_edge(polygon: &Shape, circle: &Circle) -> bool {
    let center = circle.center();
    let radius = circle.radius();
    match polygon {
        Shape::Triangle(t) => t.distance_to_edges(center).iter().all(|&d| d <= radius),
        Shape::Hexagon(h) => h.distance_to_edges(center).iter().all(|&d| d <= radius),
        Shape::Circle(_) => unreachable!("edge distances are defined for polygons only"),
    }
}
