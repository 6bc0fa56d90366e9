//! Fixed timestep simulation tick
//!
//! One tick runs four phases in a fixed order:
//!
//! 1. Move: every collider advances by its velocity (polygon caches
//!    re-solved internally).
//! 2. Reflect: any collider straddling an arena wall inverts its velocity.
//!    No position clamping; a fast shape may briefly leave the arena, and
//!    tunneling between ticks is possible by design.
//! 3. Collide: every unordered pair of live colliders is tested once against
//!    this tick's snapshot; a hit inverts both velocities and deals one point
//!    of damage to each.
//! 4. Cull: colliders with health <= 0 are removed.
//!
//! Reordering the phases changes reflection and scoring semantics.

use log::{debug, trace};

use super::state::SimState;

/// What happened during one tick, for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Colliders that reflected off a wall
    pub reflections: u32,
    /// Pairwise collision events resolved
    pub collisions: u32,
    /// Colliders removed after their health ran out
    pub culled: u32,
}

/// Advance the simulation by one fixed step
pub fn tick(state: &mut SimState) -> TickReport {
    let mut report = TickReport::default();
    state.time_ticks += 1;

    // 1. Move
    for collider in &mut state.colliders {
        collider.advance();
    }

    // 2. Reflect off arena bounds
    let top_left = state.arena.top_left();
    let bottom_right = state.arena.bottom_right();
    for collider in &mut state.colliders {
        if collider.check_bounds_collision(top_left, bottom_right) {
            collider.invert_velocity();
            report.reflections += 1;
        }
    }

    // 3. Pairwise collisions, evaluated against this tick's snapshot.
    // Geometry does not change during this phase, so collecting hits first
    // and mutating after is equivalent to mutating in place; each unordered
    // pair registers at most one event.
    let count = state.colliders.len();
    let mut hits = Vec::new();
    for i in 0..count {
        for j in (i + 1)..count {
            if state.colliders[i].check_collision(&state.colliders[j]) {
                hits.push((i, j));
            }
        }
    }
    for (i, j) in hits {
        trace!(
            "collision between #{} and #{}",
            state.colliders[i].id, state.colliders[j].id
        );
        state.colliders[i].invert_velocity();
        state.colliders[i].deal_damage();
        state.colliders[j].invert_velocity();
        state.colliders[j].deal_damage();
        report.collisions += 1;
    }

    // 4. Cull the depleted
    let before = state.colliders.len();
    state.colliders.retain(|c| c.is_alive());
    report.culled = (before - state.colliders.len()) as u32;
    if report.culled > 0 {
        debug!(
            "tick {}: culled {} colliders, {} remain",
            state.time_ticks,
            report.culled,
            state.colliders.len()
        );
    }

    report
}
