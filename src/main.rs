//! Headless arena runner
//!
//! Spawns a seeded population and ticks the simulation until the arena is
//! down to at most one survivor or a tick cap is hit. A renderer would drive
//! `sim::tick` from its frame loop instead; this binary exists to exercise
//! the sim and to make runs reproducible from the command line.
//!
//! Usage: `shape-arena [seed] [max-ticks]`

use log::{debug, info, warn};

use shape_arena::settings::SimConfig;
use shape_arena::sim::{self, SimState};

const DEFAULT_MAX_TICKS: u64 = 100_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut config = SimConfig::default();
    if let Some(seed) = args.next() {
        match seed.parse() {
            Ok(seed) => config.seed = seed,
            Err(_) => {
                eprintln!("usage: shape-arena [seed] [max-ticks]");
                std::process::exit(2);
            }
        }
    }
    let max_ticks = match args.next() {
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("usage: shape-arena [seed] [max-ticks]");
                std::process::exit(2);
            }
        },
        None => DEFAULT_MAX_TICKS,
    };

    let mut state = match SimState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("setup failed: {err}");
            std::process::exit(1);
        }
    };

    let [circles, triangles, hexagons] = state.kind_census();
    info!(
        "seed {}: spawned {} colliders ({circles} circles, {triangles} triangles, {hexagons} hexagons) in a {}x{} arena",
        state.seed,
        state.live_count(),
        state.arena.width(),
        state.arena.height(),
    );

    let mut total_collisions: u64 = 0;
    while state.live_count() > 1 && state.time_ticks < max_ticks {
        let report = sim::tick(&mut state);
        total_collisions += u64::from(report.collisions);
        if report.culled > 0 {
            info!(
                "tick {}: {} collisions, {} culled, {} alive",
                state.time_ticks,
                report.collisions,
                report.culled,
                state.live_count()
            );
        }
    }

    let [circles, triangles, hexagons] = state.kind_census();
    info!(
        "finished after {} ticks: {} survivors ({circles} circles, {triangles} triangles, {hexagons} hexagons), {total_collisions} collisions total",
        state.time_ticks,
        state.live_count(),
    );

    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(&state) {
            Ok(json) => debug!("final state: {json}"),
            Err(err) => warn!("could not serialize final state: {err}"),
        }
    }
}
