//! Snake 2048 headless runner
//!
//! Drives a session with a scripted pointer tour of the world and prints the
//! final frame snapshot as JSON. Rendering hosts embed `Session` directly.
//!
//! Environment:
//! - `SNAKE2048_TUNING`: path to a tuning JSON file
//! - `SNAKE2048_TICKS`: number of ticks to run (default 3600)
//! - `RUST_LOG`: log filter (e.g. `snake_2048=debug`)

use glam::Vec2;

use snake_2048::sim::SimEvent;
use snake_2048::{Session, Tuning};

const DEFAULT_TICKS: u64 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Snake 2048 (headless) starting...");

    let tuning = match std::env::var("SNAKE2048_TUNING") {
        Ok(path) => Tuning::load(path),
        Err(_) => Tuning::default(),
    };
    let ticks = std::env::var("SNAKE2048_TICKS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TICKS);

    let world = tuning.world_size();
    let mut session = Session::new(&tuning);
    session.set_viewport(tuning.viewport_size());

    // Sweep the pointer around a shrinking rectangle so the head crosses most
    // of the field
    let tour = tour_points(world);
    let leg = (ticks / tour.len() as u64).max(1);
    let dt = session.tick_dt();

    for t in 0..ticks {
        if t % leg == 0 {
            let idx = ((t / leg) as usize).min(tour.len() - 1);
            session.set_pointer(tour[idx]);
        }
        if session.advance(dt) == 0 {
            continue;
        }
        for event in session.events() {
            if let SimEvent::HeadUpgraded { from, to } = event {
                log::info!("tick {}: head {} -> {}", session.state().time_ticks, from, to);
            }
        }
    }

    let snapshot = session.snapshot();
    session.shutdown();

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts embed `Session` from the library
}

fn tour_points(world: Vec2) -> Vec<Vec2> {
    let mut points = Vec::new();
    for ring in 0..4 {
        let inset = 100.0 + ring as f32 * 300.0;
        let lo = Vec2::splat(inset).min(world / 2.0);
        let hi = (world - Vec2::splat(inset)).max(world / 2.0);
        points.extend([
            Vec2::new(hi.x, lo.y),
            Vec2::new(hi.x, hi.y),
            Vec2::new(lo.x, hi.y),
            Vec2::new(lo.x, lo.y),
        ]);
    }
    points
}
