//! Fixed timestep simulation tick
//!
//! One call advances the world by one step:
//! motion -> collision -> merge -> commit -> camera.
//! Nothing outside `tick` mutates the state, so observers between ticks
//! always see a fully applied step.

use glam::Vec2;

use super::camera;
use super::collision::detect_consumed;
use super::geometry::clamp_to_bounds;
use super::merge::resolve;
use super::motion::{advance_chain, advance_head};
use super::state::{SimEvent, SimState};

/// Host input captured since the last tick (last write wins)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer target in world coordinates; `None` keeps the previous target
    pub target: Option<Vec2>,
    /// Viewport size; `None` keeps the previous size
    pub viewport: Option<Vec2>,
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimState, input: &TickInput) {
    state.events.clear();

    if let Some(target) = input.target {
        state.target = target;
    }
    if let Some(viewport) = input.viewport {
        state.viewport = viewport;
    }

    state.time_ticks += 1;

    // Motion
    let params = state.tuning.motion();
    state.head.pos = advance_head(
        state.head.pos,
        state.head.radius,
        state.target,
        &params,
        state.world,
    );
    if !state.segments.is_empty() {
        state.segments = advance_chain(state.head.pos, &state.segments, &params);
    }

    // Collision: every hit is processed in ascending id order
    let hits = detect_consumed(state.head.pos, state.head.radius, &state.pickups);
    let mut eaten = Vec::with_capacity(hits.len());
    for id in hits {
        let Some(value) = state.pickups.consume(id) else {
            continue;
        };
        eaten.push(id);
        state.score += value.get();

        let before = state.head.value;
        let outcome = resolve(&state.segments, value, before, state.head.pos);
        state.segments = outcome.segments;
        state.head.value = outcome.head_value;

        log::debug!(
            "tick {}: ate pickup {} ({}), head {} -> {}, {} segments, {} merges",
            state.time_ticks,
            id,
            value,
            before,
            outcome.head_value,
            state.segments.len(),
            outcome.merges
        );

        state.events.push(SimEvent::PickupConsumed { id, value });
        if outcome.merges > 0 {
            state.events.push(SimEvent::Merged { count: outcome.merges });
        }
        if outcome.head_value != before {
            state.events.push(SimEvent::HeadUpgraded {
                from: before,
                to: outcome.head_value,
            });
        }
    }
    state.pickups.remove(&eaten);

    // Derived display attributes, once per tick
    state.head.refresh_display();
    // A merge can grow the head past a wall it was pressed against
    state.head.pos = clamp_to_bounds(state.head.pos, state.head.radius, state.world);

    state.camera = camera::clamp(state.head.pos, state.viewport, state.world);

    log::trace!(
        "tick {}: head=({:.1}, {:.1}) camera=({:.1}, {:.1})",
        state.time_ticks,
        state.head.pos.x,
        state.head.pos.y,
        state.camera.x,
        state.camera.y
    );
}
