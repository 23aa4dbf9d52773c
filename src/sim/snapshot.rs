//! Read-only view of the simulation for renderers and HUDs

use glam::Vec2;
use serde::Serialize;

use super::state::SimState;
use super::value::{Color, Value};

/// A drawable circle with its value label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleView {
    pub pos: Vec2,
    pub radius: f32,
    pub value: Value,
    pub color: Color,
}

/// HUD counters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HudStats {
    pub segments: usize,
    pub highest_value: Value,
    pub pickups_remaining: usize,
    pub tick: u64,
}

/// Everything a renderer needs for one frame, copied out of the state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub head: CircleView,
    /// Nearest-to-head first
    pub segments: Vec<CircleView>,
    pub pickups: Vec<CircleView>,
    pub camera: Vec2,
    pub viewport: Vec2,
    pub world: Vec2,
    /// Pointer target, for the cursor indicator
    pub target: Vec2,
    pub score: u64,
    pub hud: HudStats,
}

impl Snapshot {
    pub fn capture(state: &SimState) -> Self {
        let head = CircleView {
            pos: state.head.pos,
            radius: state.head.radius,
            value: state.head.value,
            color: state.head.color,
        };
        let segments = state
            .segments
            .iter()
            .map(|s| CircleView {
                pos: s.pos,
                radius: s.radius,
                value: s.value,
                color: s.color,
            })
            .collect();
        let pickups = state
            .pickups
            .pickups()
            .iter()
            .map(|p| CircleView {
                pos: p.pos,
                radius: p.radius,
                value: p.value,
                color: p.color,
            })
            .collect();

        Self {
            head,
            segments,
            pickups,
            camera: state.camera,
            viewport: state.viewport,
            world: state.world,
            target: state.target,
            score: state.score,
            hud: HudStats {
                segments: state.segments.len(),
                highest_value: state.highest_value(),
                pickups_remaining: state.pickups.remaining(),
                tick: state.time_ticks,
            },
        }
    }

    /// Circles that intersect the visible rectangle, in draw order:
    /// pickups, then segments from tail to head, then the head on top.
    pub fn visible(&self) -> impl Iterator<Item = &CircleView> {
        let min = self.camera;
        let max = self.camera + self.viewport;
        self.pickups
            .iter()
            .chain(self.segments.iter().rev())
            .chain(std::iter::once(&self.head))
            .filter(move |c| {
                c.pos.x + c.radius >= min.x
                    && c.pos.x - c.radius <= max.x
                    && c.pos.y + c.radius >= min.y
                    && c.pos.y - c.radius <= max.y
            })
    }
}
