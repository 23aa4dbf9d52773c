//! Simulation state and core entity types
//!
//! `SimState` is the single context object the tick pipeline mutates. Nothing
//! here is global; hosts own a `SimState` (usually through a `Session`).

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera;
use super::pickups::{FieldSpec, PickupField};
use super::value::{Color, Value, color_for_value, head_radius, segment_radius};
use crate::tuning::Tuning;

/// The player-controlled head of the snake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Head {
    pub pos: Vec2,
    pub value: Value,
    /// Derived from `value`, refreshed once per tick
    pub radius: f32,
    /// Derived from `value`, refreshed once per tick
    pub color: Color,
}

impl Head {
    pub fn new(pos: Vec2, value: Value) -> Self {
        Self {
            pos,
            value,
            radius: head_radius(value),
            color: color_for_value(value),
        }
    }

    /// Recompute radius and color from the current value
    pub fn refresh_display(&mut self) {
        self.radius = head_radius(self.value);
        self.color = color_for_value(self.value);
    }
}

/// One link of the trailing body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub pos: Vec2,
    pub value: Value,
    pub radius: f32,
    pub color: Color,
}

impl Segment {
    pub fn new(pos: Vec2, value: Value) -> Self {
        Self {
            pos,
            value,
            radius: segment_radius(value),
            color: color_for_value(value),
        }
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = value;
        self.radius = segment_radius(value);
        self.color = color_for_value(value);
    }
}

/// Things that happened during a tick, for audio/FX/HUD consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    PickupConsumed { id: u32, value: Value },
    /// Head value changed as a result of a merge or promotion
    HeadUpgraded { from: Value, to: Value },
    /// Doublings performed while absorbing one pickup
    Merged { count: u32 },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Seed the pickup field was generated from
    pub seed: u64,
    /// Balance parameters the world was built with
    pub tuning: Tuning,
    /// World bounds (width, height)
    pub world: Vec2,
    /// Last reported viewport size
    pub viewport: Vec2,
    /// Pointer target in world coordinates
    pub target: Vec2,
    pub head: Head,
    /// Nearest-to-head first
    pub segments: Vec<Segment>,
    pub pickups: PickupField,
    pub score: u64,
    /// Top-left of the visible rectangle, derived each tick
    pub camera: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<SimEvent>,
}

impl SimState {
    /// Build a fresh world from tuning. The pickup field comes from `seed`.
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let values = tuning.pickup_values();
        let mut rng = Pcg32::seed_from_u64(seed);
        let pickups = PickupField::generate(
            &mut rng,
            &FieldSpec {
                count: tuning.pickup_count,
                world: tuning.world_size(),
                radius: tuning.pickup_radius,
                margin: tuning.pickup_margin,
                values: &values,
            },
        );
        Self::with_pickups(seed, tuning, pickups)
    }

    /// Build a world around an explicit pickup field
    pub fn with_pickups(seed: u64, tuning: &Tuning, pickups: PickupField) -> Self {
        let world = tuning.world_size();
        let viewport = tuning.viewport_size();
        let start = tuning.start_pos();
        let head = Head::new(start, tuning.start_value());
        let camera = camera::clamp(head.pos, viewport, world);

        log::info!(
            "World {}x{} ready: seed={}, {} pickups",
            world.x,
            world.y,
            seed,
            pickups.remaining()
        );

        Self {
            seed,
            tuning: tuning.clone(),
            world,
            viewport,
            target: start,
            head,
            segments: Vec::new(),
            pickups,
            score: 0,
            camera,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Largest value anywhere on the snake
    pub fn highest_value(&self) -> Value {
        self.segments
            .iter()
            .map(|s| s.value)
            .fold(self.head.value, Value::max)
    }

    /// Sum of head and segment values
    pub fn total_value(&self) -> u128 {
        self.head.value.get() as u128
            + self
                .segments
                .iter()
                .map(|s| s.value.get() as u128)
                .sum::<u128>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = SimState::new(12345, &Tuning::default());
        assert_eq!(state.head.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.head.value, Value::TWO);
        assert_eq!(state.head.radius, 21.0);
        assert!(state.segments.is_empty());
        assert_eq!(state.pickups.remaining(), 50);
        assert_eq!(state.score, 0);
        assert_eq!(state.target, state.head.pos);
        // 400 - 800/2 = 0, 300 - 600/2 = 0
        assert_eq!(state.camera, Vec2::ZERO);
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = SimState::new(7, &Tuning::default());
        let b = SimState::new(7, &Tuning::default());
        assert_eq!(a.pickups.pickups(), b.pickups.pickups());
    }

    #[test]
    fn test_segment_set_value_refreshes_display() {
        let mut seg = Segment::new(Vec2::ZERO, Value::TWO);
        seg.set_value(Value::new(16).unwrap());
        assert_eq!(seg.radius, segment_radius(Value::new(16).unwrap()));
        assert_eq!(seg.color, Color(0x8b5cf6));
    }

    #[test]
    fn test_highest_value() {
        let mut state = SimState::new(1, &Tuning::default());
        state.segments.push(Segment::new(Vec2::ZERO, Value::new(64).unwrap()));
        assert_eq!(state.highest_value().get(), 64);
        assert_eq!(state.total_value(), 66);
    }

    #[test]
    fn test_state_serializes() {
        let state = SimState::new(3, &Tuning::default());
        let json = serde_json::to_string(&state).unwrap();
        let back: SimState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.head, state.head);
        assert_eq!(back.pickups.pickups(), state.pickups.pickups());
    }
}
