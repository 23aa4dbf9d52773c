//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only (pickup placement)
//! - Stable iteration order (pickups by id, segments by chain position)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod geometry;
pub mod merge;
pub mod motion;
pub mod pickups;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod value;

pub use collision::{circles_overlap, detect_consumed};
pub use merge::{MergeOutcome, resolve};
pub use motion::{MotionParams, advance_chain, advance_head};
pub use pickups::{FieldSpec, Pickup, PickupField};
pub use snapshot::{CircleView, HudStats, Snapshot};
pub use state::{Head, Segment, SimEvent, SimState};
pub use tick::{TickInput, tick};
pub use value::{Color, Value, color_for_value, pickup_color};
