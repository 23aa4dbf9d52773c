//! Snake 2048 - a trailing snake whose body merges like 2048 tiles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, pickups, merging, camera)
//! - `session`: Fixed-cadence tick driver that owns the simulation
//! - `tuning`: Data-driven game balance

pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Simulation cadence (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum ticks run per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host frame delta accepted before clamping (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.25;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 3000.0;
    pub const WORLD_HEIGHT: f32 = 2000.0;

    /// Viewport used until the host reports its real size
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;

    /// Head spawn point and starting value
    pub const HEAD_START_X: f32 = 400.0;
    pub const HEAD_START_Y: f32 = 300.0;
    pub const HEAD_START_VALUE: u64 = 2;

    /// Head distance covered per tick
    pub const HEAD_SPEED: f32 = 5.0;
    /// Head ignores targets closer than this (prevents jitter)
    pub const HEAD_DEADZONE: f32 = 5.0;

    /// Desired gap between consecutive chain links
    pub const SEGMENT_SPACING: f32 = 35.0;
    /// Maximum distance a segment moves per tick
    pub const SEGMENT_MAX_STEP: f32 = 8.0;

    /// Pickup field
    pub const PICKUP_COUNT: usize = 50;
    pub const PICKUP_RADIUS: f32 = 15.0;
    /// Keep pickups this far from the world edge
    pub const PICKUP_MARGIN: f32 = 20.0;
    pub const PICKUP_VALUES: [u64; 3] = [2, 4, 8];

    /// Display radius caps
    pub const HEAD_MAX_RADIUS: f32 = 25.0;
    pub const SEGMENT_MAX_RADIUS: f32 = 30.0;
}
