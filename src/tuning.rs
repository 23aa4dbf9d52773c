//! Data-driven game balance
//!
//! Defaults come from `crate::consts`; a JSON file can override any subset of
//! fields. Loading falls back to defaults on any problem so the game always
//! starts.

use std::error::Error;
use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::motion::MotionParams;
use crate::sim::value::Value;

/// Tunable parameters for one world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seed for pickup placement
    pub seed: u64,
    /// Ticks per second
    pub tick_rate: u32,

    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    /// Viewport assumed until the host reports one
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Head ===
    pub start_x: f32,
    pub start_y: f32,
    pub start_value: u64,
    pub head_speed: f32,
    pub head_deadzone: f32,

    // === Chain ===
    pub segment_spacing: f32,
    pub segment_max_step: f32,

    // === Pickups ===
    pub pickup_count: usize,
    pub pickup_radius: f32,
    pub pickup_margin: f32,
    pub pickup_values: Vec<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            seed: 0x5eed_2048,
            tick_rate: TICK_RATE,

            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,

            start_x: HEAD_START_X,
            start_y: HEAD_START_Y,
            start_value: HEAD_START_VALUE,
            head_speed: HEAD_SPEED,
            head_deadzone: HEAD_DEADZONE,

            segment_spacing: SEGMENT_SPACING,
            segment_max_step: SEGMENT_MAX_STEP,

            pickup_count: PICKUP_COUNT,
            pickup_radius: PICKUP_RADIUS,
            pickup_margin: PICKUP_MARGIN,
            pickup_values: PICKUP_VALUES.to_vec(),
        }
    }
}

/// Why a tuning file was rejected
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// A size or speed that must be positive was not
    NonPositive { field: &'static str, value: f32 },
    /// A distance that may be zero but not negative was
    Negative { field: &'static str, value: f32 },
    /// The world must be strictly larger than the default viewport
    WorldNotLargerThanViewport,
    NotPowerOfTwo { field: &'static str, value: u64 },
    NoPickupValues,
    /// Margins leave no room to place pickups
    MarginTooLarge { margin: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "failed to read tuning file: {e}"),
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {e}"),
            TuningError::NonPositive { field, value } => {
                write!(f, "{field} must be positive (got {value})")
            }
            TuningError::Negative { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            TuningError::WorldNotLargerThanViewport => {
                write!(f, "world must be larger than the viewport on both axes")
            }
            TuningError::NotPowerOfTwo { field, value } => {
                write!(f, "{field} must be a power of two (got {value})")
            }
            TuningError::NoPickupValues => write!(f, "pickup_values must not be empty"),
            TuningError::MarginTooLarge { margin } => {
                write!(f, "pickup_margin {margin} leaves no room inside the world")
            }
        }
    }
}

impl Error for TuningError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        TuningError::Parse(err)
    }
}

impl From<std::io::Error> for TuningError {
    fn from(err: std::io::Error) -> Self {
        TuningError::Io(err)
    }
}

impl Tuning {
    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and validate a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from a file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("head_speed", self.head_speed),
            ("segment_max_step", self.segment_max_step),
            ("pickup_radius", self.pickup_radius),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NonPositive { field, value });
            }
        }
        let non_negative = [
            ("head_deadzone", self.head_deadzone),
            ("segment_spacing", self.segment_spacing),
            ("pickup_margin", self.pickup_margin),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }
        if self.tick_rate == 0 {
            return Err(TuningError::NonPositive {
                field: "tick_rate",
                value: 0.0,
            });
        }
        if self.world_width <= self.viewport_width || self.world_height <= self.viewport_height {
            return Err(TuningError::WorldNotLargerThanViewport);
        }
        if !self.start_value.is_power_of_two() {
            return Err(TuningError::NotPowerOfTwo {
                field: "start_value",
                value: self.start_value,
            });
        }
        if self.pickup_values.is_empty() {
            return Err(TuningError::NoPickupValues);
        }
        if let Some(&bad) = self.pickup_values.iter().find(|v| !v.is_power_of_two()) {
            return Err(TuningError::NotPowerOfTwo {
                field: "pickup_values",
                value: bad,
            });
        }
        if self.pickup_margin * 2.0 >= self.world_width.min(self.world_height) {
            return Err(TuningError::MarginTooLarge {
                margin: self.pickup_margin,
            });
        }
        Ok(())
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }

    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    pub fn start_pos(&self) -> Vec2 {
        Vec2::new(self.start_x, self.start_y)
    }

    /// Starting head value; invalid values fall back to 2
    pub fn start_value(&self) -> Value {
        Value::new(self.start_value).unwrap_or(Value::TWO)
    }

    /// Pickup values, skipping anything that is not a power of two
    pub fn pickup_values(&self) -> Vec<Value> {
        self.pickup_values.iter().filter_map(|&v| Value::new(v)).collect()
    }

    pub fn motion(&self) -> MotionParams {
        MotionParams {
            speed: self.head_speed,
            deadzone: self.head_deadzone,
            spacing: self.segment_spacing,
            max_step: self.segment_max_step,
        }
    }

    /// Seconds per tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}
