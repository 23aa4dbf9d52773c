//! Fixed-cadence session driver
//!
//! Owns the simulation and turns host frame time into whole ticks. Pointer
//! and resize events can arrive at any time between frames; they are stored
//! as plain values and picked up by the next tick (last write wins).

use glam::Vec2;

use crate::consts::{MAX_FRAME_DELTA, MAX_SUBSTEPS};
use crate::sim::camera;
use crate::sim::{SimEvent, SimState, Snapshot, TickInput, tick};
use crate::tuning::Tuning;

/// A running game: the simulation plus its tick clock
#[derive(Debug)]
pub struct Session {
    state: SimState,
    input: TickInput,
    dt: f32,
    accumulator: f32,
    running: bool,
}

impl Session {
    pub fn new(tuning: &Tuning) -> Self {
        Self::from_state(SimState::new(tuning.seed, tuning))
    }

    /// Wrap an existing state (tests, replays)
    pub fn from_state(state: SimState) -> Self {
        let dt = state.tuning.tick_dt();
        log::info!("Session started at {} ticks/s", state.tuning.tick_rate);
        Self {
            state,
            input: TickInput::default(),
            dt,
            accumulator: 0.0,
            running: true,
        }
    }

    /// Pointer moved (world coordinates)
    pub fn set_pointer(&mut self, world: Vec2) {
        self.input.target = Some(world);
    }

    /// Pointer moved (viewport pixels); converted through the current camera
    pub fn set_pointer_screen(&mut self, screen: Vec2) {
        self.set_pointer(camera::screen_to_world(screen, self.state.camera));
    }

    /// Host viewport resized
    pub fn set_viewport(&mut self, size: Vec2) {
        self.input.viewport = Some(size);
    }

    /// Feed elapsed host time (seconds) and run any ticks that are due.
    ///
    /// Returns the number of ticks run. Frame deltas are clamped and at most
    /// `MAX_SUBSTEPS` ticks run per call so a stalled host cannot trigger a
    /// burst of catch-up work.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if !self.running {
            return 0;
        }
        let elapsed = if elapsed.is_finite() { elapsed } else { 0.0 };
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_DELTA);

        let mut ticks = 0;
        while self.accumulator >= self.dt && ticks < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= self.dt;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS && self.accumulator >= self.dt {
            log::debug!("Dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        ticks
    }

    /// Run exactly one tick regardless of elapsed time
    pub fn step(&mut self) {
        if !self.running {
            return;
        }
        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input);
    }

    /// Stop ticking. Further `advance`/`step` calls do nothing.
    pub fn shutdown(&mut self) {
        if self.running {
            self.running = false;
            self.accumulator = 0.0;
            log::info!(
                "Session stopped after {} ticks, score {}",
                self.state.time_ticks,
                self.state.score
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Read-only view of the simulation
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &[SimEvent] {
        &self.state.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Fixed tick length in seconds
    pub fn tick_dt(&self) -> f32 {
        self.dt
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}
