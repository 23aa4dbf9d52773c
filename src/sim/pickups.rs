//! Pickup field: the value-bearing orbs scattered across the world
//!
//! Pickups are placed once at world creation and never respawn. Each one can
//! be consumed exactly once; the field remembers consumed ids for the whole
//! session so a duplicate detection can never be counted twice.

use std::collections::BTreeSet;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::value::{Color, Value, pickup_color};

/// A static consumable orb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub value: Value,
    pub color: Color,
}

impl Pickup {
    pub fn new(id: u32, pos: Vec2, radius: f32, value: Value) -> Self {
        Self {
            id,
            pos,
            radius,
            value,
            color: pickup_color(value),
        }
    }
}

/// Placement parameters for [`PickupField::generate`]
#[derive(Debug, Clone)]
pub struct FieldSpec<'a> {
    pub count: usize,
    pub world: Vec2,
    pub radius: f32,
    /// Minimum distance from the world edge
    pub margin: f32,
    /// Values drawn uniformly; must not be empty
    pub values: &'a [Value],
}

/// All live pickups plus the set of ids already consumed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickupField {
    /// Live pickups, sorted by id
    pickups: Vec<Pickup>,
    consumed: BTreeSet<u32>,
}

impl PickupField {
    /// Build a field from explicit pickups (sorted by id on the way in)
    pub fn from_pickups(mut pickups: Vec<Pickup>) -> Self {
        pickups.sort_by_key(|p| p.id);
        Self {
            pickups,
            consumed: BTreeSet::new(),
        }
    }

    /// Scatter `spec.count` pickups uniformly inside the margins.
    ///
    /// Pickups may overlap each other; only head/pickup contact matters.
    pub fn generate<R: Rng>(rng: &mut R, spec: &FieldSpec<'_>) -> Self {
        let mut pickups = Vec::with_capacity(spec.count);
        if spec.values.is_empty() {
            log::warn!("Pickup field requested with no values; generating empty field");
            return Self::from_pickups(pickups);
        }

        let lo = Vec2::splat(spec.margin);
        let hi = (spec.world - Vec2::splat(spec.margin)).max(lo);
        for id in 0..spec.count {
            let value = spec.values[rng.random_range(0..spec.values.len())];
            let pos = Vec2::new(sample_axis(rng, lo.x, hi.x), sample_axis(rng, lo.y, hi.y));
            pickups.push(Pickup::new(id as u32, pos, spec.radius, value));
        }

        log::info!(
            "Generated {} pickups in {}x{} world",
            pickups.len(),
            spec.world.x,
            spec.world.y
        );
        Self::from_pickups(pickups)
    }

    /// Live pickups in ascending id order
    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    pub fn get(&self, id: u32) -> Option<&Pickup> {
        self.index_of(id).map(|i| &self.pickups[i])
    }

    /// Pickups still on the field
    pub fn remaining(&self) -> usize {
        self.pickups.len()
    }

    pub fn is_consumed(&self, id: u32) -> bool {
        self.consumed.contains(&id)
    }

    /// Check-and-mark consumption.
    ///
    /// Returns the pickup's value the first time an id is consumed and `None`
    /// on any later call, or if the id never existed. The pickup stays in the
    /// live list until [`remove`](Self::remove) so a tick can finish scanning.
    pub fn consume(&mut self, id: u32) -> Option<Value> {
        if self.consumed.contains(&id) {
            return None;
        }
        let value = self.get(id)?.value;
        self.consumed.insert(id);
        Some(value)
    }

    /// Drop pickups from the live list. Unknown ids are ignored.
    pub fn remove(&mut self, ids: &[u32]) {
        if ids.is_empty() {
            return;
        }
        self.pickups.retain(|p| !ids.contains(&p.id));
    }

    fn index_of(&self, id: u32) -> Option<usize> {
        self.pickups.binary_search_by_key(&id, |p| p.id).ok()
    }
}

fn sample_axis<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}
