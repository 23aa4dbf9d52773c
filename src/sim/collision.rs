//! Head/pickup contact detection

use glam::Vec2;

use super::geometry::distance;
use super::pickups::PickupField;

/// Strict circle overlap: touching edges do not count
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    distance(a, b) < ra + rb
}

/// Ids of pickups the head currently overlaps, ascending.
///
/// Pickups already marked consumed are skipped even if they are still on the
/// field, so a pickup can never be reported twice.
pub fn detect_consumed(head_pos: Vec2, head_radius: f32, field: &PickupField) -> Vec<u32> {
    // Field keeps pickups sorted by id, so the result is already ordered
    field
        .pickups()
        .iter()
        .filter(|p| !field.is_consumed(p.id))
        .filter(|p| circles_overlap(head_pos, head_radius, p.pos, p.radius))
        .map(|p| p.id)
        .collect()
}
