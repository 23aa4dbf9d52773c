//! Head steering and follow-the-leader chain motion

use glam::Vec2;

use super::geometry::{clamp_to_bounds, direction, distance, step_toward};
use super::state::Segment;

/// Per-tick motion limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    /// Head distance per tick
    pub speed: f32,
    /// Head ignores targets closer than this
    pub deadzone: f32,
    /// Segments only chase when farther than this from their leader
    pub spacing: f32,
    /// Segment distance cap per tick
    pub max_step: f32,
}

/// Move the head toward `target` and keep it inside the world.
///
/// The head moves `speed` per tick but never past the target, and stays put
/// inside the deadzone. The result is always clamped to
/// `[radius, world - radius]`.
pub fn advance_head(pos: Vec2, radius: f32, target: Vec2, params: &MotionParams, world: Vec2) -> Vec2 {
    let next = if distance(pos, target) > params.deadzone {
        step_toward(pos, target, params.speed)
    } else {
        pos
    };
    clamp_to_bounds(next, radius, world)
}

/// Pull each segment toward the one ahead of it (the head for index 0).
///
/// Segments chase their leader's already-updated position, so the whole chain
/// reacts in one tick. A segment only closes the gap beyond `spacing` and by at
/// most `max_step`. Segments are not clamped to the world.
pub fn advance_chain(head: Vec2, chain: &[Segment], params: &MotionParams) -> Vec<Segment> {
    let mut out = Vec::with_capacity(chain.len());
    let mut leader = head;
    for seg in chain {
        let mut seg = seg.clone();
        if let Some((dir, dist)) = direction(seg.pos, leader) {
            if dist > params.spacing {
                seg.pos += dir * (dist - params.spacing).min(params.max_step);
            }
        }
        leader = seg.pos;
        out.push(seg);
    }
    out
}
