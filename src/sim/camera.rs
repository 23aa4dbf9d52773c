//! Instant-follow camera clamped to the world rectangle

use glam::Vec2;

/// Top-left of the visible rectangle, centered on `head` where possible.
///
/// Per axis: `clamp(head - viewport / 2, 0, max(0, world - viewport))`.
/// A viewport larger than the world pins the offset to zero.
pub fn clamp(head: Vec2, viewport: Vec2, world: Vec2) -> Vec2 {
    let desired = head - viewport / 2.0;
    let max = (world - viewport).max(Vec2::ZERO);
    desired.max(Vec2::ZERO).min(max)
}

/// Convert a pointer position in viewport pixels to world coordinates
#[inline]
pub fn screen_to_world(screen: Vec2, offset: Vec2) -> Vec2 {
    screen + offset
}

/// Convert a world position to viewport pixels
#[inline]
pub fn world_to_screen(world: Vec2, offset: Vec2) -> Vec2 {
    world - offset
}
