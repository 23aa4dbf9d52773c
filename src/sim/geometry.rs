//! Distance and direction primitives shared by motion and collision
//!
//! Everything here works in world coordinates (origin top-left, +y down).

use glam::Vec2;

/// Below this length a vector is treated as zero
pub const EPSILON: f32 = 1e-4;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit direction from `from` to `to` and the distance between them.
///
/// Returns `None` when the points coincide, so callers never divide by zero.
#[inline]
pub fn direction(from: Vec2, to: Vec2) -> Option<(Vec2, f32)> {
    let delta = to - from;
    let len = delta.length();
    if len < EPSILON {
        None
    } else {
        Some((delta / len, len))
    }
}

/// Move `from` toward `to` by at most `max_step`, never past `to`
pub fn step_toward(from: Vec2, to: Vec2, max_step: f32) -> Vec2 {
    match direction(from, to) {
        Some((dir, dist)) => from + dir * dist.min(max_step),
        None => from,
    }
}

/// Clamp a circle center so the circle stays inside `[0, bounds]`.
///
/// When the circle is wider than the bounds it is centered on that axis.
pub fn clamp_to_bounds(pos: Vec2, radius: f32, bounds: Vec2) -> Vec2 {
    Vec2::new(
        clamp_axis(pos.x, radius, bounds.x),
        clamp_axis(pos.y, radius, bounds.y),
    )
}

#[inline]
fn clamp_axis(v: f32, radius: f32, bound: f32) -> f32 {
    let lo = radius;
    let hi = bound - radius;
    if lo > hi { bound / 2.0 } else { v.max(lo).min(hi) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_zero_length() {
        let p = Vec2::new(10.0, 10.0);
        assert!(direction(p, p).is_none());
        assert_eq!(step_toward(p, p, 5.0), p);
    }

    #[test]
    fn test_direction_normalized() {
        let (dir, dist) = direction(Vec2::ZERO, Vec2::new(3.0, 4.0)).unwrap();
        assert!((dist - 5.0).abs() < 1e-5);
        assert!((dir.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_step_toward_does_not_overshoot() {
        let to = Vec2::new(3.0, 0.0);
        assert_eq!(step_toward(Vec2::ZERO, to, 10.0), to);
        let p = step_toward(Vec2::ZERO, Vec2::new(100.0, 0.0), 10.0);
        assert!((p.x - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_clamp_to_bounds() {
        let bounds = Vec2::new(100.0, 50.0);
        let p = clamp_to_bounds(Vec2::new(-20.0, 80.0), 10.0, bounds);
        assert_eq!(p, Vec2::new(10.0, 40.0));

        // Circle wider than the world gets centered
        let p = clamp_to_bounds(Vec2::new(5.0, 5.0), 60.0, bounds);
        assert_eq!(p, Vec2::new(50.0, 25.0));
    }
}
