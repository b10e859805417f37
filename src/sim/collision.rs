//! Collision detection and response for circular agents
//!
//! Response is a pure direction flip plus an over-corrected displacement:
//! after flipping, the agent is pushed by twice its per-tick stride along the
//! new direction. That both reflects and moves it in the same tick.

use glam::{BVec2, Vec2};

use super::arena::Arena;

/// Which axes of a candidate position touch or cross the arena walls
pub fn wall_contact(candidate: Vec2, radius: f32, arena: &Arena) -> BVec2 {
    BVec2::new(
        candidate.x - radius <= arena.left() || candidate.x + radius >= arena.right(),
        candidate.y - radius <= arena.top() || candidate.y + radius >= arena.bottom(),
    )
}

/// Reflect off the walls, independently per axis
///
/// `stride` is `speed * dt`. For every axis in contact the direction component
/// is inverted and the candidate gets an extra `direction * stride * 2` on that
/// axis only. Returns the axes that reflected.
pub fn reflect_off_walls(
    candidate: &mut Vec2,
    direction: &mut Vec2,
    stride: f32,
    radius: f32,
    arena: &Arena,
) -> BVec2 {
    let contact = wall_contact(*candidate, radius, arena);
    if contact.x {
        direction.x = -direction.x;
        candidate.x += direction.x * stride * 2.0;
    }
    if contact.y {
        direction.y = -direction.y;
        candidate.y += direction.y * stride * 2.0;
    }
    contact
}

/// Two equal circles overlap or touch when their centers are within `2 * radius`
#[inline]
pub fn circles_touch(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance(b) <= 2.0 * radius
}

/// Turn an agent around after hitting another: invert both axes and push the
/// candidate twice the stride along the new heading.
pub fn bounce(candidate: &mut Vec2, direction: &mut Vec2, stride: f32) {
    *direction = -*direction;
    *candidate += *direction * stride * 2.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_wall_contact_in_middle() {
        let arena = Arena::square(100.0);
        let contact = wall_contact(Vec2::new(50.0, 50.0), 5.0, &arena);
        assert!(!contact.any());
    }

    #[test]
    fn test_wall_contact_is_inclusive() {
        let arena = Arena::square(100.0);
        // Edge exactly touching the left wall
        let contact = wall_contact(Vec2::new(5.0, 50.0), 5.0, &arena);
        assert!(contact.x);
        assert!(!contact.y);
        // Edge exactly touching the bottom wall
        let contact = wall_contact(Vec2::new(50.0, 95.0), 5.0, &arena);
        assert!(!contact.x);
        assert!(contact.y);
    }

    #[test]
    fn test_reflect_right_wall() {
        let arena = Arena::square(100.0);
        let mut candidate = Vec2::new(97.0, 50.0);
        let mut direction = Vec2::new(1.0, 0.0);

        let hit = reflect_off_walls(&mut candidate, &mut direction, 2.0, 5.0, &arena);

        assert!(hit.x && !hit.y);
        assert_eq!(direction, Vec2::new(-1.0, 0.0));
        // Pushed back by twice the stride
        assert!((candidate.x - 93.0).abs() < 1e-5);
        assert_eq!(candidate.y, 50.0);
    }

    #[test]
    fn test_reflect_corner_flips_both_axes() {
        let arena = Arena::square(100.0);
        let d = Vec2::new(1.0, 1.0).normalize();
        let mut candidate = Vec2::new(2.0, 2.0);
        let mut direction = -d;

        let hit = reflect_off_walls(&mut candidate, &mut direction, 1.0, 5.0, &arena);

        assert!(hit.all());
        assert!((direction - d).length() < 1e-6);
        assert!((candidate - (Vec2::new(2.0, 2.0) + d * 2.0)).length() < 1e-5);
        assert!((direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_circles_touch_boundary() {
        assert!(circles_touch(Vec2::ZERO, Vec2::new(10.0, 0.0), 5.0));
        assert!(!circles_touch(Vec2::ZERO, Vec2::new(10.01, 0.0), 5.0));
        assert!(circles_touch(Vec2::ONE, Vec2::ONE, 5.0));
    }

    #[test]
    fn test_bounce_reverses_and_displaces() {
        let mut candidate = Vec2::new(10.0, 10.0);
        let mut direction = Vec2::new(0.6, 0.8);
        bounce(&mut candidate, &mut direction, 5.0);
        assert_eq!(direction, Vec2::new(-0.6, -0.8));
        assert!((candidate - Vec2::new(4.0, 2.0)).length() < 1e-5);
    }
}
