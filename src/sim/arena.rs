//! Square arena bounds
//!
//! Supplied by whatever surface draws the simulation. The arena always spans
//! `[0, side]` on both axes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    side: f32,
}

impl Arena {
    /// Build from a surface size. Panics unless the surface is square with positive side.
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width == height,
            "arena must be square, got {}x{}",
            width,
            height
        );
        Self::square(width)
    }

    pub fn square(side: f32) -> Self {
        assert!(side > 0.0, "arena side must be positive, got {}", side);
        Self { side }
    }

    pub fn side(&self) -> f32 {
        self.side
    }

    pub fn left(&self) -> f32 {
        0.0
    }

    pub fn top(&self) -> f32 {
        0.0
    }

    pub fn right(&self) -> f32 {
        self.side
    }

    pub fn bottom(&self) -> f32 {
        self.side
    }

    /// Lower corner
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    /// Upper corner
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        let arena = Arena::new(400.0, 400.0);
        assert_eq!(arena.side(), 400.0);
        assert_eq!(arena.min(), Vec2::ZERO);
        assert_eq!(arena.max(), Vec2::splat(400.0));
    }

    #[test]
    fn test_contains_is_half_open() {
        let arena = Arena::square(100.0);
        assert!(arena.contains(Vec2::ZERO));
        assert!(arena.contains(Vec2::new(99.9, 50.0)));
        assert!(!arena.contains(Vec2::new(100.0, 50.0)));
        assert!(!arena.contains(Vec2::new(-0.1, 50.0)));
    }

    #[test]
    #[should_panic(expected = "square")]
    fn test_non_square_panics() {
        Arena::new(400.0, 300.0);
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn test_zero_side_panics() {
        Arena::square(0.0);
    }
}
