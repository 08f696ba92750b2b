//! 2D vector math and viewport transforms

use serde::{Deserialize, Serialize};

/// 2D Vector (screen or clip space coordinates)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Transform a point from clip space ([-1,1] x [-1,1], y-up) to screen
/// coordinates ([0,w] x [0,h], origin top-left, y-down).
///
/// The y-coordinate is flipped because the screen origin is top-left
/// while in clip space top is +1 and bottom is -1. No z-division is
/// performed; callers do the perspective divide before calling this.
/// Out-of-range input is fine and maps outside the screen rectangle.
pub fn clip_to_screen(clip: Vec2, width: usize, height: usize) -> Vec2 {
    let w = width as f32;
    let h = height as f32;
    Vec2 {
        x: (clip.x + 1.0) * (w / 2.0),
        y: h - (clip.y + 1.0) * (h / 2.0),
    }
}

/// Transform a point from screen coordinates back to clip space.
///
/// Exact inverse of [`clip_to_screen`], including the y flip.
pub fn screen_to_clip(screen: Vec2, width: usize, height: usize) -> Vec2 {
    let w = width as f32;
    let h = height as f32;
    Vec2 {
        x: screen.x / (w / 2.0) - 1.0,
        y: -(screen.y / (h / 2.0) - 1.0),
    }
}
