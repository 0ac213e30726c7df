//! Axis-aligned rectangles
//!
//! Every entity collides through an [`Aabb`] hitbox, usually smaller than
//! its visual sprite. Rectangles owned by the player are recomputed from
//! its position each tick; platform and hazard rects are moved in place by
//! their own update step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box. `(x, y)` is the top-left corner; positive y
/// points down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "zero-sized aabb");
        Self { x, y, width, height }
    }

    /// Hitbox of `hitbox_w x hitbox_h` centered inside a sprite footprint
    /// whose top-left is at `(x, y)`.
    pub fn centered_hitbox(
        x: f32,
        y: f32,
        sprite_w: f32,
        sprite_h: f32,
        hitbox_w: f32,
        hitbox_h: f32,
    ) -> Self {
        Self::new(
            x + (sprite_w - hitbox_w) / 2.0,
            y + (sprite_h - hitbox_h) / 2.0,
            hitbox_w,
            hitbox_h,
        )
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    /// Strict overlap test; rectangles that merely share an edge do not
    /// overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Horizontal extents overlap, ignoring the vertical axis. Used for
    /// ride-carry and landing-support checks.
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Aabb) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }
}
