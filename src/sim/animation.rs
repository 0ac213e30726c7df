//! Sprite animation bookkeeping
//!
//! A single frame-advance policy is shared by every animated entity: a
//! fractional accumulator gains `speed` each tick and rolls the frame over
//! when it reaches 1. The sim only tracks frame indices; slicing the sprite
//! sheet into actual surfaces is the host's job.

use serde::{Deserialize, Serialize};

/// Player animation states, selected from kinematic state each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimState {
    #[default]
    Idle,
    WalkRight,
    WalkLeft,
    Jump,
}

impl AnimState {
    /// Frame-advance speed (accumulator gain per tick). Walking animates
    /// faster than idling.
    pub fn speed(self) -> f32 {
        match self {
            AnimState::Idle => 1.0 / 15.0,
            AnimState::WalkRight | AnimState::WalkLeft => 1.0 / 8.0,
            AnimState::Jump => 1.0 / 12.0,
        }
    }

    /// Frames in the player sprite sheet for this state. The host must
    /// slice its sheet the same way.
    pub fn frame_count(self) -> usize {
        match self {
            AnimState::Idle => 2,
            AnimState::WalkRight | AnimState::WalkLeft => 3,
            AnimState::Jump => 2,
        }
    }
}

/// Pick the animation for the current kinematics. Pure.
///
/// A player is treated as grounded for animation purposes when nearly at
/// rest vertically, so the single-tick airborne blips during ground
/// resolution don't flicker the jump animation.
pub fn select_anim(on_ground: bool, vx: f32, vy: f32) -> AnimState {
    let grounded = on_ground || vy.abs() < 1.0;
    if !grounded {
        AnimState::Jump
    } else if vx > 0.1 {
        AnimState::WalkRight
    } else if vx < -0.1 {
        AnimState::WalkLeft
    } else {
        AnimState::Idle
    }
}

/// Fractional-accumulator frame counter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Animator {
    pub frame: usize,
    counter: f32,
}

impl Animator {
    /// Advance by `speed` over a cycle of `num_frames`.
    pub fn advance(&mut self, speed: f32, num_frames: usize) {
        if num_frames == 0 {
            return;
        }
        self.counter += speed;
        if self.counter >= 1.0 {
            self.counter = 0.0;
            self.frame = (self.frame + 1) % num_frames;
        }
    }

    /// Restart the cycle (on animation state change).
    pub fn reset(&mut self) {
        self.frame = 0;
        self.counter = 0.0;
    }

    /// Frame index safe to use against a set of `num_frames` frames. An
    /// empty set degrades to frame 0 rather than failing.
    pub fn frame_index(&self, num_frames: usize) -> usize {
        if num_frames == 0 { 0 } else { self.frame % num_frames }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_rolls_over_at_one() {
        let mut anim = Animator::default();
        // speed 0.5: every second tick advances the frame
        anim.advance(0.5, 4);
        assert_eq!(anim.frame, 0);
        anim.advance(0.5, 4);
        assert_eq!(anim.frame, 1);
        for _ in 0..6 {
            anim.advance(0.5, 4);
        }
        assert_eq!(anim.frame, 0); // wrapped around the 4-frame cycle
    }

    #[test]
    fn test_empty_frame_set_is_safe() {
        let mut anim = Animator::default();
        anim.advance(1.0, 0);
        assert_eq!(anim.frame, 0);
        assert_eq!(anim.frame_index(0), 0);
    }

    #[test]
    fn test_frame_index_wraps() {
        let anim = Animator { frame: 5, counter: 0.0 };
        assert_eq!(anim.frame_index(4), 1);
    }

    #[test]
    fn test_select_anim() {
        assert_eq!(select_anim(false, 0.0, -10.0), AnimState::Jump);
        assert_eq!(select_anim(false, 5.0, 8.0), AnimState::Jump);
        assert_eq!(select_anim(true, 5.0, 0.0), AnimState::WalkRight);
        assert_eq!(select_anim(true, -5.0, 0.0), AnimState::WalkLeft);
        assert_eq!(select_anim(true, 0.0, 0.0), AnimState::Idle);
        // Nearly at rest vertically counts as grounded
        assert_eq!(select_anim(false, 0.0, 0.5), AnimState::Idle);
    }
}
