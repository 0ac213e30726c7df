//! World state and entity types
//!
//! Everything a session mutates lives here: the platform course, hazards,
//! items, the player, and the camera. Entities are updated strictly in
//! sequence by [`super::tick::tick`]; platforms and hazards always move
//! before the player reads them, so there is no shared-mutation hazard to
//! guard against.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::Animator;
use super::level::Level;
use super::player::Player;
use super::rect::Aabb;
use crate::consts::*;

/// Phase of a session. The controller stops calling `tick` once the phase
/// leaves `Playing` and rebuilds the world wholesale to restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Victory,
    GameOver,
}

/// Sound cues the presentation layer is asked to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Damage,
    Collect,
    Shoot,
}

/// Side-effect requests produced by a tick, consumed by the session
/// controller. Replaces any back-reference from entities into the loop:
/// the sim only ever returns these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Sound(SoundKind),
    /// Flash the background after the player takes damage
    DamageFlash,
    /// The score counter changed (enemy kill)
    Score,
    /// The player landed on the win platform
    Victory,
}

/// Platform kinds. A closed set; the collision and kinematics code matches
/// exhaustively on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Normal,
    MovingVertical,
    MovingHorizontal,
    /// Landing here wins the level
    Win,
}

/// A platform segment of the course. Set membership is fixed for the whole
/// session, so indices into the platform list are stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Aabb,
    pub kind: PlatformKind,
    /// Oscillation center for the moving kinds
    pub origin: Vec2,
    pub move_speed: f32,
    pub move_range: f32,
    /// +1 or -1 along the moving axis
    pub move_direction: f32,
    /// Displacement applied this tick; read by the player for ride carry.
    /// Zero for `Normal` and `Win`.
    pub vel: Vec2,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32, kind: PlatformKind) -> Self {
        Self {
            rect: Aabb::new(x, y, width, height),
            kind,
            origin: Vec2::new(x, y),
            move_speed: 2.0,
            move_range: 100.0,
            move_direction: 1.0,
            vel: Vec2::ZERO,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(
            self.kind,
            PlatformKind::MovingVertical | PlatformKind::MovingHorizontal
        )
    }

    /// Triangle-wave oscillation: advance along the moving axis at constant
    /// speed, clamping to `origin ± move_range` and reversing at the
    /// bounds. `vel` is left holding the delta actually applied so the
    /// player's ride carry can read it for exactly this tick.
    pub fn update(&mut self) {
        self.vel = Vec2::ZERO;
        match self.kind {
            PlatformKind::MovingVertical => {
                let next = oscillate(
                    self.rect.y,
                    self.origin.y,
                    self.move_speed,
                    self.move_range,
                    &mut self.move_direction,
                );
                self.vel.y = next - self.rect.y;
                self.rect.y = next;
            }
            PlatformKind::MovingHorizontal => {
                let next = oscillate(
                    self.rect.x,
                    self.origin.x,
                    self.move_speed,
                    self.move_range,
                    &mut self.move_direction,
                );
                self.vel.x = next - self.rect.x;
                self.rect.x = next;
            }
            PlatformKind::Normal | PlatformKind::Win => {}
        }
    }
}

/// One step of a triangle wave along a single axis. Never leaves
/// `[origin - range, origin + range]`; flips `direction` when a bound is
/// reached.
fn oscillate(pos: f32, origin: f32, speed: f32, range: f32, direction: &mut f32) -> f32 {
    let mut next = pos + speed * *direction;
    if next >= origin + range {
        next = origin + range;
        *direction = -1.0;
    } else if next <= origin - range {
        next = origin - range;
        *direction = 1.0;
    }
    next
}

/// Saw sprite footprint and the smaller centered hitbox
pub const SAW_SPRITE_SIZE: f32 = 100.0;
pub const SAW_HITBOX_SIZE: f32 = 70.0;
/// All spinning-saw sheets carry four frames
pub const SAW_FRAMES: usize = 4;
pub const SAW_ANIM_SPEED: f32 = 0.5;

/// A stationary spinning-saw hazard. Position never changes; only the
/// animation advances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Saw {
    pub rect: Aabb,
    pub anim: Animator,
}

impl Saw {
    /// `(x, y)` is the sprite's top-left; the hitbox sits centered inside.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Aabb::centered_hitbox(
                x,
                y,
                SAW_SPRITE_SIZE,
                SAW_SPRITE_SIZE,
                SAW_HITBOX_SIZE,
                SAW_HITBOX_SIZE,
            ),
            anim: Animator::default(),
        }
    }

    pub fn update(&mut self) {
        self.anim.advance(SAW_ANIM_SPEED, SAW_FRAMES);
    }
}

pub const ENEMY_SPRITE_WIDTH: f32 = 100.0;
pub const ENEMY_SPRITE_HEIGHT: f32 = 60.0;
pub const ENEMY_HITBOX_WIDTH: f32 = 70.0;
pub const ENEMY_HITBOX_HEIGHT: f32 = 60.0;
pub const ENEMY_FRAMES: usize = 4;
pub const ENEMY_ANIM_SPEED: f32 = 0.5;

/// A patrolling enemy. Oscillates horizontally around its spawn point with
/// the same triangle-wave policy as a moving platform, applied to its own
/// hitbox. Removed from the world when its health reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Aabb,
    pub origin_x: f32,
    pub move_speed: f32,
    pub move_range: f32,
    pub move_direction: f32,
    pub health: i32,
    pub anim: Animator,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        let rect = Aabb::centered_hitbox(
            x,
            y,
            ENEMY_SPRITE_WIDTH,
            ENEMY_SPRITE_HEIGHT,
            ENEMY_HITBOX_WIDTH,
            ENEMY_HITBOX_HEIGHT,
        );
        Self {
            origin_x: rect.x,
            rect,
            move_speed: 2.0,
            move_range: 100.0,
            move_direction: 1.0,
            health: ENEMY_HEALTH,
            anim: Animator::default(),
        }
    }

    pub fn update(&mut self) {
        self.rect.x = oscillate(
            self.rect.x,
            self.origin_x,
            self.move_speed,
            self.move_range,
            &mut self.move_direction,
        );
        self.anim.advance(ENEMY_ANIM_SPEED, ENEMY_FRAMES);
    }
}

pub const PROJECTILE_WIDTH: f32 = 15.0;
pub const PROJECTILE_HEIGHT: f32 = 8.0;

/// A player shot. Travels horizontally until it hits an enemy or drifts
/// far enough off-screen to be culled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Aabb,
    /// +1 right, -1 left
    pub direction: f32,
}

impl Projectile {
    pub fn new(x: f32, y: f32, facing_right: bool) -> Self {
        Self {
            rect: Aabb::new(x, y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            direction: if facing_right { 1.0 } else { -1.0 },
        }
    }

    pub fn update(&mut self) {
        self.rect.x += PROJECTILE_SPEED * self.direction;
    }

    /// Culled once far enough from the camera's horizontal center,
    /// regardless of collision outcome.
    pub fn is_off_screen(&self, camera: &Camera) -> bool {
        let center_x = camera.offset.x + SCREEN_WIDTH / 2.0;
        (self.rect.x - center_x).abs() > PROJECTILE_CULL_DISTANCE
    }
}

/// A health pickup. Removed on first contact with the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heart {
    pub rect: Aabb,
}

impl Heart {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Aabb::new(x, y, 30.0, 30.0),
        }
    }
}

/// An ammo pickup. Removed on first contact with the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmmoItem {
    pub rect: Aabb,
    pub amount: u32,
}

impl AmmoItem {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Aabb::new(x, y, 40.0, 40.0),
            amount: AMMO_PICKUP_AMOUNT,
        }
    }
}

/// Scrolling camera, centered on the player's hitbox each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Camera {
    pub offset: Vec2,
}

impl Camera {
    pub fn follow(&mut self, target: &Aabb) {
        self.offset.x = target.center_x() - SCREEN_WIDTH / 2.0;
        self.offset.y = target.center_y() - SCREEN_HEIGHT / 2.0;
    }

    /// World-space rect to screen-space, for the presentation layer.
    pub fn apply(&self, rect: Aabb) -> Aabb {
        Aabb::new(
            rect.x - self.offset.x,
            rect.y - self.offset.y,
            rect.width,
            rect.height,
        )
    }
}

/// Complete session state (deterministic, serializable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub phase: Phase,
    pub tick_count: u64,
    pub platforms: Vec<Platform>,
    pub saws: Vec<Saw>,
    pub enemies: Vec<Enemy>,
    pub hearts: Vec<Heart>,
    pub ammo_items: Vec<AmmoItem>,
    pub player: Player,
    pub camera: Camera,
}

impl World {
    /// Build a world from a level descriptor. The descriptor list order is
    /// preserved; collision tie-breaks follow it.
    pub fn new(level: &Level) -> Self {
        Self {
            phase: Phase::Playing,
            tick_count: 0,
            platforms: level.platforms.iter().map(|d| d.build()).collect(),
            saws: level.saws.iter().map(|d| Saw::new(d.x, d.y)).collect(),
            enemies: level.enemies.iter().map(|d| d.build()).collect(),
            hearts: level
                .hearts
                .iter()
                .map(|d| Heart::new(d.x, d.y))
                .collect(),
            ammo_items: level
                .ammo
                .iter()
                .map(|d| AmmoItem::new(d.x, d.y))
                .collect(),
            player: Player::new(level.player_spawn.x, level.player_spawn.y),
            camera: Camera::default(),
        }
    }
}
