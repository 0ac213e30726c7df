//! Sawjump - a side-scrolling platformer with saw hazards
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collision resolution, combat)
//! - `assets`: Opaque drawable/sound handles supplied by a host
//! - `settings`: Presentation preferences persisted as JSON

pub mod assets;
pub mod settings;
pub mod sim;

pub use assets::{AssetHandle, AssetProvider};
pub use settings::Settings;

/// Game configuration constants
///
/// The simulation runs at a fixed tick rate; all speeds and accelerations
/// below are in pixels per tick (or per tick squared).
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICK_HZ: u32 = 60;

    /// Camera viewport dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;

    /// Downward acceleration while airborne (positive y is down)
    pub const GRAVITY: f32 = 0.8;
    /// Terminal fall speed; gravity never pushes `vy` past this
    pub const FALL_SPEED: f32 = 18.0;
    /// Horizontal run speed
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Vertical velocity at the start of a jump
    pub const JUMP_POWER: f32 = -15.0;

    /// Health bounds and damage amounts
    pub const MAX_HEALTH: i32 = 200;
    pub const START_HEALTH: i32 = 100;
    pub const CONTACT_DAMAGE: i32 = 20;
    pub const HEART_HEAL: i32 = 20;
    /// Applied every tick spent below [`FALL_DEATH_Y`]
    pub const FALL_DAMAGE: i32 = 100;
    /// Falling past this y is out of bounds
    pub const FALL_DEATH_Y: f32 = 1000.0;
    /// Invincibility window after hazard contact (ticks)
    pub const DAMAGE_COOLDOWN_TICKS: u32 = 60;

    /// Combat
    pub const MAX_AMMO: u32 = 30;
    pub const START_AMMO: u32 = 30;
    pub const AMMO_PICKUP_AMOUNT: u32 = 10;
    pub const SHOOT_COOLDOWN_TICKS: u32 = 20;
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_DAMAGE: i32 = 20;
    pub const ENEMY_HEALTH: i32 = 60;

    /// Projectiles further than this from the camera's horizontal center
    /// are culled
    pub const PROJECTILE_CULL_DISTANCE: f32 = SCREEN_WIDTH * 2.0;

    /// Base landing tolerance below a platform top; the effective band
    /// grows with descent speed (see `sim::player`)
    pub const GROUND_TOLERANCE: f32 = 10.0;
    /// Horizontal resolution ignores platforms whose top is further than
    /// this above the player's bottom (corner-landing margin)
    pub const WALL_SKIP_MARGIN: f32 = 15.0;
}
