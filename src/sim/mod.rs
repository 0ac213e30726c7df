//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (entity list order is the documented tie-break)
//! - No rendering, audio, or platform dependencies
//!
//! Side effects the presentation layer cares about (sounds, the damage
//! flash, score popups, victory) come out of [`tick::tick`] as a
//! [`state::GameEvent`] queue instead of being triggered from inside the
//! entities.

pub mod animation;
pub mod level;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use animation::{AnimState, Animator};
pub use level::Level;
pub use player::Player;
pub use rect::Aabb;
pub use state::{
    Camera, Enemy, GameEvent, Phase, Platform, PlatformKind, Projectile, Saw, SoundKind, World,
};
pub use tick::{TickInput, tick};
