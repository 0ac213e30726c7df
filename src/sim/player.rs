//! Player kinematics and collision resolution
//!
//! The heart of the game. Each tick integrates gravity, applies the
//! moving-platform carry, then resolves collisions in two axis-separated
//! passes against the platform list. The update order is load-bearing:
//! cooldowns, ride carry, gravity, vertical move + resolve, horizontal
//! move + resolve, bounds check, death check, animation.
//!
//! Tie-break policy: when several platforms qualify in the same pass, the
//! first one in list order wins and the pass ends. This is deliberate and
//! documented rather than an artifact of iteration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::{AnimState, Animator, select_anim};
use super::rect::Aabb;
use super::state::{GameEvent, Platform, PlatformKind, Projectile, SoundKind};
use super::tick::TickInput;
use crate::consts::*;

/// The visual sprite is 60x60; the hitbox is deliberately smaller.
pub const PLAYER_SPRITE_SIZE: f32 = 60.0;
pub const PLAYER_HITBOX_WIDTH: f32 = 35.0;
pub const PLAYER_HITBOX_HEIGHT: f32 = 55.0;

/// The player. Created once per session and replaced wholesale on restart;
/// there is no partial reset path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Hitbox top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
    /// Index into the platform list while grounded on a moving platform.
    /// Platform set membership never changes, so the index stays valid.
    pub riding: Option<usize>,
    pub health: i32,
    pub alive: bool,
    /// True iff `damage_cooldown > 0`
    pub invincible: bool,
    pub damage_cooldown: u32,
    pub facing_right: bool,
    pub ammo: u32,
    pub score: u32,
    pub shoot_cooldown: u32,
    pub anim_state: AnimState,
    pub anim: Animator,
    pub projectiles: Vec<Projectile>,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            on_ground: false,
            riding: None,
            health: START_HEALTH,
            alive: true,
            invincible: false,
            damage_cooldown: 0,
            facing_right: true,
            ammo: START_AMMO,
            score: 0,
            shoot_cooldown: 0,
            anim_state: AnimState::Idle,
            anim: Animator::default(),
            projectiles: Vec::new(),
        }
    }

    /// Current hitbox, recomputed from the position.
    pub fn rect(&self) -> Aabb {
        Aabb::new(
            self.pos.x,
            self.pos.y,
            PLAYER_HITBOX_WIDTH,
            PLAYER_HITBOX_HEIGHT,
        )
    }

    /// Apply this tick's input snapshot: horizontal velocity, jump, shoot.
    pub fn handle_input(&mut self, input: &TickInput, events: &mut Vec<GameEvent>) {
        self.vel.x = 0.0;
        if input.move_left {
            self.vel.x = -PLAYER_SPEED;
        }
        if input.move_right {
            self.vel.x = PLAYER_SPEED;
        }

        if input.jump && self.on_ground {
            self.vel.y = JUMP_POWER;
            self.on_ground = false;
            self.riding = None;
        }

        if input.shoot {
            self.shoot(events);
        }
    }

    /// Spawn a projectile at the hitbox center in the facing direction.
    /// Gated by the shoot cooldown and remaining ammo.
    fn shoot(&mut self, events: &mut Vec<GameEvent>) {
        if self.shoot_cooldown == 0 && self.ammo > 0 {
            let rect = self.rect();
            self.projectiles
                .push(Projectile::new(rect.center_x(), rect.center_y(), self.facing_right));
            self.shoot_cooldown = SHOOT_COOLDOWN_TICKS;
            self.ammo -= 1;
            events.push(GameEvent::Sound(SoundKind::Shoot));
        }
    }

    /// Advance the player one tick against the platform list.
    pub fn update(&mut self, platforms: &[Platform], events: &mut Vec<GameEvent>) {
        if self.damage_cooldown > 0 {
            self.damage_cooldown -= 1;
            if self.damage_cooldown == 0 {
                self.invincible = false;
            }
        }

        self.apply_ride_carry(platforms);

        if !self.on_ground {
            self.vel.y = (self.vel.y + GRAVITY).min(FALL_SPEED);
        }

        self.pos.y += self.vel.y;
        self.resolve_vertical(platforms, events);

        self.pos.x += self.vel.x;
        self.resolve_horizontal(platforms);

        if self.pos.y >= FALL_DEATH_Y {
            self.health = (self.health - FALL_DAMAGE).max(0);
        }
        if self.health <= 0 {
            self.alive = false;
        }

        self.update_animation();

        if self.shoot_cooldown > 0 {
            self.shoot_cooldown -= 1;
        }
    }

    /// While riding, translate by the platform's last-computed velocity on
    /// both axes, as long as the horizontal extents still overlap. Runs
    /// before gravity so the carried position feeds this tick's resolution.
    fn apply_ride_carry(&mut self, platforms: &[Platform]) {
        let Some(idx) = self.riding else {
            return;
        };
        let Some(platform) = platforms.get(idx) else {
            self.riding = None;
            return;
        };
        if self.rect().overlaps_horizontally(&platform.rect) {
            self.pos += platform.vel;
        } else {
            self.riding = None;
        }
    }

    /// Vertical pass: land on, or head-bump into, platforms.
    ///
    /// Descending (or resting): a platform qualifies when the horizontal
    /// extents overlap and the player's bottom sits between the platform
    /// top and a tolerance band below it. The band grows with descent
    /// speed so high fall speeds cannot tunnel through a platform in a
    /// single tick. Landing snaps the bottom to the platform top, zeroes
    /// `vy`, marks grounded, and ends the pass; a `Win` platform instead
    /// signals victory. Landing on a moving platform records it for
    /// next-tick carry.
    ///
    /// Ascending: a platform whose underside the player's top has crossed
    /// snaps the top to the platform bottom and zeroes `vy`; the pass
    /// keeps scanning.
    fn resolve_vertical(&mut self, platforms: &[Platform], events: &mut Vec<GameEvent>) {
        self.on_ground = false;
        self.riding = None;

        for (idx, platform) in platforms.iter().enumerate() {
            let rect = self.rect();
            // Edge-inclusive on the resting side: a player whose bottom
            // sits exactly on the platform top must stay grounded.
            let touching = rect.overlaps_horizontally(&platform.rect)
                && rect.bottom() >= platform.rect.top()
                && rect.top() < platform.rect.bottom();
            if !touching {
                continue;
            }

            if self.vel.y >= 0.0 {
                let tolerance = GROUND_TOLERANCE + self.vel.y.abs();
                if rect.bottom() <= platform.rect.top() + tolerance {
                    self.pos.y = platform.rect.top() - PLAYER_HITBOX_HEIGHT;
                    self.vel.y = 0.0;
                    self.on_ground = true;

                    if platform.kind == PlatformKind::Win {
                        events.push(GameEvent::Victory);
                        return;
                    }

                    if platform.is_moving() {
                        self.riding = Some(idx);
                    }
                    return;
                }
            } else if rect.top() < platform.rect.bottom() && rect.bottom() > platform.rect.top() {
                self.pos.y = platform.rect.bottom();
                self.vel.y = 0.0;
            }
        }
    }

    /// Horizontal pass: snap the leading edge to the platform's facing
    /// edge and stop. Platforms whose top is well above the player's
    /// bottom are skipped so a corner landing doesn't shove the player
    /// sideways.
    fn resolve_horizontal(&mut self, platforms: &[Platform]) {
        for platform in platforms {
            let rect = self.rect();
            if !rect.overlaps(&platform.rect) {
                continue;
            }
            if rect.bottom() <= platform.rect.top() + WALL_SKIP_MARGIN {
                continue;
            }

            if self.vel.x > 0.0 {
                self.pos.x = platform.rect.left() - PLAYER_HITBOX_WIDTH;
            } else if self.vel.x < 0.0 {
                self.pos.x = platform.rect.right();
            }
            self.vel.x = 0.0;
        }
    }

    /// Apply hazard contact damage and open the invincibility window.
    /// Callers must check `invincible` first; at most one hazard lands
    /// damage per tick.
    pub fn apply_contact_damage(&mut self, events: &mut Vec<GameEvent>) {
        self.health = (self.health - CONTACT_DAMAGE).max(0);
        self.damage_cooldown = DAMAGE_COOLDOWN_TICKS;
        self.invincible = true;
        events.push(GameEvent::Sound(SoundKind::Damage));
        events.push(GameEvent::DamageFlash);
    }

    /// Heal from a heart pickup, clamped to max health.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(MAX_HEALTH);
    }

    /// Add ammo from a pickup, clamped to capacity.
    pub fn add_ammo(&mut self, amount: u32) {
        self.ammo = (self.ammo + amount).min(MAX_AMMO);
    }

    fn update_animation(&mut self) {
        let next = select_anim(self.on_ground, self.vel.x, self.vel.y);
        if next != self.anim_state {
            self.anim_state = next;
            self.anim.reset();
        }
        match next {
            AnimState::WalkRight => self.facing_right = true,
            AnimState::WalkLeft => self.facing_right = false,
            _ => {}
        }
        self.anim
            .advance(self.anim_state.speed(), self.anim_state.frame_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn no_events() -> Vec<GameEvent> {
        Vec::new()
    }

    fn floor(x: f32, y: f32, width: f32) -> Platform {
        Platform::new(x, y, width, 40.0, PlatformKind::Normal)
    }

    #[test]
    fn test_fall_and_land() {
        // Player above a platform whose top is at y = 500
        let mut player = Player::new(0.0, 0.0);
        let platforms = vec![floor(-100.0, 500.0, 300.0)];
        let mut events = no_events();

        for _ in 0..200 {
            player.update(&platforms, &mut events);
        }

        assert_eq!(player.rect().bottom(), 500.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(player.on_ground);
        assert!(events.is_empty());
    }

    #[test]
    fn test_ground_snap_is_idempotent() {
        let platforms = vec![floor(-100.0, 500.0, 300.0)];
        let mut player = Player::new(0.0, 500.0 - PLAYER_HITBOX_HEIGHT);
        player.on_ground = true;
        let mut events = no_events();

        for _ in 0..10 {
            player.update(&platforms, &mut events);
            assert_eq!(player.pos.y, 500.0 - PLAYER_HITBOX_HEIGHT);
            assert_eq!(player.vel.y, 0.0);
            assert!(player.on_ground);
        }
    }

    #[test]
    fn test_gravity_clamps_at_terminal_velocity() {
        let mut player = Player::new(0.0, 0.0);
        let platforms: Vec<Platform> = Vec::new();
        let mut events = no_events();

        let mut last_vy = player.vel.y;
        for _ in 0..100 {
            player.update(&platforms, &mut events);
            assert!(player.vel.y <= FALL_SPEED);
            assert!(player.vel.y >= last_vy);
            last_vy = player.vel.y;
        }
        assert_eq!(player.vel.y, FALL_SPEED);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let platforms = vec![floor(-100.0, 500.0, 300.0)];
        let mut player = Player::new(0.0, 500.0 - PLAYER_HITBOX_HEIGHT);
        player.on_ground = true;
        let mut events = no_events();

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        player.handle_input(&jump, &mut events);
        assert_eq!(player.vel.y, JUMP_POWER);
        assert!(!player.on_ground);

        // Airborne jump input is ignored
        let vy = player.vel.y;
        player.handle_input(&jump, &mut events);
        assert_eq!(player.vel.y, vy);
    }

    #[test]
    fn test_head_bump_stops_ascent() {
        // Ceiling directly above the player
        let ceiling = Platform::new(-100.0, 100.0, 300.0, 40.0, PlatformKind::Normal);
        let mut player = Player::new(0.0, 150.0);
        player.vel.y = -15.0;
        let mut events = no_events();

        player.update(&[ceiling], &mut events);
        assert_eq!(player.rect().top(), 140.0);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_wall_stops_horizontal_motion() {
        let floor_platform = floor(-200.0, 500.0, 400.0);
        let wall = Platform::new(100.0, 300.0, 40.0, 240.0, PlatformKind::Normal);
        let mut player = Player::new(90.0, 500.0 - PLAYER_HITBOX_HEIGHT);
        player.on_ground = true;
        let mut events = no_events();

        let platforms = vec![floor_platform, wall];
        let input = TickInput {
            move_right: true,
            ..Default::default()
        };
        player.handle_input(&input, &mut events);
        player.update(&platforms, &mut events);

        assert_eq!(player.rect().right(), 100.0);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_corner_landing_does_not_snap_sideways() {
        // Player descending onto a platform edge: the horizontal pass must
        // leave x alone while the vertical pass claims the landing.
        let platforms = vec![floor(0.0, 500.0, 300.0)];
        let mut player = Player::new(-20.0, 500.0 - PLAYER_HITBOX_HEIGHT - 4.0);
        player.vel.y = 4.0;
        let mut events = no_events();

        let x_before = player.pos.x;
        player.update(&platforms, &mut events);
        assert_eq!(player.pos.x, x_before);
        assert!(player.on_ground);
    }

    #[test]
    fn test_moving_platform_carry() {
        let mut platform = Platform::new(0.0, 500.0, 200.0, 40.0, PlatformKind::MovingHorizontal);
        platform.move_speed = 3.0;
        platform.move_range = 100.0;

        let mut player = Player::new(50.0, 500.0 - PLAYER_HITBOX_HEIGHT);
        player.on_ground = true;
        player.riding = Some(0);
        let mut events = no_events();

        let mut platforms = vec![platform];
        platforms[0].update();
        assert_eq!(platforms[0].vel.x, 3.0);

        let x_before = player.pos.x;
        player.update(&platforms, &mut events);

        assert_eq!(player.pos.x, x_before + 3.0);
        assert!(player.on_ground);
        assert_eq!(player.riding, Some(0));
    }

    #[test]
    fn test_vertical_platform_keeps_rider_attached() {
        let mut platform = Platform::new(0.0, 500.0, 200.0, 40.0, PlatformKind::MovingVertical);
        platform.move_speed = 3.0;
        platform.move_range = 150.0;

        let mut player = Player::new(50.0, 500.0 - PLAYER_HITBOX_HEIGHT);
        player.on_ground = true;
        player.riding = Some(0);
        let mut events = no_events();

        let mut platforms = vec![platform];
        for _ in 0..60 {
            platforms[0].update();
            player.update(&platforms, &mut events);
            assert!(player.on_ground);
            assert_eq!(player.rect().bottom(), platforms[0].rect.top());
        }
    }

    #[test]
    fn test_carry_ends_when_walking_off() {
        let mut platform = Platform::new(0.0, 500.0, 100.0, 40.0, PlatformKind::MovingHorizontal);
        platform.vel = Vec2::new(3.0, 0.0);

        // Player entirely to the right of the platform's extent
        let mut player = Player::new(200.0, 500.0 - PLAYER_HITBOX_HEIGHT);
        player.riding = Some(0);
        let mut events = no_events();

        player.update(&[platform], &mut events);
        assert_eq!(player.riding, None);
    }

    #[test]
    fn test_lethal_fall() {
        let mut player = Player::new(0.0, 1000.0);
        let mut events = no_events();
        player.update(&[], &mut events);
        assert_eq!(player.health, 0);
        assert!(!player.alive);
    }

    #[test]
    fn test_fall_death_is_idempotent() {
        let mut player = Player::new(0.0, 1200.0);
        let mut events = no_events();
        player.update(&[], &mut events);
        assert!(!player.alive);
        player.update(&[], &mut events);
        assert_eq!(player.health, 0);
        assert!(!player.alive);
    }

    #[test]
    fn test_win_platform_signals_victory() {
        let win = Platform::new(-100.0, 500.0, 300.0, 40.0, PlatformKind::Win);
        let mut player = Player::new(0.0, 500.0 - PLAYER_HITBOX_HEIGHT - 2.0);
        player.vel.y = 2.0;
        let mut events = no_events();

        player.update(&[win], &mut events);
        assert!(events.contains(&GameEvent::Victory));
        assert!(player.on_ground);
        // Win platforms are never ridden
        assert_eq!(player.riding, None);
    }

    #[test]
    fn test_invincibility_window_counts_down() {
        let mut player = Player::new(0.0, 0.0);
        let mut events = no_events();
        player.apply_contact_damage(&mut events);
        assert_eq!(player.health, START_HEALTH - CONTACT_DAMAGE);
        assert!(player.invincible);

        for _ in 0..DAMAGE_COOLDOWN_TICKS {
            assert!(player.invincible);
            player.update(&[], &mut events);
        }
        assert!(!player.invincible);
        assert_eq!(player.damage_cooldown, 0);
    }

    #[test]
    fn test_shoot_consumes_ammo_and_respects_cooldown() {
        let mut player = Player::new(0.0, 0.0);
        let mut events = no_events();
        let input = TickInput {
            shoot: true,
            ..Default::default()
        };

        player.handle_input(&input, &mut events);
        assert_eq!(player.ammo, START_AMMO - 1);
        assert_eq!(player.projectiles.len(), 1);
        assert_eq!(events, vec![GameEvent::Sound(SoundKind::Shoot)]);

        // Cooldown blocks the immediate follow-up
        player.handle_input(&input, &mut events);
        assert_eq!(player.projectiles.len(), 1);

        for _ in 0..SHOOT_COOLDOWN_TICKS {
            player.update(&[], &mut events);
        }
        player.handle_input(&input, &mut events);
        assert_eq!(player.projectiles.len(), 2);
    }

    #[test]
    fn test_shoot_requires_ammo() {
        let mut player = Player::new(0.0, 0.0);
        player.ammo = 0;
        let mut events = no_events();
        let input = TickInput {
            shoot: true,
            ..Default::default()
        };
        player.handle_input(&input, &mut events);
        assert!(player.projectiles.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn test_projectile_direction_follows_facing() {
        let mut player = Player::new(0.0, 0.0);
        player.facing_right = false;
        let mut events = no_events();
        player.shoot(&mut events);
        assert_eq!(player.projectiles[0].direction, -1.0);
    }

    #[test]
    fn test_animation_follows_kinematics() {
        let platforms = vec![floor(-500.0, 500.0, 1000.0)];
        let mut player = Player::new(0.0, 500.0 - PLAYER_HITBOX_HEIGHT);
        player.on_ground = true;
        let mut events = no_events();

        let input = TickInput {
            move_right: true,
            ..Default::default()
        };
        player.handle_input(&input, &mut events);
        player.update(&platforms, &mut events);
        assert_eq!(player.anim_state, AnimState::WalkRight);
        assert!(player.facing_right);

        let input = TickInput {
            move_left: true,
            ..Default::default()
        };
        player.handle_input(&input, &mut events);
        player.update(&platforms, &mut events);
        assert_eq!(player.anim_state, AnimState::WalkLeft);
        assert!(!player.facing_right);
        // State change restarted the cycle
        assert_eq!(player.anim.frame, 0);

        player.handle_input(&TickInput::default(), &mut events);
        player.update(&platforms, &mut events);
        assert_eq!(player.anim_state, AnimState::Idle);
    }

    proptest! {
        /// Airborne `vy` is monotonically non-decreasing and never passes
        /// terminal velocity, whatever it starts at.
        #[test]
        fn prop_gravity_clamp(start_vy in -30.0f32..30.0) {
            let mut player = Player::new(0.0, -10_000.0);
            player.vel.y = start_vy;
            let mut events = Vec::new();

            let mut last = player.vel.y;
            for _ in 0..50 {
                player.update(&[], &mut events);
                prop_assert!(player.vel.y <= FALL_SPEED);
                prop_assert!(player.vel.y >= last);
                last = player.vel.y;
            }
        }

        /// Health stays in [0, MAX_HEALTH] under any damage/heal sequence.
        #[test]
        fn prop_health_clamp(ops in proptest::collection::vec(any::<bool>(), 1..64)) {
            let mut player = Player::new(0.0, 0.0);
            let mut events = Vec::new();
            for heal_op in ops {
                if heal_op {
                    player.heal(HEART_HEAL);
                } else {
                    // Re-arm so every damage op lands
                    player.invincible = false;
                    player.apply_contact_damage(&mut events);
                }
                prop_assert!(player.health >= 0);
                prop_assert!(player.health <= MAX_HEALTH);
            }
        }

        /// Ammo stays in [0, MAX_AMMO] under any shoot/pickup sequence.
        #[test]
        fn prop_ammo_clamp(ops in proptest::collection::vec(any::<bool>(), 1..64)) {
            let mut player = Player::new(0.0, 0.0);
            let mut events = Vec::new();
            for pickup in ops {
                if pickup {
                    player.add_ammo(AMMO_PICKUP_AMOUNT);
                } else {
                    player.shoot_cooldown = 0;
                    player.shoot(&mut events);
                }
                prop_assert!(player.ammo <= MAX_AMMO);
            }
        }
    }
}
