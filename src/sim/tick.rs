//! Fixed timestep simulation tick
//!
//! One `tick` call advances the whole world by a single step and returns
//! the side-effect requests it produced. The pass order is part of the
//! contract: platform and hazard kinematics run before the player so the
//! player reads this tick's platform velocities during ride carry, and
//! combat resolution runs after movement so it sees settled positions.

use super::state::{GameEvent, Phase, SoundKind, World};
use crate::consts::*;

/// Input snapshot for a single tick, sampled once per frame by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub shoot: bool,
}

/// Advance the world by one fixed timestep.
pub fn tick(world: &mut World, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if world.phase != Phase::Playing {
        return events;
    }
    world.tick_count += 1;

    for platform in &mut world.platforms {
        platform.update();
    }
    for saw in &mut world.saws {
        saw.update();
    }
    for enemy in &mut world.enemies {
        enemy.update();
    }

    world.player.handle_input(input, &mut events);
    world.player.update(&world.platforms, &mut events);

    resolve_hazard_contact(world, &mut events);
    resolve_heart_pickup(world, &mut events);
    resolve_projectile_hits(world, &mut events);
    resolve_ammo_pickup(world, &mut events);
    advance_projectiles(world);

    world.camera.follow(&world.player.rect());

    if events.contains(&GameEvent::Victory) {
        world.phase = Phase::Victory;
    }
    if !world.player.alive {
        world.phase = Phase::GameOver;
    }

    events
}

/// Saws are scanned before enemies, list order within each; the first
/// overlap wins and at most one hazard damages the player per tick. The
/// invincibility window blocks the whole scan.
fn resolve_hazard_contact(world: &mut World, events: &mut Vec<GameEvent>) {
    if world.player.invincible {
        return;
    }
    let rect = world.player.rect();
    let hit = world.saws.iter().any(|saw| rect.overlaps(&saw.rect))
        || world.enemies.iter().any(|enemy| rect.overlaps(&enemy.rect));
    if hit {
        world.player.apply_contact_damage(events);
    }
}

/// Heal from the first overlapping heart and remove it.
fn resolve_heart_pickup(world: &mut World, events: &mut Vec<GameEvent>) {
    let rect = world.player.rect();
    if let Some(idx) = world.hearts.iter().position(|h| rect.overlaps(&h.rect)) {
        world.hearts.remove(idx);
        world.player.heal(HEART_HEAL);
        events.push(GameEvent::Sound(SoundKind::Collect));
    }
}

/// Refill from the first overlapping ammo crate and remove it.
fn resolve_ammo_pickup(world: &mut World, events: &mut Vec<GameEvent>) {
    let rect = world.player.rect();
    if let Some(idx) = world
        .ammo_items
        .iter()
        .position(|a| rect.overlaps(&a.rect))
    {
        let amount = world.ammo_items.remove(idx).amount;
        world.player.add_ammo(amount);
        events.push(GameEvent::Sound(SoundKind::Collect));
    }
}

/// Projectile-vs-enemy resolution. Each projectile hits at most one enemy
/// (first overlap in list order). Removals are collected during the scan
/// and applied afterwards so the pass iterates a stable snapshot.
fn resolve_projectile_hits(world: &mut World, events: &mut Vec<GameEvent>) {
    let mut spent: Vec<usize> = Vec::new();
    let mut dead: Vec<usize> = Vec::new();

    for pi in 0..world.player.projectiles.len() {
        let rect = world.player.projectiles[pi].rect;
        let hit = world
            .enemies
            .iter_mut()
            .enumerate()
            .filter(|(ei, _)| !dead.contains(ei))
            .find(|(_, enemy)| rect.overlaps(&enemy.rect));

        if let Some((ei, enemy)) = hit {
            spent.push(pi);
            enemy.health -= PROJECTILE_DAMAGE;
            if enemy.health <= 0 {
                dead.push(ei);
                world.player.score += 1;
                events.push(GameEvent::Score);
            }
        }
    }

    for &pi in spent.iter().rev() {
        world.player.projectiles.remove(pi);
    }
    dead.sort_unstable();
    for &ei in dead.iter().rev() {
        world.enemies.remove(ei);
    }
}

/// Move projectiles and cull the ones far off-screen. Uses last tick's
/// camera position; the camera follows the player only after this.
fn advance_projectiles(world: &mut World) {
    let camera = world.camera;
    for projectile in &mut world.player.projectiles {
        projectile.update();
    }
    world
        .player
        .projectiles
        .retain(|p| !p.is_off_screen(&camera));
}
