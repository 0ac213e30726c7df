//! Sawjump entry point
//!
//! Headless session controller: runs the deterministic sim at its fixed
//! tick rate with a scripted demo input and forwards the presentation
//! requests the sim emits (sounds, damage flash, score popups, victory)
//! to the log. A rendering host would consume the same event stream and
//! drive the same controller; frame pacing is the host's job, not the
//! sim's.

use sawjump::assets::{AssetHandle, AssetProvider, NoopAssets};
use sawjump::settings::Settings;
use sawjump::sim::{GameEvent, Level, Phase, SoundKind, TickInput, World, tick};

/// Damage-flash length, in ticks
const FLASH_TICKS: u32 = 10;
/// Demo run length before giving up, in ticks
const DEMO_TICKS: u64 = 3600;

/// Sound handles the session forwards to the audio collaborator.
struct SoundBank {
    damage: AssetHandle,
    collect: AssetHandle,
    shoot: AssetHandle,
}

impl SoundBank {
    fn load(assets: &mut dyn AssetProvider) -> Self {
        Self {
            damage: assets.sound("Assets/damage.wav"),
            collect: assets.sound("Assets/collection.wav"),
            shoot: assets.sound("Assets/shoot.wav"),
        }
    }

    fn handle(&self, kind: SoundKind) -> AssetHandle {
        match kind {
            SoundKind::Damage => self.damage,
            SoundKind::Collect => self.collect,
            SoundKind::Shoot => self.shoot,
        }
    }
}

/// One play session. Replaced wholesale on restart; there is no partial
/// reset path.
struct Session {
    world: World,
    settings: Settings,
    sounds: SoundBank,
    flash_timer: u32,
}

impl Session {
    fn new(settings: Settings, sounds: SoundBank) -> Self {
        Self {
            world: World::new(&Level::demo()),
            settings,
            sounds,
            flash_timer: 0,
        }
    }

    /// Rebuild the world from scratch, keeping settings and assets.
    fn restart(&mut self) {
        log::info!("Restarting session");
        self.world = World::new(&Level::demo());
        self.flash_timer = 0;
    }

    fn step(&mut self, input: &TickInput) {
        if self.flash_timer > 0 {
            self.flash_timer -= 1;
        }
        for event in tick(&mut self.world, input) {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Sound(kind) => {
                let handle = self.sounds.handle(kind);
                log::debug!(
                    "play sound {kind:?} ({handle:?}) at volume {:.2}",
                    self.settings.effective_sfx_volume()
                );
            }
            GameEvent::DamageFlash => {
                if !self.settings.reduced_flash {
                    self.flash_timer = FLASH_TICKS;
                }
            }
            GameEvent::Score => {
                log::info!("score: {}", self.world.player.score);
            }
            GameEvent::Victory => {
                log::info!("victory after {} ticks", self.world.tick_count);
            }
        }
    }
}

/// Scripted demo input: hold right, hop periodically, take the occasional
/// shot. Stands in for a real input collaborator.
fn demo_input(tick_no: u64) -> TickInput {
    TickInput {
        move_right: true,
        move_left: false,
        jump: tick_no % 90 == 0,
        shoot: tick_no % 240 == 120,
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let mut assets = NoopAssets;
    let sounds = SoundBank::load(&mut assets);
    let mut session = Session::new(settings, sounds);

    let mut restarts = 0u32;
    for tick_no in 0..DEMO_TICKS {
        session.step(&demo_input(tick_no));

        match session.world.phase {
            Phase::Playing => {}
            Phase::Victory => break,
            Phase::GameOver => {
                log::info!(
                    "game over at tick {} (score {})",
                    session.world.tick_count,
                    session.world.player.score
                );
                if restarts >= 2 {
                    break;
                }
                restarts += 1;
                session.restart();
            }
        }
    }

    let player = &session.world.player;
    log::info!(
        "demo finished: phase {:?}, {} ticks, health {}, score {}, ammo {}",
        session.world.phase,
        session.world.tick_count,
        player.health,
        player.score,
        player.ammo
    );
}
