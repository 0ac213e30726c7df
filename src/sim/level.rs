//! Level descriptors and the demo course
//!
//! The simulation consumes a level as an ordered list of in-memory
//! construction records; it never parses or validates a file format.
//! Descriptor order matters: the platform list order is the documented
//! collision tie-break.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Enemy, Platform, PlatformKind};

/// Construction record for one platform segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformDesc {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: PlatformKind,
    pub move_speed: f32,
    pub move_range: f32,
}

impl PlatformDesc {
    pub fn fixed(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind: PlatformKind::Normal,
            move_speed: 0.0,
            move_range: 0.0,
        }
    }

    pub fn win(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            kind: PlatformKind::Win,
            ..Self::fixed(x, y, width, height)
        }
    }

    pub fn moving_vertical(x: f32, y: f32, width: f32, height: f32, speed: f32, range: f32) -> Self {
        Self {
            kind: PlatformKind::MovingVertical,
            move_speed: speed,
            move_range: range,
            ..Self::fixed(x, y, width, height)
        }
    }

    pub fn moving_horizontal(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        speed: f32,
        range: f32,
    ) -> Self {
        Self {
            kind: PlatformKind::MovingHorizontal,
            move_speed: speed,
            move_range: range,
            ..Self::fixed(x, y, width, height)
        }
    }

    pub fn build(&self) -> Platform {
        let mut platform = Platform::new(self.x, self.y, self.width, self.height, self.kind);
        if platform.is_moving() {
            platform.move_speed = self.move_speed;
            platform.move_range = self.move_range;
        }
        platform
    }
}

/// Construction record for a saw hazard (sprite top-left).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SawDesc {
    pub x: f32,
    pub y: f32,
}

/// Construction record for a patrolling enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyDesc {
    pub x: f32,
    pub y: f32,
    pub move_speed: f32,
    pub move_range: f32,
}

impl EnemyDesc {
    pub fn build(&self) -> Enemy {
        let mut enemy = Enemy::new(self.x, self.y);
        enemy.move_speed = self.move_speed;
        enemy.move_range = self.move_range;
        enemy
    }
}

/// Construction record for a heart or ammo pickup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDesc {
    pub x: f32,
    pub y: f32,
}

/// An ordered set of entity construction records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub player_spawn: Vec2,
    pub platforms: Vec<PlatformDesc>,
    pub saws: Vec<SawDesc>,
    pub enemies: Vec<EnemyDesc>,
    pub hearts: Vec<ItemDesc>,
    pub ammo: Vec<ItemDesc>,
}

impl Level {
    /// The hand-authored demo course: a climb from the spawn shelf up and
    /// to the right, past saws and moving platforms, ending on the win
    /// platform at the top.
    pub fn demo() -> Self {
        let platforms = vec![
            PlatformDesc::fixed(50.0, 400.0, 300.0, 40.0),
            PlatformDesc::fixed(500.0, 400.0, 300.0, 40.0),
            PlatformDesc::fixed(-300.0, 400.0, 200.0, 40.0),
            PlatformDesc::fixed(-600.0, 350.0, 200.0, 40.0),
            PlatformDesc::fixed(-900.0, 300.0, 200.0, 40.0),
            PlatformDesc::moving_vertical(200.0, 200.0, 100.0, 40.0, 3.0, 150.0),
            PlatformDesc::fixed(50.0, 150.0, 150.0, 40.0),
            PlatformDesc::moving_horizontal(350.0, 100.0, 100.0, 20.0, 3.0, 250.0),
            PlatformDesc::fixed(700.0, 100.0, 80.0, 20.0),
            PlatformDesc::fixed(950.0, 50.0, 50.0, 40.0),
            PlatformDesc::moving_vertical(1100.0, -50.0, 70.0, 40.0, 3.0, 100.0),
            PlatformDesc::fixed(900.0, -150.0, 200.0, 40.0),
            PlatformDesc::moving_horizontal(700.0, -250.0, 120.0, 20.0, 2.0, 150.0),
            PlatformDesc::fixed(350.0, -350.0, 100.0, 20.0),
            PlatformDesc::fixed(600.0, -400.0, 100.0, 20.0),
            PlatformDesc::moving_horizontal(400.0, -500.0, 150.0, 20.0, 4.0, 350.0),
            PlatformDesc::fixed(800.0, -550.0, 70.0, 20.0),
            PlatformDesc::fixed(950.0, -550.0, 300.0, 20.0),
            PlatformDesc::moving_vertical(1300.0, -600.0, 80.0, 20.0, 2.0, 50.0),
            PlatformDesc::moving_vertical(1450.0, -650.0, 80.0, 20.0, 2.0, 50.0),
            PlatformDesc::fixed(1600.0, -750.0, 50.0, 20.0),
            PlatformDesc::fixed(1700.0, -800.0, 50.0, 20.0),
            PlatformDesc::fixed(1000.0, -900.0, 600.0, 40.0),
            PlatformDesc::moving_horizontal(900.0, -980.0, 100.0, 20.0, 1.0, 100.0),
            PlatformDesc::moving_vertical(750.0, -1100.0, 100.0, 20.0, 3.0, 150.0),
            PlatformDesc::fixed(500.0, -1250.0, 200.0, 40.0),
            PlatformDesc::fixed(350.0, -1300.0, 100.0, 40.0),
            PlatformDesc::moving_horizontal(300.0, -1400.0, 100.0, 20.0, 3.0, 250.0),
            PlatformDesc::moving_vertical(100.0, -1600.0, 80.0, 20.0, 3.0, 150.0),
            PlatformDesc::fixed(350.0, -1650.0, 100.0, 20.0),
            PlatformDesc::fixed(450.0, -1650.0, 100.0, 20.0),
            PlatformDesc::fixed(750.0, -1700.0, 50.0, 20.0),
            PlatformDesc::moving_horizontal(850.0, -1750.0, 120.0, 20.0, 2.0, 200.0),
            PlatformDesc::fixed(950.0, -1800.0, 200.0, 40.0),
            PlatformDesc::fixed(1100.0, -1900.0, 100.0, 40.0),
            PlatformDesc::moving_vertical(1250.0, -2000.0, 70.0, 20.0, 3.0, 100.0),
            PlatformDesc::fixed(1400.0, -2150.0, 80.0, 20.0),
            PlatformDesc::fixed(1600.0, -2250.0, 150.0, 20.0),
            PlatformDesc::moving_horizontal(1800.0, -2300.0, 100.0, 20.0, 3.0, 200.0),
            PlatformDesc::win(2100.0, -2400.0, 50.0, 20.0),
        ];

        let saws = vec![
            SawDesc { x: 600.0, y: 300.0 },
            SawDesc { x: 400.0, y: 300.0 },
            SawDesc { x: 700.0, y: -100.0 },
            SawDesc { x: 1100.0, y: 200.0 },
            SawDesc { x: 400.0, y: -300.0 },
            SawDesc { x: 250.0, y: -450.0 },
            SawDesc { x: 1000.0, y: -400.0 },
            SawDesc { x: 1600.0, y: -700.0 },
            SawDesc { x: 550.0, y: -1350.0 },
            SawDesc { x: 600.0, y: -1650.0 },
            SawDesc { x: 900.0, y: -1850.0 },
            SawDesc { x: 1500.0, y: -2250.0 },
        ];

        let enemies = vec![EnemyDesc {
            x: 50.0,
            y: 250.0,
            move_speed: 3.0,
            move_range: 250.0,
        }];

        let hearts = vec![ItemDesc { x: -820.0, y: 250.0 }];

        let ammo = vec![
            ItemDesc { x: -270.0, y: 350.0 },
            ItemDesc { x: -570.0, y: 300.0 },
        ];

        Self {
            player_spawn: Vec2::new(200.0, 300.0),
            platforms,
            saws,
            enemies,
            hearts,
            ammo,
        }
    }
}
