//! Declarative level layouts
//!
//! A `Level` is the single source of truth for world construction AND for
//! reset: every positioned entity carries a stable string id, and the sim
//! restores state by looking spawn data up here rather than from positional
//! coordinate tables. Levels are stored as RON files (see `io`).

pub mod io;

pub use io::{load_level, save_level, LevelError};

use crate::math::Vec2;
use serde::{Deserialize, Serialize};

/// Fixed drawing-surface dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

/// Tuning constants for player movement, all in pixels per tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Physics {
    /// Added to vertical velocity each airborne tick.
    pub gravity: f32,
    /// Horizontal speed while a direction is held (set, not accumulated).
    pub move_speed: f32,
    /// Initial upward speed of a jump (stored positive).
    pub jump_speed: f32,
    /// World shift per tick while the player is pinned at a band edge.
    pub scroll_speed: f32,
    /// Upward speed granted by a stomp kill.
    pub stomp_bounce: f32,
    /// Optional horizontal damping applied when no direction is held.
    /// None means velocity is zeroed directly.
    #[serde(default)]
    pub friction: Option<f32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Scoring {
    pub seed_points: u32,
    pub stomp_bonus: u32,
}

/// Screen-relative band within which the player moves freely. At the right
/// edge further input scrolls the world instead; at the left edge likewise,
/// but only while scroll is positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraBand {
    pub left: f32,
    pub right: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub spawn: Vec2,
    pub size: Size,
}

/// The ground is a fixed-length run of tiles, each present or absent.
/// Collision against it is tile-granular by design: a coordinate maps to a
/// tile index framework-wide, never to a continuous collider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundSpec {
    pub tile_width: f32,
    pub height: f32,
    pub tiles: Vec<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub id: String,
    pub pos: Vec2,
    pub size: Size,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudSpec {
    pub id: String,
    pub pos: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSpec {
    pub id: String,
    pub pos: Vec2,
}

/// How the enemy walks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Patrol {
    /// Stay within `range/2` either side of the spawn x.
    HomeRadius { range: f32 },
    /// Walk until the next step would leave the current ground segment,
    /// then turn around.
    EdgeTurn,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpec {
    pub id: String,
    pub pos: Vec2,
    pub size: Size,
    pub speed: f32,
    pub patrol: Patrol,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalSpec {
    pub id: String,
    pub pos: Vec2,
    pub size: Size,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub canvas: Canvas,
    pub physics: Physics,
    pub scoring: Scoring,
    pub camera: CameraBand,
    /// If set, reaching this scroll offset without every seed collected
    /// refuses passage and pushes the player back.
    #[serde(default)]
    pub completion_scroll: Option<f32>,
    pub player: PlayerSpec,
    pub ground: GroundSpec,
    pub platforms: Vec<PlatformSpec>,
    pub clouds: Vec<CloudSpec>,
    pub seeds: Vec<SeedSpec>,
    pub enemy: Option<EnemySpec>,
    pub portal: Option<PortalSpec>,
}

impl Level {
    /// Y coordinate of the top of the ground tiles.
    pub fn ground_y(&self) -> f32 {
        self.canvas.height - self.ground.height
    }

    /// The built-in layout: a 50-tile run with five gaps, six platforms,
    /// seven seeds, a patrolling skull guarding the portal at the far end.
    pub fn demo() -> Self {
        let canvas = Canvas {
            width: 1280.0,
            height: 720.0,
        };
        let ground_y = canvas.height - 100.0;

        // Ground pattern: runs of tiles separated by gaps the player must
        // jump. Indices 5-7, 12-14, 20-24, 30-34 and 40-44 are holes.
        let tiles: Vec<bool> = (0..50)
            .map(|i| {
                i < 5
                    || (8..12).contains(&i)
                    || (15..20).contains(&i)
                    || (25..30).contains(&i)
                    || (35..40).contains(&i)
                    || i >= 45
            })
            .collect();

        let platforms = [
            (600.0, 600.0),
            (1300.0, 500.0),
            (2100.0, 600.0),
            (2300.0, 500.0),
            (3100.0, 500.0),
            (3300.0, 600.0),
        ]
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| PlatformSpec {
            id: format!("platform-{i}"),
            pos: Vec2::new(x, y),
            size: Size::new(100.0, 100.0),
        })
        .collect();

        let clouds = [
            (150.0, 100.0),
            (650.0, 150.0),
            (1250.0, 80.0),
            (1850.0, 120.0),
            (2450.0, 100.0),
            (3050.0, 140.0),
            (3550.0, 240.0),
        ]
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| CloudSpec {
            id: format!("cloud-{i}"),
            pos: Vec2::new(x, y),
        })
        .collect();

        let seeds = [
            (500.0, 400.0),
            (1000.0, 300.0),
            (1500.0, 400.0),
            (2000.0, 300.0),
            (2500.0, 400.0),
            (3000.0, 300.0),
            (3500.0, 400.0),
        ]
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| SeedSpec {
            id: format!("seed-{i}"),
            pos: Vec2::new(x, y),
        })
        .collect();

        // Portal sits past the last platform; the skull guards it.
        let portal_x = 3300.0 + 500.0;

        Level {
            name: "demo".into(),
            canvas,
            physics: Physics {
                gravity: 1.0,
                move_speed: 5.0,
                jump_speed: 25.0,
                scroll_speed: 5.0,
                stomp_bounce: 5.0,
                friction: None,
            },
            scoring: Scoring {
                seed_points: 20,
                stomp_bonus: 100,
            },
            camera: CameraBand {
                left: 100.0,
                right: 400.0,
            },
            completion_scroll: Some(4000.0),
            player: PlayerSpec {
                spawn: Vec2::new(100.0, 100.0),
                size: Size::new(64.0, 64.0),
            },
            ground: GroundSpec {
                tile_width: 100.0,
                height: 100.0,
                tiles,
            },
            platforms,
            clouds,
            seeds,
            enemy: Some(EnemySpec {
                id: "skull".into(),
                pos: Vec2::new(portal_x - 30.0, ground_y - 64.0),
                size: Size::new(64.0, 64.0),
                speed: 2.0,
                patrol: Patrol::HomeRadius { range: 100.0 },
            }),
            portal: Some(PortalSpec {
                id: "portal".into(),
                pos: Vec2::new(portal_x, ground_y - 96.0),
                size: Size::new(96.0, 96.0),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_ground_pattern_has_gaps() {
        let level = Level::demo();
        assert_eq!(level.ground.tiles.len(), 50);
        assert!(level.ground.tiles[0]);
        assert!(!level.ground.tiles[5]);
        assert!(!level.ground.tiles[7]);
        assert!(level.ground.tiles[8]);
        assert!(!level.ground.tiles[44]);
        assert!(level.ground.tiles[49]);
    }

    #[test]
    fn test_demo_ids_are_unique() {
        let level = Level::demo();
        let mut ids: Vec<&str> = level
            .platforms
            .iter()
            .map(|p| p.id.as_str())
            .chain(level.clouds.iter().map(|c| c.id.as_str()))
            .chain(level.seeds.iter().map(|s| s.id.as_str()))
            .collect();
        if let Some(e) = &level.enemy {
            ids.push(&e.id);
        }
        if let Some(p) = &level.portal {
            ids.push(&p.id);
        }
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_demo_portal_rests_on_ground() {
        let level = Level::demo();
        let portal = level.portal.as_ref().unwrap();
        assert_eq!(portal.pos.y + portal.size.h, level.ground_y());
        let enemy = level.enemy.as_ref().unwrap();
        assert_eq!(enemy.pos.y + enemy.size.h, level.ground_y());
    }
}
