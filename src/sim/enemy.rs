//! Enemy patrol
//!
//! Two patrol styles, picked per level: a banded walk around a home x, and
//! an edge-turner that reverses when the next step would leave the current
//! ground segment. Contact with the player is classified by the collision
//! module; the sim decides what a stomp or a lethal touch means.

use crate::anim::FrameCycle;
use crate::level::{EnemySpec, Patrol, Size};
use crate::math::Vec2;

use super::collision::{classify_contact, Aabb, Contact};
use super::ground::Ground;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: String,
    pub pos: Vec2,
    pub size: Size,
    pub speed: f32,
    pub patrol: Patrol,
    pub facing_right: bool,
    pub dead: bool,
    pub cycle: FrameCycle,
    /// Patrol anchor; shifts with the world scroll.
    base_x: f32,
}

impl Enemy {
    pub fn from_spec(spec: &EnemySpec) -> Self {
        Self {
            id: spec.id.clone(),
            pos: spec.pos,
            size: spec.size,
            speed: spec.speed,
            patrol: spec.patrol,
            facing_right: true,
            dead: false,
            cycle: FrameCycle::new(4, 60),
            base_x: spec.pos.x,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size.w, self.size.h)
    }

    /// Walk one tick. Dead enemies stay where they fell.
    pub fn update(&mut self, ground: &Ground) {
        if self.dead {
            return;
        }

        match self.patrol {
            Patrol::HomeRadius { range } => {
                let left_limit = self.base_x - range / 2.0;
                let right_limit = self.base_x + range / 2.0;

                let dir = if self.facing_right { 1.0 } else { -1.0 };
                self.pos.x += self.speed * dir;

                if self.pos.x < left_limit {
                    self.pos.x = left_limit;
                    self.facing_right = true;
                } else if self.pos.x > right_limit {
                    self.pos.x = right_limit;
                    self.facing_right = false;
                }

                if ground.has_ground_at(self.pos.x) {
                    self.pos.y = ground.surface_y - self.size.h;
                }
            }
            Patrol::EdgeTurn => {
                self.pos.y = ground.surface_y - self.size.h;

                if self.facing_right {
                    if !ground.has_ground_at(self.pos.x + self.size.w + self.speed) {
                        self.facing_right = false;
                    }
                } else if !ground.has_ground_at(self.pos.x - self.speed) {
                    self.facing_right = true;
                }

                let dir = if self.facing_right { 1.0 } else { -1.0 };
                self.pos.x += self.speed * dir;
            }
        }

        self.cycle.advance();
    }

    /// Classify contact with the player this tick. Dead enemies are inert.
    pub fn contact(&self, player: &Aabb, player_vel_y: f32) -> Contact {
        if self.dead {
            return Contact::None;
        }
        classify_contact(player, player_vel_y, &self.aabb())
    }

    /// Shift with the world scroll, anchor included, so the patrol band
    /// keeps its place relative to the terrain.
    pub fn shift(&mut self, dx: f32) {
        self.pos.x += dx;
        self.base_x += dx;
    }

    pub fn reset(&mut self, spec: &EnemySpec) {
        self.pos = spec.pos;
        self.base_x = spec.pos.x;
        self.facing_right = true;
        self.dead = false;
        self.cycle.rewind();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::GroundSpec;

    fn solid_ground(tiles: usize) -> Ground {
        Ground::from_spec(
            &GroundSpec {
                tile_width: 100.0,
                height: 100.0,
                tiles: vec![true; tiles],
            },
            720.0,
        )
    }

    fn enemy(x: f32, patrol: Patrol) -> Enemy {
        Enemy::from_spec(&EnemySpec {
            id: "skull".into(),
            pos: Vec2::new(x, 556.0),
            size: Size::new(64.0, 64.0),
            speed: 2.0,
            patrol,
        })
    }

    #[test]
    fn test_home_radius_stays_in_band() {
        let ground = solid_ground(50);
        let mut e = enemy(1000.0, Patrol::HomeRadius { range: 100.0 });
        for _ in 0..500 {
            e.update(&ground);
            assert!(e.pos.x >= 950.0 && e.pos.x <= 1050.0);
        }
    }

    #[test]
    fn test_home_radius_reverses_at_limits() {
        let ground = solid_ground(50);
        let mut e = enemy(1000.0, Patrol::HomeRadius { range: 100.0 });
        assert!(e.facing_right);
        // 26 steps of 2.0 overshoot the +50 limit and flip the direction.
        for _ in 0..26 {
            e.update(&ground);
        }
        assert!(!e.facing_right);
    }

    #[test]
    fn test_edge_turn_reverses_at_gap() {
        // Ground tiles 0..3 present, tile 3 missing: segment ends at x=300.
        let ground = Ground::from_spec(
            &GroundSpec {
                tile_width: 100.0,
                height: 100.0,
                tiles: vec![true, true, true, false, true],
            },
            720.0,
        );
        let mut e = enemy(200.0, Patrol::EdgeTurn);
        for _ in 0..200 {
            e.update(&ground);
            // Right edge never steps past the segment.
            assert!(e.pos.x + e.size.w <= 300.0 + e.speed);
            assert!(e.pos.x >= -e.speed);
        }
    }

    #[test]
    fn test_sits_on_ground_surface() {
        let ground = solid_ground(50);
        let mut e = enemy(1000.0, Patrol::EdgeTurn);
        e.update(&ground);
        assert_eq!(e.pos.y + e.size.h, ground.surface_y);
    }

    #[test]
    fn test_dead_enemy_is_inert() {
        let ground = solid_ground(50);
        let mut e = enemy(1000.0, Patrol::HomeRadius { range: 100.0 });
        e.dead = true;
        let before = e.pos;
        e.update(&ground);
        assert_eq!(e.pos, before);

        let player = Aabb::new(Vec2::new(1000.0, 500.0), 64.0, 64.0);
        assert_eq!(e.contact(&player, 5.0), Contact::None);
    }

    #[test]
    fn test_shift_moves_anchor_with_position() {
        let ground = solid_ground(50);
        let mut e = enemy(1000.0, Patrol::HomeRadius { range: 100.0 });
        e.shift(-500.0);
        for _ in 0..500 {
            e.update(&ground);
            assert!(e.pos.x >= 450.0 && e.pos.x <= 550.0);
        }
    }
}
