//! Simulation core
//!
//! One `Sim` owns the whole world and advances it a tick at a time from a
//! sampled input frame. There is no rendering or I/O in here; the binary
//! drives `tick` once per display frame and draws whatever state it finds.
//!
//! Tick order is fixed: scroll sync, jump intent, player integration,
//! enemy patrol and contact, seed pickups, portal, movement/scroll,
//! platform landings, tile-granular ground collision, the completion
//! gate, animation, then the central event-apply step. Only the apply
//! step mutates score, hands the stomp bounce to the player, or performs
//! the full reset.

pub mod collision;
pub mod enemy;
pub mod entities;
pub mod event;
pub mod ground;
pub mod player;

pub use collision::{Aabb, Contact};
pub use event::Events;

use crate::level::Level;

use enemy::Enemy;
use entities::{Cloud, Platform, Portal, Seed};
use event::{DeathCause, EnemyStomped, GateRefused, LevelCompleted, PlayerDied, PortalActivated, SeedCollected};
use ground::Ground;
use player::Player;

/// Sampled keyboard state for one tick. `jump` is edge-triggered (pressed
/// this frame); the rest are held.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub walk_front: bool,
}

/// A user-facing moment the binary may want to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The level was completed with this final score.
    Completed { score: u32 },
    /// The scroll gate was reached with seeds still missing.
    SeedsMissing,
}

/// Vertical tolerance for "standing on" a platform while walking.
const PLATFORM_STAND_SLACK: f32 = 10.0;

/// Pushback applied when the completion gate refuses passage.
const GATE_PUSHBACK: f32 = 100.0;

pub struct Sim {
    pub level: Level,
    pub ground: Ground,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub clouds: Vec<Cloud>,
    pub seeds: Vec<Seed>,
    pub enemy: Option<Enemy>,
    pub portal: Option<Portal>,
    pub score: u32,
    pub scroll_offset: f32,
    pub events: Events,
    notice: Option<Notice>,
    /// Full resets performed so far (death or completion).
    pub resets: u32,
}

impl Sim {
    pub fn new(level: Level) -> Self {
        let ground = Ground::from_spec(&level.ground, level.canvas.height);
        let player = Player::from_spec(&level.player);
        let platforms = level.platforms.iter().map(Platform::from_spec).collect();
        let clouds = level.clouds.iter().map(Cloud::from_spec).collect();
        let seeds = level.seeds.iter().map(Seed::from_spec).collect();
        let enemy = level.enemy.as_ref().map(Enemy::from_spec);
        let portal = level.portal.as_ref().map(Portal::from_spec);

        Self {
            level,
            ground,
            player,
            platforms,
            clouds,
            seeds,
            enemy,
            portal,
            score: 0,
            scroll_offset: 0.0,
            events: Events::new(),
            notice: None,
            resets: 0,
        }
    }

    pub fn seeds_collected(&self) -> usize {
        self.seeds.iter().filter(|s| s.collected).count()
    }

    pub fn all_seeds_collected(&self) -> bool {
        self.seeds.iter().all(|s| s.collected)
    }

    /// Take the pending user-facing notice, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Advance the world by one tick.
    pub fn tick(&mut self, input: &InputFrame) {
        let physics = self.level.physics;
        let canvas_h = self.level.canvas.height;

        self.ground.sync_scroll(self.scroll_offset);

        if input.jump {
            let moving = input.left != input.right;
            self.player.try_jump(&physics, moving);
        }

        self.player.integrate(&physics, canvas_h);

        // Enemy patrol and contact
        if let Some(enemy) = &mut self.enemy {
            enemy.update(&self.ground);
            match enemy.contact(&self.player.aabb(), self.player.vel.y) {
                Contact::Stomp => self.events.enemy_stomped.send(EnemyStomped {
                    bonus: self.level.scoring.stomp_bonus,
                    bounce: physics.stomp_bounce,
                }),
                Contact::Lethal => self.events.player_died.send(PlayerDied {
                    cause: DeathCause::EnemyContact,
                }),
                Contact::None => {}
            }
        }

        // Seed pickups
        let player_box = self.player.aabb();
        for seed in &mut self.seeds {
            if seed.collected {
                continue;
            }
            seed.cycle.advance();
            if player_box.overlaps(&seed.aabb()) {
                seed.collected = true;
                self.events.seed_collected.send(SeedCollected {
                    seed_id: seed.id.clone(),
                    points: self.level.scoring.seed_points,
                });
            }
        }

        // Portal activation and completion. An inactive portal is a ghost:
        // no animation, no collision.
        let all_collected = self.all_seeds_collected();
        if let Some(portal) = &mut self.portal {
            if all_collected && !portal.active {
                portal.active = true;
                self.events.portal_activated.send(PortalActivated);
            }
            if portal.active {
                portal.cycle.advance();
                if player_box.overlaps(&portal.aabb()) {
                    self.events.level_completed.send(LevelCompleted);
                }
            }
        }

        self.handle_movement(input);
        self.resolve_platform_landings();
        self.resolve_ground(canvas_h);

        // Completion gate: past the threshold the level only ends through
        // the portal, so missing seeds push the player back.
        if let Some(threshold) = self.level.completion_scroll {
            if self.scroll_offset >= threshold && !all_collected {
                self.events.gate_refused.send(GateRefused {
                    pushback: GATE_PUSHBACK,
                });
            }
        }

        self.player.animate(input.walk_front);

        self.apply_events();
    }

    /// Steer the player inside the camera band, or scroll the world when
    /// the band edge is reached. Leftward scroll stops at zero.
    fn handle_movement(&mut self, input: &InputFrame) {
        let physics = self.level.physics;
        let band = self.level.camera;

        if input.right && self.player.pos.x < band.right {
            if self.walkable_at(self.player.pos.x + physics.move_speed) {
                self.player.steer(&physics, 1.0);
            } else {
                self.player.steer(&physics, 0.0);
            }
        } else if input.left && self.player.pos.x > band.left && self.scroll_offset == 0.0 {
            if self.walkable_at(self.player.pos.x - physics.move_speed) {
                self.player.steer(&physics, -1.0);
            } else {
                self.player.steer(&physics, 0.0);
            }
        } else {
            self.player.steer(&physics, 0.0);

            if input.right {
                self.scroll_world(physics.scroll_speed);
            } else if input.left && self.scroll_offset > 0.0 {
                self.scroll_world(-physics.scroll_speed.min(self.scroll_offset));
            }
        }
    }

    /// Is there support (a ground tile or a platform underfoot) if the
    /// player's left edge moved to `next_x`? Walking refuses to step off
    /// into a gap; jumps still cross them.
    fn walkable_at(&self, next_x: f32) -> bool {
        let w = self.player.size.w;
        if self.ground.has_ground_at(next_x) || self.ground.has_ground_at(next_x + w) {
            return true;
        }
        let feet = self.player.pos.y + self.player.size.h;
        self.platforms.iter().any(|p| {
            next_x + w > p.pos.x
                && next_x < p.pos.x + p.size.w
                && (feet - p.pos.y).abs() < PLATFORM_STAND_SLACK
        })
    }

    /// Shift every non-player entity by the scroll delta, keeping relative
    /// spacing constant. The player's screen position stays put; the world
    /// moves the other way.
    fn scroll_world(&mut self, delta: f32) {
        self.scroll_offset += delta;
        let dx = -delta;

        for platform in &mut self.platforms {
            platform.pos.x += dx;
        }
        for cloud in &mut self.clouds {
            cloud.pos.x += dx;
        }
        for seed in &mut self.seeds {
            seed.pos.x += dx;
        }
        if let Some(enemy) = &mut self.enemy {
            enemy.shift(dx);
        }
        if let Some(portal) = &mut self.portal {
            portal.pos.x += dx;
        }
    }

    /// Land on any platform whose top the player's feet cross this tick.
    fn resolve_platform_landings(&mut self) {
        let player_box = self.player.aabb();
        let vel_y = self.player.vel.y;
        let landing = self
            .platforms
            .iter()
            .find(|p| player_box.lands_on(vel_y, &p.aabb()))
            .map(|p| p.pos.y);
        if let Some(top) = landing {
            self.player.land_on(top);
        }
    }

    /// Tile-granular ground support; a gap under both edges lets the
    /// player fall, and hitting the canvas bottom without support kills.
    fn resolve_ground(&mut self, canvas_height: f32) {
        let left = self.player.pos.x;
        let right = self.player.pos.x + self.player.size.w;
        let supported = self.ground.has_ground_at(left) || self.ground.has_ground_at(right);
        let feet = self.player.pos.y + self.player.size.h;

        if supported && feet >= self.ground.surface_y {
            self.player.land_on(self.ground.surface_y);
        } else if !supported && feet >= canvas_height {
            self.events.player_died.send(PlayerDied {
                cause: DeathCause::FellIntoGap,
            });
        }
    }

    /// Central application of this tick's events. Score, the stomp bounce
    /// and the full reset happen here and nowhere else.
    fn apply_events(&mut self) {
        for collected in self.events.seed_collected.drain() {
            self.score += collected.points;
        }

        let mut bounce = None;
        for stomp in self.events.enemy_stomped.drain() {
            self.score += stomp.bonus;
            bounce = Some(stomp.bounce);
        }
        if let Some(bounce) = bounce {
            if let Some(enemy) = &mut self.enemy {
                enemy.dead = true;
            }
            self.player.vel.y = -bounce;
        }

        for refused in self.events.gate_refused.drain() {
            self.player.pos.x -= refused.pushback;
            self.notice = Some(Notice::SeedsMissing);
        }

        let completed = !self.events.level_completed.is_empty();
        let died = !self.events.player_died.is_empty();
        if completed {
            self.notice = Some(Notice::Completed { score: self.score });
        }

        self.events.clear_all();

        if completed || died {
            self.reset();
        }
    }

    /// Full literal overwrite from the level layout: score and scroll to
    /// zero, every entity back to its spec position, every flag cleared.
    pub fn reset(&mut self) {
        self.score = 0;
        self.scroll_offset = 0.0;
        self.ground.sync_scroll(0.0);
        self.player.reset(&self.level.player);

        for platform in &mut self.platforms {
            if let Some(spec) = self.level.platforms.iter().find(|s| s.id == platform.id) {
                platform.pos = spec.pos;
            }
        }
        for cloud in &mut self.clouds {
            if let Some(spec) = self.level.clouds.iter().find(|s| s.id == cloud.id) {
                cloud.pos = spec.pos;
            }
        }
        for seed in &mut self.seeds {
            if let Some(spec) = self.level.seeds.iter().find(|s| s.id == seed.id) {
                seed.reset(spec);
            }
        }
        if let (Some(enemy), Some(spec)) = (&mut self.enemy, self.level.enemy.as_ref()) {
            enemy.reset(spec);
        }
        if let (Some(portal), Some(spec)) = (&mut self.portal, self.level.portal.as_ref()) {
            portal.reset(spec);
        }

        self.events.clear_all();
        self.resets += 1;
    }
}
