//! Player physics and the movement-state machine
//!
//! Vertical motion is the only accumulated quantity: gravity adds to the
//! velocity every airborne tick and landing zeroes it. Horizontal velocity
//! is set directly from held input (optionally damped by a friction factor
//! when nothing is held).
//!
//! The animation selector is an explicit tagged-state machine instead of a
//! pile of booleans: one pure function maps the tick's movement facts to a
//! state, and the frame cycle rewinds whenever the state changes.

use crate::anim::FrameCycle;
use crate::level::{Physics, PlayerSpec, Size};
use crate::math::Vec2;

use super::collision::Aabb;

/// Ticks of stillness before a side-facing idle falls back to the front
/// idle (200 s at 60 ticks/s).
pub const SIDE_IDLE_TICKS: u32 = 200 * 60;

/// Horizontal speed below which the walk cycle is not worth showing.
const WALK_THRESHOLD: f32 = 0.5;

/// Animation states for the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveState {
    Idle,
    SideIdle,
    Walk,
    WalkFront,
    JumpSideways,
    JumpFront,
}

impl MoveState {
    /// Frame count and delay for each state's sheet.
    pub fn cycle(self) -> FrameCycle {
        match self {
            MoveState::Idle => FrameCycle::new(8, 60),
            MoveState::SideIdle => FrameCycle::new(10, 60),
            MoveState::Walk => FrameCycle::new(4, 15),
            MoveState::WalkFront => FrameCycle::new(4, 60),
            MoveState::JumpSideways | MoveState::JumpFront => FrameCycle::new(1, 1),
        }
    }
}

/// The movement facts a single tick produces, fed to the state selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveFlags {
    pub moving_horizontally: bool,
    pub walking_front: bool,
    pub airborne: bool,
}

/// Select the next animation state. Pure: the caller owns the idle timer
/// and the has-moved latch.
pub fn select_state(flags: MoveFlags, jump: JumpKind, idle_ticks: u32, has_moved: bool) -> MoveState {
    if flags.airborne {
        return match jump {
            JumpKind::Front => MoveState::JumpFront,
            JumpKind::Sideways => MoveState::JumpSideways,
        };
    }
    if flags.walking_front {
        return MoveState::WalkFront;
    }
    if flags.moving_horizontally {
        return MoveState::Walk;
    }
    if has_moved && idle_ticks < SIDE_IDLE_TICKS {
        MoveState::SideIdle
    } else {
        MoveState::Idle
    }
}

/// Which jump sheet to show while airborne. Chosen at takeoff from whether
/// the player was moving horizontally, and kept until landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Front,
    Sideways,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Size,
    pub facing_right: bool,

    pub state: MoveState,
    pub cycle: FrameCycle,
    jump_kind: JumpKind,
    idle_ticks: u32,
    has_moved: bool,
}

impl Player {
    pub fn from_spec(spec: &PlayerSpec) -> Self {
        let state = MoveState::Idle;
        Self {
            pos: spec.spawn,
            vel: Vec2::ZERO,
            size: spec.size,
            facing_right: true,
            state,
            cycle: state.cycle(),
            jump_kind: JumpKind::Front,
            idle_ticks: 0,
            has_moved: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size.w, self.size.h)
    }

    /// Standing or at the apex: jumps are only allowed from vertical rest.
    pub fn grounded(&self) -> bool {
        self.vel.y == 0.0
    }

    /// Apply velocity, then gravity unless the next step would pass the
    /// canvas bottom, in which case snap to it with zeroed fall speed.
    pub fn integrate(&mut self, physics: &Physics, canvas_height: f32) {
        self.pos += self.vel;

        if self.pos.y + self.size.h + self.vel.y <= canvas_height {
            self.vel.y += physics.gravity;
        } else {
            self.vel.y = 0.0;
            self.pos.y = canvas_height - self.size.h;
        }
    }

    /// Snap the feet onto a surface at `top_y` and stop falling.
    pub fn land_on(&mut self, top_y: f32) {
        self.vel.y = 0.0;
        self.pos.y = top_y - self.size.h;
    }

    /// Start a jump if standing. The jump sheet is picked from the
    /// current horizontal motion.
    pub fn try_jump(&mut self, physics: &Physics, moving_horizontally: bool) -> bool {
        if !self.grounded() {
            return false;
        }
        self.vel.y = -physics.jump_speed;
        self.jump_kind = if moving_horizontally {
            JumpKind::Sideways
        } else {
            JumpKind::Front
        };
        true
    }

    /// Set horizontal velocity from held input, or damp it when idle.
    pub fn steer(&mut self, physics: &Physics, dir: f32) {
        if dir != 0.0 {
            self.vel.x = dir * physics.move_speed;
            self.facing_right = dir > 0.0;
            self.has_moved = true;
        } else {
            match physics.friction {
                Some(f) => self.vel.x *= f,
                None => self.vel.x = 0.0,
            }
        }
    }

    /// Advance the state machine and the frame cycle for this tick.
    pub fn animate(&mut self, walking_front: bool) {
        let flags = MoveFlags {
            moving_horizontally: self.vel.x.abs() > WALK_THRESHOLD,
            walking_front,
            airborne: !self.grounded(),
        };

        if flags.airborne || flags.moving_horizontally || flags.walking_front {
            self.idle_ticks = 0;
        } else {
            self.idle_ticks = self.idle_ticks.saturating_add(1);
        }
        if walking_front {
            self.has_moved = true;
        }

        let next = select_state(flags, self.jump_kind, self.idle_ticks, self.has_moved);
        if next != self.state {
            self.state = next;
            self.cycle = next.cycle();
        }
        self.cycle.advance();
    }

    /// Restore spawn state. Animation latches clear too so the front idle
    /// shows again after a reset.
    pub fn reset(&mut self, spec: &PlayerSpec) {
        self.pos = spec.spawn;
        self.vel = Vec2::ZERO;
        self.facing_right = true;
        self.state = MoveState::Idle;
        self.cycle = self.state.cycle();
        self.jump_kind = JumpKind::Front;
        self.idle_ticks = 0;
        self.has_moved = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    fn player() -> (Player, Physics, f32) {
        let level = Level::demo();
        (
            Player::from_spec(&level.player),
            level.physics,
            level.canvas.height,
        )
    }

    #[test]
    fn test_gravity_accumulates_until_floor() {
        let (mut p, physics, canvas_h) = player();
        p.integrate(&physics, canvas_h);
        assert_eq!(p.vel.y, 1.0);
        p.integrate(&physics, canvas_h);
        assert_eq!(p.vel.y, 2.0);
    }

    #[test]
    fn test_floor_clamp_zeroes_fall() {
        let (mut p, physics, canvas_h) = player();
        p.pos.y = canvas_h - p.size.h - 1.0;
        p.vel.y = 10.0;
        p.integrate(&physics, canvas_h);
        assert_eq!(p.vel.y, 0.0);
        assert_eq!(p.pos.y, canvas_h - p.size.h);
    }

    #[test]
    fn test_player_never_sinks_below_floor_line() {
        let (mut p, physics, canvas_h) = player();
        for _ in 0..600 {
            p.integrate(&physics, canvas_h);
            assert!(p.pos.y <= canvas_h - p.size.h);
        }
    }

    #[test]
    fn test_jump_only_from_rest() {
        let (mut p, physics, canvas_h) = player();
        p.pos.y = canvas_h - p.size.h;
        p.vel.y = 0.0;
        assert!(p.try_jump(&physics, false));
        assert_eq!(p.vel.y, -physics.jump_speed);
        // Mid-air: a second jump is refused.
        assert!(!p.try_jump(&physics, false));
    }

    #[test]
    fn test_steer_sets_velocity_directly() {
        let (mut p, physics, _) = player();
        p.steer(&physics, 1.0);
        assert_eq!(p.vel.x, physics.move_speed);
        assert!(p.facing_right);
        p.steer(&physics, -1.0);
        assert_eq!(p.vel.x, -physics.move_speed);
        assert!(!p.facing_right);
        p.steer(&physics, 0.0);
        assert_eq!(p.vel.x, 0.0);
    }

    #[test]
    fn test_friction_damps_instead_of_zeroing() {
        let (mut p, mut physics, _) = player();
        physics.friction = Some(0.8);
        p.steer(&physics, 1.0);
        p.steer(&physics, 0.0);
        assert_eq!(p.vel.x, physics.move_speed * 0.8);
        p.steer(&physics, 0.0);
        assert_eq!(p.vel.x, physics.move_speed * 0.8 * 0.8);
    }

    #[test]
    fn test_state_selector() {
        let still = MoveFlags::default();
        assert_eq!(select_state(still, JumpKind::Front, 0, false), MoveState::Idle);
        // After moving, stillness shows the side idle first...
        assert_eq!(select_state(still, JumpKind::Front, 10, true), MoveState::SideIdle);
        // ...and falls back to the front idle after the timeout.
        assert_eq!(
            select_state(still, JumpKind::Front, SIDE_IDLE_TICKS, true),
            MoveState::Idle
        );

        let walking = MoveFlags {
            moving_horizontally: true,
            ..Default::default()
        };
        assert_eq!(select_state(walking, JumpKind::Front, 0, true), MoveState::Walk);

        let fronting = MoveFlags {
            walking_front: true,
            moving_horizontally: true,
            ..Default::default()
        };
        assert_eq!(select_state(fronting, JumpKind::Front, 0, true), MoveState::WalkFront);

        let airborne = MoveFlags {
            airborne: true,
            ..Default::default()
        };
        assert_eq!(
            select_state(airborne, JumpKind::Sideways, 0, true),
            MoveState::JumpSideways
        );
        assert_eq!(
            select_state(airborne, JumpKind::Front, 0, true),
            MoveState::JumpFront
        );
    }

    #[test]
    fn test_jump_kind_follows_takeoff_motion() {
        let (mut p, physics, canvas_h) = player();
        p.pos.y = canvas_h - p.size.h;

        p.steer(&physics, 1.0);
        p.try_jump(&physics, true);
        p.animate(false);
        assert_eq!(p.state, MoveState::JumpSideways);

        p.reset(&Level::demo().player);
        p.pos.y = canvas_h - p.size.h;
        p.try_jump(&physics, false);
        p.animate(false);
        assert_eq!(p.state, MoveState::JumpFront);
    }

    #[test]
    fn test_state_change_rewinds_cycle() {
        let (mut p, physics, _) = player();
        // Let the idle cycle advance a bit.
        for _ in 0..120 {
            p.animate(false);
        }
        assert!(p.cycle.frame > 0);
        p.steer(&physics, 1.0);
        p.animate(false);
        assert_eq!(p.state, MoveState::Walk);
        assert_eq!(p.cycle.frame, 0);
    }
}
