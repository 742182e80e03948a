//! Keyboard handling
//!
//! Raw macroquad key state is folded into named actions, and the actions
//! into one `InputFrame` per tick. The simulation never sees key codes.

use macroquad::prelude::{is_key_down, is_key_pressed, KeyCode};

use crate::sim::InputFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    WalkFront,
}

impl Action {
    /// Keys bound to this action. WASD and arrows both work.
    pub fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::MoveLeft => &[KeyCode::A, KeyCode::Left],
            Action::MoveRight => &[KeyCode::D, KeyCode::Right],
            Action::Jump => &[KeyCode::W, KeyCode::Space, KeyCode::Up],
            Action::WalkFront => &[KeyCode::S, KeyCode::Down],
        }
    }

    pub fn is_down(self) -> bool {
        self.keys().iter().any(|&k| is_key_down(k))
    }

    pub fn is_pressed(self) -> bool {
        self.keys().iter().any(|&k| is_key_pressed(k))
    }
}

/// Sample the keyboard for one tick. Jump is edge-triggered so holding
/// the key does not re-jump on landing.
pub fn sample() -> InputFrame {
    InputFrame {
        left: Action::MoveLeft.is_down(),
        right: Action::MoveRight.is_down(),
        jump: Action::Jump.is_pressed(),
        walk_front: Action::WalkFront.is_down(),
    }
}
