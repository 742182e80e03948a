//! Sprite-sheet frame cycling
//!
//! Animated entities advance through a fixed number of frames, one step
//! every `delay` ticks. This is a plain modular counter, shared by the
//! player, the enemy, the seeds and the portal.

use serde::{Deserialize, Serialize};

/// How frames are laid out in the sheet image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SheetLayout {
    /// One horizontal row of frames.
    Strip,
    /// Row-major grid, e.g. the 3x2 portal sheet.
    Grid { cols: u32, rows: u32 },
}

impl SheetLayout {
    /// Top-left corner (in frame units) of the given frame index.
    pub fn cell(&self, frame: u32) -> (u32, u32) {
        match self {
            SheetLayout::Strip => (frame, 0),
            SheetLayout::Grid { cols, .. } => (frame % cols, frame / cols),
        }
    }
}

/// A modular frame counter with a tick-based delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCycle {
    pub frame: u32,
    pub count: u32,
    pub delay: u32,
    timer: u32,
}

impl FrameCycle {
    pub fn new(count: u32, delay: u32) -> Self {
        Self {
            frame: 0,
            count,
            delay,
            timer: 0,
        }
    }

    /// Advance one tick; the frame wraps modulo `count` every `delay` ticks.
    pub fn advance(&mut self) {
        self.timer += 1;
        if self.timer >= self.delay {
            self.timer = 0;
            self.frame = (self.frame + 1) % self.count.max(1);
        }
    }

    /// Restart from frame 0. Called when an animation state changes so the
    /// new cycle doesn't begin mid-sequence.
    pub fn rewind(&mut self) {
        self.frame = 0;
        self.timer = 0;
    }
}

/// Everything the renderer needs to slice one frame out of a sheet.
#[derive(Debug, Clone, Copy)]
pub struct SpriteSheet {
    pub layout: SheetLayout,
    pub frame_w: f32,
    pub frame_h: f32,
}

impl SpriteSheet {
    pub fn strip(frame_w: f32, frame_h: f32) -> Self {
        Self {
            layout: SheetLayout::Strip,
            frame_w,
            frame_h,
        }
    }

    pub fn grid(cols: u32, rows: u32, frame_w: f32, frame_h: f32) -> Self {
        Self {
            layout: SheetLayout::Grid { cols, rows },
            frame_w,
            frame_h,
        }
    }

    /// Source rectangle (x, y, w, h) in sheet pixels for a frame index.
    pub fn source_rect(&self, frame: u32) -> (f32, f32, f32, f32) {
        let (col, row) = self.layout.cell(frame);
        (
            col as f32 * self.frame_w,
            row as f32 * self.frame_h,
            self.frame_w,
            self.frame_h,
        )
    }
}
