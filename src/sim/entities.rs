//! World entities without behavior of their own
//!
//! Platforms and clouds are static boxes; seeds and the portal carry a
//! frame cycle and a participation flag. A collected seed and an inactive
//! portal are skipped by both drawing and collision.

use crate::anim::FrameCycle;
use crate::level::{CloudSpec, PlatformSpec, PortalSpec, SeedSpec, Size};
use crate::math::Vec2;

use super::collision::Aabb;

#[derive(Debug, Clone)]
pub struct Platform {
    pub id: String,
    pub pos: Vec2,
    pub size: Size,
}

impl Platform {
    pub fn from_spec(spec: &PlatformSpec) -> Self {
        Self {
            id: spec.id.clone(),
            pos: spec.pos,
            size: spec.size,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size.w, self.size.h)
    }
}

/// Decoration only; never collides.
#[derive(Debug, Clone)]
pub struct Cloud {
    pub id: String,
    pub pos: Vec2,
}

impl Cloud {
    pub fn from_spec(spec: &CloudSpec) -> Self {
        Self {
            id: spec.id.clone(),
            pos: spec.pos,
        }
    }
}

pub const SEED_SIZE: f32 = 64.0;

#[derive(Debug, Clone)]
pub struct Seed {
    pub id: String,
    pub pos: Vec2,
    pub collected: bool,
    pub cycle: FrameCycle,
}

impl Seed {
    pub fn from_spec(spec: &SeedSpec) -> Self {
        Self {
            id: spec.id.clone(),
            pos: spec.pos,
            collected: false,
            cycle: FrameCycle::new(4, 60),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, SEED_SIZE, SEED_SIZE)
    }

    pub fn reset(&mut self, spec: &SeedSpec) {
        self.pos = spec.pos;
        self.collected = false;
        self.cycle.rewind();
    }
}

#[derive(Debug, Clone)]
pub struct Portal {
    pub id: String,
    pub pos: Vec2,
    pub size: Size,
    pub active: bool,
    pub cycle: FrameCycle,
}

impl Portal {
    pub fn from_spec(spec: &PortalSpec) -> Self {
        Self {
            id: spec.id.clone(),
            pos: spec.pos,
            size: spec.size,
            active: false,
            // 3x2 sheet, six frames
            cycle: FrameCycle::new(6, 8),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size.w, self.size.h)
    }

    pub fn reset(&mut self, spec: &PortalSpec) {
        self.pos = spec.pos;
        self.active = false;
        self.cycle.rewind();
    }
}
