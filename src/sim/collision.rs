//! Axis-aligned bounding-box checks
//!
//! Every collision in the game is an AABB overlap recomputed from scratch
//! each tick. At this entity count (a dozen boxes) that is O(entities) per
//! frame and nothing smarter is warranted.

use crate::math::Vec2;

/// An axis-aligned box, position at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(pos: Vec2, w: f32, h: f32) -> Self {
        Self { pos, w, h }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.h
    }

    /// Strict overlap on both axes.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Would a box falling with `vel_y` land on top of `other` this tick?
    /// True when the bottom is above the target's top now and at or below
    /// it after the velocity is applied, with horizontal overlap.
    pub fn lands_on(&self, vel_y: f32, other: &Aabb) -> bool {
        self.bottom() <= other.top()
            && self.bottom() + vel_y >= other.top()
            && self.right() > other.left()
            && self.left() < other.right()
    }
}

/// Outcome of player-versus-enemy contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    None,
    /// Falling onto the enemy's upper half: the enemy dies.
    Stomp,
    /// Any other overlap: the player dies.
    Lethal,
}

/// Classify an overlap between the player and an enemy. A stomp requires
/// the player to be falling with its bottom edge above the enemy's
/// vertical midline.
pub fn classify_contact(player: &Aabb, player_vel_y: f32, enemy: &Aabb) -> Contact {
    if !player.overlaps(enemy) {
        return Contact::None;
    }
    if player_vel_y > 0.0 && player.bottom() < enemy.top() + enemy.h / 2.0 {
        Contact::Stomp
    } else {
        Contact::Lethal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), w, h)
    }

    #[test]
    fn test_overlap_basic() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&boxed(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&boxed(20.0, 0.0, 10.0, 10.0)));
        // Edge contact is not overlap
        assert!(!a.overlaps(&boxed(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_seed_pickup_example() {
        // Seed at (500,400) sized 64, player box spanning 480..544 x 380..444.
        let seed = boxed(500.0, 400.0, 64.0, 64.0);
        let player = boxed(480.0, 380.0, 64.0, 64.0);
        assert!(player.overlaps(&seed));
    }

    #[test]
    fn test_lands_on_requires_crossing_top() {
        let platform = boxed(600.0, 600.0, 100.0, 100.0);
        // Player bottom at 590, falling 15 px this tick: crosses the top.
        let player = boxed(620.0, 526.0, 64.0, 64.0);
        assert!(player.lands_on(15.0, &platform));
        // Falling too slowly to reach.
        assert!(!player.lands_on(5.0, &platform));
        // Already below the top: no landing.
        let low = boxed(620.0, 610.0, 64.0, 64.0);
        assert!(!low.lands_on(15.0, &platform));
        // No horizontal overlap.
        let aside = boxed(400.0, 526.0, 64.0, 64.0);
        assert!(!aside.lands_on(15.0, &platform));
    }

    #[test]
    fn test_stomp_requires_falling_onto_upper_half() {
        let enemy = boxed(300.0, 300.0, 64.0, 64.0);
        // Falling, bottom in the enemy's upper half.
        let above = boxed(300.0, 250.0, 64.0, 64.0);
        assert_eq!(classify_contact(&above, 5.0, &enemy), Contact::Stomp);
        // Same position but not falling.
        assert_eq!(classify_contact(&above, 0.0, &enemy), Contact::Lethal);
        // Falling but already too deep.
        let deep = boxed(300.0, 290.0, 64.0, 64.0);
        assert_eq!(classify_contact(&deep, 5.0, &enemy), Contact::Lethal);
        // No overlap at all.
        let far = boxed(100.0, 100.0, 64.0, 64.0);
        assert_eq!(classify_contact(&far, 5.0, &enemy), Contact::None);
    }
}
