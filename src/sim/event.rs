//! Simulation events
//!
//! Entity updates never reach into each other's state. Instead they push
//! typed events, and `Sim::tick` applies them centrally at the end of the
//! frame: score changes, the stomp bounce written into the player, and the
//! full reset all happen in exactly one place.

/// A queue for events of a single type.
/// Events are collected during the tick and drained at the apply step.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all sim events.
#[derive(Debug, Default)]
pub struct Events {
    /// A seed was picked up
    pub seed_collected: EventQueue<SeedCollected>,

    /// The player landed on the enemy's upper half
    pub enemy_stomped: EventQueue<EnemyStomped>,

    /// Lethal contact or a fall below the canvas
    pub player_died: EventQueue<PlayerDied>,

    /// All seeds gathered; the portal switched on
    pub portal_activated: EventQueue<PortalActivated>,

    /// The scroll gate was reached with seeds still missing
    pub gate_refused: EventQueue<GateRefused>,

    /// The player touched the active portal
    pub level_completed: EventQueue<LevelCompleted>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every queue. Called after the apply step.
    pub fn clear_all(&mut self) {
        self.seed_collected.clear();
        self.enemy_stomped.clear();
        self.player_died.clear();
        self.portal_activated.clear();
        self.gate_refused.clear();
        self.level_completed.clear();
    }
}

// =============================================================================
// Event Types
// =============================================================================

#[derive(Debug, Clone)]
pub struct SeedCollected {
    /// Stable id from the level layout
    pub seed_id: String,
    pub points: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct EnemyStomped {
    pub bonus: u32,
    /// Upward speed handed to the player by the apply step
    pub bounce: f32,
}

/// Why the player died.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    EnemyContact,
    FellIntoGap,
}

#[derive(Debug, Clone, Copy)]
pub struct PlayerDied {
    pub cause: DeathCause,
}

#[derive(Debug, Clone, Copy)]
pub struct PortalActivated;

#[derive(Debug, Clone, Copy)]
pub struct GateRefused {
    /// Horizontal pushback applied to the player
    pub pushback: f32,
}

/// Contact with the active portal. The final score is read off the sim at
/// the apply step, after this tick's pickups have been counted.
#[derive(Debug, Clone, Copy)]
pub struct LevelCompleted;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue_drain() {
        let mut queue: EventQueue<u32> = EventQueue::new();
        queue.send(1);
        queue.send(2);
        assert_eq!(queue.len(), 2);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear_all() {
        let mut events = Events::new();
        events.player_died.send(PlayerDied {
            cause: DeathCause::FellIntoGap,
        });
        events.enemy_stomped.send(EnemyStomped {
            bonus: 100,
            bounce: 5.0,
        });
        events.clear_all();
        assert!(events.player_died.is_empty());
        assert!(events.enemy_stomped.is_empty());
    }
}
