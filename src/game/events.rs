//! Event queues for tick side effects.
//!
//! Systems never call the audio or logging layers directly; they push an
//! event and the driver loop drains the queues after the tick. That keeps
//! the simulation a pure state transition over world + input, which is what
//! makes it testable without a window or a sound device.

use macroquad::prelude::Vec2;

use super::components::Kind;
use super::entity::Entity;

/// A queue for events of a single type, drained once per frame.
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

    /// Drain all events in send order, leaving the queue empty.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// All event queues produced by one tick.
pub struct Events {
    /// The player fired. Consumed by the audio collaborator.
    pub shots: EventQueue<ShotFired>,

    /// A combatant was removed by collision pruning. Consumed by the driver
    /// loop for debug logging.
    pub destroyed: EventQueue<Destroyed>,
}

impl Events {
    pub fn new() -> Self {
        Self {
            shots: EventQueue::new(),
            destroyed: EventQueue::new(),
        }
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}

/// The player fired a shot.
#[derive(Debug, Clone, Copy)]
pub struct ShotFired {
    /// Where the projectile spawned.
    pub at: Vec2,
}

/// A combatant was pruned after colliding.
#[derive(Debug, Clone, Copy)]
pub struct Destroyed {
    pub entity: Entity,
    pub kind: Kind,
    pub at: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order_and_empties() {
        let mut queue: EventQueue<u32> = EventQueue::new();
        queue.send(1);
        queue.send(2);
        queue.send(3);
        assert_eq!(queue.len(), 3);

        let drained: Vec<u32> = queue.drain().collect();
        assert_eq!(drained, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }
}
