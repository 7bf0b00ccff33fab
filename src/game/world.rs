//! The stage world.
//!
//! Central container for all combatant state: the entity arena, one sparse
//! storage per component type, and a deferred despawn queue so systems can
//! remove entities mid-iteration without invalidating anything. Component
//! types are known at compile time; each gets a named field rather than a
//! type-erased map.

use macroquad::prelude::{vec2, Vec2};

use super::component::ComponentStorage;
use super::components::{Body, Kind, Patrol, Velocity};
use super::entity::{Entity, EntityAllocator};
use crate::tuning;

pub struct World {
    entities: EntityAllocator,

    /// Entities queued for removal at the next flush point.
    despawn_queue: Vec<Entity>,

    /// Position and extent. Present on every combatant.
    pub bodies: ComponentStorage<Body>,

    /// Combatant variant tag. Present on every combatant.
    pub kinds: ComponentStorage<Kind>,

    /// Per-tick displacement. Projectiles only.
    pub velocities: ComponentStorage<Velocity>,

    /// Patrol sweep state. Adversaries only.
    pub patrols: ComponentStorage<Patrol>,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: EntityAllocator::new(),
            despawn_queue: Vec::new(),
            bodies: ComponentStorage::new(),
            kinds: ComponentStorage::new(),
            velocities: ComponentStorage::new(),
            patrols: ComponentStorage::new(),
        }
    }

    // =========================================================================
    // Spawning
    // =========================================================================

    /// Spawn the player at the given center.
    pub fn spawn_player(&mut self, center: Vec2) -> Entity {
        let entity = self.entities.allocate();
        self.bodies.insert(
            entity,
            Body::new(center, vec2(tuning::PLAYER_SIZE, tuning::PLAYER_SIZE)),
        );
        self.kinds.insert(entity, Kind::Player);
        entity
    }

    /// Spawn one adversary at the given center, patrolling rightward.
    pub fn spawn_adversary(&mut self, center: Vec2) -> Entity {
        let entity = self.entities.allocate();
        self.bodies.insert(
            entity,
            Body::new(center, vec2(tuning::ADVERSARY_SIZE, tuning::ADVERSARY_SIZE)),
        );
        self.kinds.insert(entity, Kind::Adversary);
        self.patrols
            .insert(entity, Patrol::new(tuning::ADVERSARY_SPEED));
        entity
    }

    /// Spawn a projectile with a constant velocity.
    pub fn spawn_projectile(&mut self, center: Vec2, velocity: Vec2) -> Entity {
        let entity = self.entities.allocate();
        self.bodies.insert(
            entity,
            Body::new(center, vec2(tuning::PROJECTILE_SIZE, tuning::PROJECTILE_SIZE)),
        );
        self.kinds.insert(entity, Kind::Projectile);
        self.velocities.insert(entity, Velocity(velocity));
        entity
    }

    // =========================================================================
    // Lifetime
    // =========================================================================

    /// Queue an entity for removal at the next [`World::flush_despawns`].
    pub fn despawn(&mut self, entity: Entity) {
        if self.is_alive(entity) {
            self.despawn_queue.push(entity);
        }
    }

    /// Process all queued despawns.
    pub fn flush_despawns(&mut self) {
        let queue = std::mem::take(&mut self.despawn_queue);
        for entity in queue {
            // The queue may hold duplicates when an entity collided with
            // several others in the same tick; `free` rejects stale ids.
            if !self.entities.free(entity) {
                continue;
            }
            let idx = entity.index();
            self.bodies.clear_slot(idx);
            self.kinds.clear_slot(idx);
            self.velocities.clear_slot(idx);
            self.patrols.clear_slot(idx);
        }
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    pub fn alive_count(&self) -> usize {
        self.entities.alive_count()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Live entities in slot order. Slot order is also update order.
    pub fn live(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter_live()
    }

    /// Live entities paired with their bodies, in slot order.
    pub fn live_bodies(&self) -> impl Iterator<Item = (Entity, Body)> + '_ {
        self.live()
            .filter_map(|e| self.bodies.get(e).map(|body| (e, *body)))
    }

    /// Number of live entities of one kind.
    pub fn count_of(&self, kind: Kind) -> usize {
        self.live()
            .filter(|&e| self.kinds.get(e) == Some(&kind))
            .count()
    }

    /// True iff another live adversary sits below `entity` in the same
    /// column: centers within the blocker's half-width horizontally, and
    /// the blocker's center strictly lower on the stage (larger y).
    ///
    /// Used to keep back-row adversaries from firing through the front of
    /// their column.
    pub fn adversary_below(&self, entity: Entity) -> bool {
        let Some(body) = self.bodies.get(entity) else {
            return false;
        };
        self.live()
            .filter(|&other| other != entity)
            .filter(|&other| self.kinds.get(other) == Some(&Kind::Adversary))
            .any(|other| {
                let Some(other_body) = self.bodies.get(other) else {
                    return false;
                };
                (body.center.x - other_body.center.x).abs() < other_body.size.x / 2.0
                    && other_body.center.y > body.center.y
            })
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
