//! Entity identifiers with generational indices.
//!
//! Every combatant on the stage is addressed by an `Entity`: a slot index
//! into the world's component arrays plus a generation counter. Freed slots
//! are reused, and the generation bump on free invalidates any identifier
//! that pointed at the previous occupant. Collision pruning compares these
//! ids instead of object identity, so an entity can never "collide" with
//! itself and a stale id can never alias a newly spawned combatant.

/// A stable identifier for one combatant.
///
/// Two entities with equal indices but different generations refer to
/// different combatants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index, used to address component storage.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Allocates entity slots and tracks which ones are live.
pub struct EntityAllocator {
    /// Current generation of each slot ever allocated.
    generations: Vec<u32>,
    /// Liveness flag per slot, kept alongside generations so the live set
    /// can be iterated without consulting the free list.
    alive: Vec<bool>,
    /// Freed slots available for reuse.
    free: Vec<u32>,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            alive: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Allocate a slot, preferring to recycle a freed one.
    pub fn allocate(&mut self) -> Entity {
        if let Some(index) = self.free.pop() {
            self.alive[index as usize] = true;
            Entity::new(index, self.generations[index as usize])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            self.alive.push(true);
            Entity::new(index, 0)
        }
    }

    /// Free a live entity's slot. Returns false if the id was already stale.
    pub fn free(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        let idx = entity.index as usize;
        // Invalidate outstanding ids before the slot is recycled.
        self.generations[idx] += 1;
        self.alive[idx] = false;
        self.free.push(entity.index);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        let idx = entity.index as usize;
        idx < self.generations.len()
            && self.alive[idx]
            && self.generations[idx] == entity.generation
    }

    /// Iterate over every live entity in slot order.
    pub fn iter_live(&self) -> impl Iterator<Item = Entity> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(|(idx, _)| Entity::new(idx as u32, self.generations[idx]))
    }

    pub fn alive_count(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
