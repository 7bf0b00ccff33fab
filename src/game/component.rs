//! Sparse per-component storage.
//!
//! Each component type gets one `ComponentStorage<T>`: a sparse array
//! indexed by entity slot, with `None` holes where an entity lacks the
//! component. At this scale (a few dozen combatants) sparse arrays beat
//! anything fancier and keep iteration order equal to slot order, which is
//! the order the simulation updates entities in.

use super::entity::Entity;

pub struct ComponentStorage<T> {
    /// Indexed by `entity.index()`; generation checks are the caller's job
    /// (the world only hands out live entities).
    data: Vec<Option<T>>,
}

impl<T> ComponentStorage<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Insert a component, replacing any existing one.
    pub fn insert(&mut self, entity: Entity, component: T) {
        let idx = entity.index() as usize;
        if idx >= self.data.len() {
            self.data.resize_with(idx + 1, || None);
        }
        self.data[idx] = Some(component);
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.data.get(entity.index() as usize).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.data
            .get_mut(entity.index() as usize)
            .and_then(Option::as_mut)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.get(entity).is_some()
    }

    /// Drop the component stored in a slot, if any. Called on despawn.
    pub fn clear_slot(&mut self, index: u32) {
        if let Some(slot) = self.data.get_mut(index as usize) {
            *slot = None;
        }
    }

    /// Number of entities currently carrying this component.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|slot| slot.is_some()).count()
    }
}

impl<T> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}
