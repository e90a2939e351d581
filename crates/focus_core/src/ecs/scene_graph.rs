//! Scene graph access for systems
//!
//! Systems that only need tag lookups and component get/set are written
//! against [`SceneGraph`] rather than the concrete [`World`], so a host can
//! back them with its own entity store.

use super::{Component, Entity, World};

/// Tag and component access over an entity store
pub trait SceneGraph {
    /// All live entities carrying `tag`, in a stable order
    fn entities_with_tag(&self, tag: &str) -> Vec<Entity>;

    /// Whether `entity` is still alive
    fn contains(&self, entity: Entity) -> bool;

    /// Read a component of an entity
    fn component<C: Component>(&self, entity: Entity) -> Option<&C>;

    /// Insert or replace a component of an entity
    fn set_component<C: Component>(&mut self, entity: Entity, component: C);
}

impl SceneGraph for World {
    fn entities_with_tag(&self, tag: &str) -> Vec<Entity> {
        self.tagged(tag).collect()
    }

    fn contains(&self, entity: Entity) -> bool {
        self.exists(entity)
    }

    fn component<C: Component>(&self, entity: Entity) -> Option<&C> {
        self.get::<C>(entity)
    }

    fn set_component<C: Component>(&mut self, entity: Entity, component: C) {
        self.insert(entity, component);
    }
}
