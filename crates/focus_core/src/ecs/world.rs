//! The world: entities, their components and global resources

use super::{Columns, Component, Entities, Entity, EntityBuilder};
use rustc_hash::FxHashMap;
use std::any::{Any, TypeId};

/// Marker for types stored as global resources
pub trait Resource: 'static + Send + Sync {}

impl<T: 'static + Send + Sync> Resource for T {}

/// Entities, their components, and one value per resource type
#[derive(Default)]
pub struct World {
    pub(crate) entities: Entities,
    columns: Columns,
    resources: FxHashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityBuilder<'_> {
        let entity = self.entities.spawn();
        EntityBuilder::new(self, entity)
    }

    /// Remove an entity with all its components
    ///
    /// Other entities referring to it keep a dead key.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        self.columns.clear_entity(entity);
        self.entities.despawn(entity)
    }

    pub fn exists(&self, entity: Entity) -> bool {
        self.entities.contains(entity)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn name(&self, entity: Entity) -> Option<&str> {
        self.entities.name(entity)
    }

    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = Entity> + 'a {
        self.entities.tagged(tag)
    }

    /// Attach or replace a component; ignored for dead entities
    pub fn insert<C: Component>(&mut self, entity: Entity, component: C) {
        if !self.entities.contains(entity) {
            return;
        }
        if let Some(column) = self.columns.column_mut::<C>() {
            column.insert(entity, component);
        }
    }

    pub fn get<C: Component>(&self, entity: Entity) -> Option<&C> {
        self.columns.column::<C>()?.get(entity)
    }

    /// Every entity carrying `C`, with its value
    pub fn each<C: Component>(&self) -> impl Iterator<Item = (Entity, &C)> + '_ {
        self.columns.column::<C>().into_iter().flat_map(|column| column.iter())
    }

    pub fn resource<R: Resource>(&self) -> Option<&R> {
        self.resources.get(&TypeId::of::<R>())?.downcast_ref()
    }

    pub fn resource_mut<R: Resource>(&mut self) -> Option<&mut R> {
        self.resources.get_mut(&TypeId::of::<R>())?.downcast_mut()
    }

    /// Insert a resource, replacing any previous value of the same type
    pub fn insert_resource<R: Resource>(&mut self, resource: R) {
        self.resources.insert(TypeId::of::<R>(), Box::new(resource));
    }
}
