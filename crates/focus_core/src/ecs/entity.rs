//! Entity keys, names and tags

use super::{Component, World};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Generational key of a live or despawned entity
    pub struct Entity;
}

#[derive(Debug, Default)]
struct Label {
    name: Option<String>,
    tags: SmallVec<[String; 2]>,
}

/// Every spawned entity with its debug name and tags
///
/// Keys of despawned entities stay dead even after their slot is reused.
#[derive(Debug, Default)]
pub struct Entities {
    slots: SlotMap<Entity, Label>,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> Entity {
        self.slots.insert(Label::default())
    }

    /// Returns false if `entity` was already gone
    pub fn despawn(&mut self, entity: Entity) -> bool {
        self.slots.remove(entity).is_some()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.slots.contains_key(entity)
    }

    pub fn name(&self, entity: Entity) -> Option<&str> {
        self.slots.get(entity)?.name.as_deref()
    }

    /// Entities carrying `tag`, in slot order
    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = Entity> + 'a {
        self.slots
            .iter()
            .filter(move |(_, label)| label.tags.iter().any(|t| t == tag))
            .map(|(entity, _)| entity)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn set_name(&mut self, entity: Entity, name: String) {
        if let Some(label) = self.slots.get_mut(entity) {
            label.name = Some(name);
        }
    }

    fn add_tag(&mut self, entity: Entity, tag: String) {
        if let Some(label) = self.slots.get_mut(entity) {
            if !label.tags.contains(&tag) {
                label.tags.push(tag);
            }
        }
    }
}

/// Chained setup of a freshly spawned entity
pub struct EntityBuilder<'w> {
    world: &'w mut World,
    entity: Entity,
}

impl<'w> EntityBuilder<'w> {
    pub(crate) fn new(world: &'w mut World, entity: Entity) -> Self {
        Self { world, entity }
    }

    pub fn insert<C: Component>(self, component: C) -> Self {
        self.world.insert(self.entity, component);
        self
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.world.entities.set_name(self.entity, name.into());
        self
    }

    pub fn tag(self, tag: impl Into<String>) -> Self {
        self.world.entities.add_tag(self.entity, tag.into());
        self
    }

    pub fn id(self) -> Entity {
        self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_despawned_key_stays_dead() {
        let mut entities = Entities::new();

        let first = entities.spawn();
        assert!(entities.despawn(first));
        assert!(!entities.despawn(first));

        let second = entities.spawn();
        assert!(!entities.contains(first));
        assert!(entities.contains(second));
        assert_ne!(first, second);
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn test_tags_and_names() {
        let mut entities = Entities::new();

        let board = entities.spawn();
        let panel = entities.spawn();
        let note = entities.spawn();
        entities.set_name(board, "board".to_string());
        entities.add_tag(board, "attachable".to_string());
        entities.add_tag(board, "attachable".to_string());
        entities.add_tag(panel, "panel".to_string());
        entities.add_tag(note, "attachable".to_string());

        assert_eq!(entities.tagged("attachable").collect::<Vec<_>>(), vec![board, note]);
        assert_eq!(entities.tagged("missing").count(), 0);
        assert_eq!(entities.name(board), Some("board"));
        assert_eq!(entities.name(note), None);
    }
}
