//! Components and their per-type columns
//!
//! Each component type lives in one column. Common components (transforms,
//! grab state) use a dense column sharing the entity slot layout; rare ones
//! (parent links) use a hash map.

use super::Entity;
use rustc_hash::FxHashMap;
use slotmap::SecondaryMap;
use std::any::{Any, TypeId};

/// Column layout for a component type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageType {
    /// Indexed by entity slot
    #[default]
    Dense,
    /// Hashed by entity, for components few entities carry
    Sparse,
}

/// Plain data attached to entities
///
/// ```rust,ignore
/// struct Highlight(f32);
///
/// impl Component for Highlight {
///     const STORAGE: StorageType = StorageType::Sparse;
/// }
/// ```
pub trait Component: 'static + Send + Sync + Sized {
    const STORAGE: StorageType = StorageType::Dense;
}

enum Slots<T> {
    Dense(SecondaryMap<Entity, T>),
    Sparse(FxHashMap<Entity, T>),
}

/// Every value of one component type
pub struct Column<T: Component> {
    slots: Slots<T>,
}

impl<T: Component> Default for Column<T> {
    fn default() -> Self {
        let slots = match T::STORAGE {
            StorageType::Dense => Slots::Dense(SecondaryMap::new()),
            StorageType::Sparse => Slots::Sparse(FxHashMap::default()),
        };
        Self { slots }
    }
}

impl<T: Component> Column<T> {
    /// Store `value` for `entity`, returning what it replaced
    pub fn insert(&mut self, entity: Entity, value: T) -> Option<T> {
        match &mut self.slots {
            Slots::Dense(map) => map.insert(entity, value),
            Slots::Sparse(map) => map.insert(entity, value),
        }
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        match &self.slots {
            Slots::Dense(map) => map.get(entity),
            Slots::Sparse(map) => map.get(&entity),
        }
    }

    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        match &mut self.slots {
            Slots::Dense(map) => map.remove(entity),
            Slots::Sparse(map) => map.remove(&entity),
        }
    }

    /// All values; slot order for dense columns, unordered for sparse ones
    pub fn iter(&self) -> Box<dyn Iterator<Item = (Entity, &T)> + '_> {
        match &self.slots {
            Slots::Dense(map) => Box::new(map.iter()),
            Slots::Sparse(map) => Box::new(map.iter().map(|(&e, value)| (e, value))),
        }
    }
}

/// Type-erased column, so despawn can clear an entity from every column
trait ErasedColumn: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn clear_entity(&mut self, entity: Entity);
}

impl<T: Component> ErasedColumn for Column<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clear_entity(&mut self, entity: Entity) {
        self.remove(entity);
    }
}

/// One column per component type that has ever been inserted
#[derive(Default)]
pub struct Columns {
    by_type: FxHashMap<TypeId, Box<dyn ErasedColumn>>,
}

impl Columns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column<T: Component>(&self) -> Option<&Column<T>> {
        self.by_type
            .get(&TypeId::of::<T>())
            .and_then(|c| c.as_any().downcast_ref())
    }

    /// The column for `T`, created empty on first use
    pub fn column_mut<T: Component>(&mut self) -> Option<&mut Column<T>> {
        self.by_type
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Column::<T>::default()))
            .as_any_mut()
            .downcast_mut()
    }

    /// Drop every component of `entity`
    pub fn clear_entity(&mut self, entity: Entity) {
        for column in self.by_type.values_mut() {
            column.clear_entity(entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::Entities;

    #[derive(Debug, PartialEq)]
    struct Speed(f32);
    impl Component for Speed {}

    #[derive(Debug, PartialEq)]
    struct Pinned;
    impl Component for Pinned {
        const STORAGE: StorageType = StorageType::Sparse;
    }

    #[test]
    fn test_dense_column_keys_by_entity() {
        let mut entities = Entities::new();
        let a = entities.spawn();
        let b = entities.spawn();

        let mut column = Column::<Speed>::default();
        column.insert(b, Speed(2.0));
        column.insert(a, Speed(1.0));
        assert_eq!(column.get(a), Some(&Speed(1.0)));
        assert_eq!(column.get(b), Some(&Speed(2.0)));

        assert_eq!(column.insert(a, Speed(3.0)), Some(Speed(1.0)));
        assert_eq!(column.iter().map(|(e, _)| e).collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn test_clear_entity_spans_columns() {
        let mut entities = Entities::new();
        let a = entities.spawn();
        let b = entities.spawn();

        let mut columns = Columns::new();
        assert!(columns.column::<Speed>().is_none());

        if let Some(speeds) = columns.column_mut::<Speed>() {
            speeds.insert(a, Speed(1.0));
            speeds.insert(b, Speed(2.0));
        }
        if let Some(pins) = columns.column_mut::<Pinned>() {
            pins.insert(a, Pinned);
        }

        columns.clear_entity(a);
        assert_eq!(columns.column::<Speed>().and_then(|c| c.get(a)), None);
        assert_eq!(columns.column::<Pinned>().and_then(|c| c.get(a)), None);
        assert_eq!(columns.column::<Speed>().and_then(|c| c.get(b)), Some(&Speed(2.0)));
    }
}
