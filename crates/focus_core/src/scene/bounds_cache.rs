//! Mesh bounds cache
//!
//! Mesh bounds become available some time after an entity spawns, once the
//! host has loaded its scene object. The host records requests and
//! completions here; frame systems poll it and skip entities that are not
//! resolved yet.

use crate::ecs::Entity;
use crate::math::BoundingBox;
use rustc_hash::FxHashMap;

/// Load state of an entity's mesh bounds
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundsState {
    /// Requested, scene object not loaded yet
    Pending,
    /// Combined local bounds of the entity's mesh
    Resolved(BoundingBox),
}

/// Per-entity mesh bounds, polled once per frame
#[derive(Debug, Default)]
pub struct MeshBoundsCache {
    entries: FxHashMap<Entity, BoundsState>,
}

impl MeshBoundsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark bounds as requested; no effect if already known
    pub fn request(&mut self, entity: Entity) {
        self.entries.entry(entity).or_insert(BoundsState::Pending);
    }

    /// Record loaded bounds, replacing any previous state
    pub fn resolve(&mut self, entity: Entity, bounds: BoundingBox) {
        self.entries.insert(entity, BoundsState::Resolved(bounds));
    }

    /// Drop an entity, e.g. after it was despawned
    pub fn forget(&mut self, entity: Entity) -> Option<BoundsState> {
        self.entries.remove(&entity)
    }

    pub fn state(&self, entity: Entity) -> Option<BoundsState> {
        self.entries.get(&entity).copied()
    }

    /// Bounds if resolved and non-empty
    pub fn resolved(&self, entity: Entity) -> Option<BoundingBox> {
        match self.entries.get(&entity) {
            Some(BoundsState::Resolved(bounds)) if !bounds.is_empty() => Some(*bounds),
            _ => None,
        }
    }

    pub fn is_pending(&self, entity: Entity) -> bool {
        matches!(self.entries.get(&entity), Some(BoundsState::Pending))
    }

    /// Entities still waiting for bounds
    pub fn pending(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entries
            .iter()
            .filter(|(_, state)| matches!(state, BoundsState::Pending))
            .map(|(&entity, _)| entity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::World;
    use crate::math::Vec3;

    fn board_bounds() -> BoundingBox {
        BoundingBox::new(Vec3::new(-0.5, -0.5, 0.0), Vec3::new(0.5, 0.5, 0.0))
    }

    #[test]
    fn test_pending_then_resolved() {
        let mut world = World::new();
        let board = world.spawn().id();
        let mut cache = MeshBoundsCache::new();

        assert_eq!(cache.state(board), None);

        cache.request(board);
        assert!(cache.is_pending(board));
        assert_eq!(cache.resolved(board), None);
        assert_eq!(cache.pending().collect::<Vec<_>>(), vec![board]);

        cache.resolve(board, board_bounds());
        assert_eq!(cache.resolved(board), Some(board_bounds()));

        // a late request does not undo resolution
        cache.request(board);
        assert_eq!(cache.resolved(board), Some(board_bounds()));
        assert_eq!(cache.pending().count(), 0);
    }

    #[test]
    fn test_empty_bounds_are_not_usable() {
        let mut world = World::new();
        let board = world.spawn().id();
        let mut cache = MeshBoundsCache::new();

        cache.resolve(board, BoundingBox::empty());
        assert_eq!(cache.resolved(board), None);
        assert!(!cache.is_pending(board));
    }

    #[test]
    fn test_forget() {
        let mut world = World::new();
        let board = world.spawn().id();
        let mut cache = MeshBoundsCache::new();

        cache.resolve(board, board_bounds());
        assert_eq!(cache.forget(board), Some(BoundsState::Resolved(board_bounds())));
        assert!(cache.is_empty());
    }
}
