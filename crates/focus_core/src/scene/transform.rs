//! Local transforms and parent links

use crate::ecs::{Component, Entity, SceneGraph, StorageType};
use crate::math::Pose;

/// Longest parent chain followed before giving up on a cycle
const MAX_PARENT_DEPTH: usize = 32;

/// Pose relative to the parent, or to world space for roots
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub pose: Pose,
}

impl Component for Transform {}

impl Transform {
    pub fn new(pose: Pose) -> Self {
        Self { pose }
    }
}

impl From<Pose> for Transform {
    fn from(pose: Pose) -> Self {
        Self::new(pose)
    }
}

/// Parent link for the transform hierarchy
///
/// A relation, not ownership: despawning the parent leaves the link
/// dangling, and a dangling link is treated as no parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransformParent {
    pub entity: Option<Entity>,
}

impl Component for TransformParent {
    const STORAGE: StorageType = StorageType::Sparse;
}

impl TransformParent {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity: Some(entity),
        }
    }

    pub fn none() -> Self {
        Self { entity: None }
    }

    /// The parent if it is still alive
    pub fn live<G: SceneGraph>(&self, graph: &G) -> Option<Entity> {
        self.entity.filter(|&e| graph.contains(e))
    }
}

/// World pose of `entity`, composing local transforms up the parent chain
///
/// Entities without a [`Transform`] are treated as sitting at the identity.
/// Returns `None` when `entity` itself is dead.
pub fn world_pose<G: SceneGraph>(graph: &G, entity: Entity) -> Option<Pose> {
    if !graph.contains(entity) {
        return None;
    }

    let local = |e: Entity| {
        graph
            .component::<Transform>(e)
            .map(|t| t.pose)
            .unwrap_or(Pose::IDENTITY)
    };

    let mut pose = local(entity);
    let mut current = entity;
    for _ in 0..MAX_PARENT_DEPTH {
        let parent = graph
            .component::<TransformParent>(current)
            .and_then(|p| p.live(graph));
        match parent {
            Some(parent) if parent != entity => {
                pose = local(parent).compose(&pose);
                current = parent;
            }
            _ => return Some(pose),
        }
    }

    tracing::warn!(?entity, "parent chain exceeds {MAX_PARENT_DEPTH} levels, truncating");
    Some(pose)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::World;
    use crate::math::{Quat, Vec3};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_root_world_pose_is_local() {
        let mut world = World::new();
        let e = world.spawn().insert(Transform::new(Pose::at(1.0, 2.0, 3.0))).id();

        assert_eq!(world_pose(&world, e), Some(Pose::at(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_child_world_pose() {
        let mut world = World::new();
        let board_pose = Pose::new(Vec3::new(0.0, 1.0, -2.0), Quat::from_axis_angle(Vec3::UP, FRAC_PI_2));
        let board = world.spawn().insert(Transform::new(board_pose)).id();
        let note = world
            .spawn()
            .insert(Transform::new(Pose::at(0.2, 0.0, 0.05)))
            .insert(TransformParent::new(board))
            .id();

        let pose = world_pose(&world, note).unwrap();
        // board +X maps to world -Z
        assert!((pose.position - Vec3::new(0.05, 1.0, -2.2)).length() < 1e-5);
    }

    #[test]
    fn test_dangling_parent_is_ignored() {
        let mut world = World::new();
        let board = world.spawn().insert(Transform::new(Pose::at(5.0, 0.0, 0.0))).id();
        let note = world
            .spawn()
            .insert(Transform::new(Pose::at(0.1, 0.0, 0.0)))
            .insert(TransformParent::new(board))
            .id();

        world.despawn(board);
        assert_eq!(world_pose(&world, note), Some(Pose::at(0.1, 0.0, 0.0)));
        assert_eq!(world_pose(&world, board), None);
    }

    #[test]
    fn test_parent_cycle_terminates() {
        let mut world = World::new();
        let a = world.spawn().insert(Transform::new(Pose::at(1.0, 0.0, 0.0))).id();
        let b = world.spawn().insert(Transform::new(Pose::at(1.0, 0.0, 0.0))).id();
        world.insert(a, TransformParent::new(b));
        world.insert(b, TransformParent::new(a));

        assert!(world_pose(&world, a).is_some());
    }
}
