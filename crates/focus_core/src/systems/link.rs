//! Restoring saved board links after a project loads

use crate::ecs::{Entity, World};
use crate::scene::{AssetId, Attachable, Tool, TransformParent, ATTACHABLE_TAG};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// Link attachables to the boards named by their saved [`Attachable::parent`]
///
/// Saved poses are relative to the parent board, so the local [`Transform`]
/// is left untouched. With `only` set, just that entity is linked, e.g. a
/// task re-created after the project was loaded. Returns the number of links
/// made; entities already linked to the right board are not counted.
///
/// [`Transform`]: crate::scene::Transform
pub fn link_to_parent_boards(world: &mut World, only: Option<Entity>) -> usize {
    let attachables: Vec<Entity> = world.tagged(ATTACHABLE_TAG).collect();

    let boards: FxHashMap<AssetId, Entity> = attachables
        .iter()
        .filter(|&&e| world.get::<Attachable>(e).is_some_and(Attachable::is_board))
        .filter_map(|&e| world.get::<Tool>(e).map(|tool| (tool.id, e)))
        .collect();

    let mut linked = 0;
    for entity in attachables {
        if only.is_some_and(|o| o != entity) {
            continue;
        }
        let Some(parent_id) = world.get::<Attachable>(entity).and_then(|a| a.parent) else {
            continue;
        };

        let Some(&board) = boards.get(&parent_id) else {
            trace!(?entity, parent = %parent_id, "saved parent board not loaded");
            continue;
        };
        if board == entity {
            continue;
        }

        let current = world.get::<TransformParent>(entity).and_then(|p| p.live(&*world));
        if current == Some(board) {
            continue;
        }

        world.insert(entity, TransformParent::new(board));
        linked += 1;
    }

    debug!(linked, "linked tools to parent boards");
    linked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{BoundingBox, Pose, Vec3};
    use crate::scene::{spawn_tool, world_pose, AssetType, ToolSpec};

    fn board(world: &mut World, id: u64, pose: Pose) -> Entity {
        spawn_tool(
            world,
            ToolSpec::new(AssetId(id), AssetType::Board, pose)
                .with_bounds(BoundingBox::new(Vec3::new(-0.5, -0.5, 0.0), Vec3::new(0.5, 0.5, 0.0))),
        )
    }

    #[test]
    fn test_links_saved_parents() {
        let mut world = World::new();
        let b = board(&mut world, 1, Pose::at(0.0, 1.0, -2.0));
        let note = spawn_tool(
            &mut world,
            ToolSpec::new(AssetId(10), AssetType::StickyNote, Pose::at(0.1, 0.0, 0.02)).with_parent(AssetId(1)),
        );
        let loose = spawn_tool(&mut world, ToolSpec::new(AssetId(11), AssetType::Label, Pose::IDENTITY));

        assert_eq!(link_to_parent_boards(&mut world, None), 1);
        assert_eq!(world.get::<TransformParent>(note), Some(&TransformParent::new(b)));
        assert!(world.get::<TransformParent>(loose).is_none());

        // saved pose is local to the board
        let pose = world_pose(&world, note).unwrap();
        assert!((pose.position - Vec3::new(0.1, 1.0, -1.98)).length() < 1e-5);

        // already linked
        assert_eq!(link_to_parent_boards(&mut world, None), 0);
    }

    #[test]
    fn test_missing_board_is_skipped() {
        let mut world = World::new();
        let note = spawn_tool(
            &mut world,
            ToolSpec::new(AssetId(10), AssetType::Arrow, Pose::IDENTITY).with_parent(AssetId(99)),
        );

        assert_eq!(link_to_parent_boards(&mut world, None), 0);
        assert!(world.get::<TransformParent>(note).is_none());
    }

    #[test]
    fn test_only_links_one_entity() {
        let mut world = World::new();
        let b = board(&mut world, 1, Pose::IDENTITY);
        let first = spawn_tool(
            &mut world,
            ToolSpec::new(AssetId(10), AssetType::Task, Pose::IDENTITY).with_parent(AssetId(1)),
        );
        let second = spawn_tool(
            &mut world,
            ToolSpec::new(AssetId(11), AssetType::Task, Pose::IDENTITY).with_parent(AssetId(1)),
        );

        assert_eq!(link_to_parent_boards(&mut world, Some(second)), 1);
        assert!(world.get::<TransformParent>(first).is_none());
        assert_eq!(world.get::<TransformParent>(second).and_then(|p| p.entity), Some(b));
    }
}
