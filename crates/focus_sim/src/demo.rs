//! Demo scene and scripted grab

use focus_core::prelude::*;

/// Frames between the start of the run and the second board's bounds loading
const BOARD_LOAD_FRAME: u64 = 30;

pub struct DemoScene {
    pub board_a: Entity,
    pub board_b: Entity,
    pub note: Entity,
    pub label: Entity,
}

fn board_bounds() -> BoundingBox {
    BoundingBox::new(Vec3::new(-0.5, -0.35, -0.01), Vec3::new(0.5, 0.35, 0.01))
}

/// Two boards side by side, a note saved on the first and a loose label
///
/// The second board's mesh bounds are still loading when the run starts.
pub fn build(world: &mut World) -> DemoScene {
    world.insert_resource(MeshBoundsCache::new());
    world.insert_resource(ActiveProject::open(1));

    let board_a = spawn_tool(
        world,
        ToolSpec::new(AssetId(1), AssetType::Board, Pose::at(0.0, 1.3, -1.5))
            .with_bounds(board_bounds())
            .with_name("board-a"),
    );
    let board_b = spawn_tool(
        world,
        ToolSpec::new(AssetId(2), AssetType::Board, Pose::at(1.2, 1.3, -1.5)).with_name("board-b"),
    );
    let note = spawn_tool(
        world,
        ToolSpec::new(AssetId(10), AssetType::StickyNote, Pose::at(0.2, 0.1, 0.02))
            .with_parent(AssetId(1))
            .with_name("note"),
    );
    let label = spawn_tool(
        world,
        ToolSpec::new(AssetId(11), AssetType::Label, Pose::at(-0.6, 1.0, -1.0)).with_name("label"),
    );

    DemoScene {
        board_a,
        board_b,
        note,
        label,
    }
}

/// Resolves the second board's bounds a little after startup
pub fn bounds_loader(board: Entity) -> impl System {
    system("BoundsLoader", move |ctx| {
        if ctx.frame != BOARD_LOAD_FRAME {
            return;
        }
        if let Some(cache) = ctx.world.resource_mut::<MeshBoundsCache>() {
            cache.resolve(board, board_bounds());
            tracing::info!(?board, "board bounds loaded");
        }
    })
    .with_stage(SystemStage::Input)
}

/// Grabs `entity`, pulls it off its board and drops it onto the second one
///
/// `frames` is the length of the whole run; the grab spans its middle.
pub fn scripted_grab(entity: Entity, frames: u64) -> impl System {
    let waypoints = [
        Vec3::new(0.2, 1.4, -1.48),
        Vec3::new(0.6, 1.4, -1.1),
        Vec3::new(1.1, 1.4, -1.47),
    ];
    let start = frames / 6;
    let end = frames - frames / 6;

    system("ScriptedGrab", move |ctx| {
        if ctx.frame == start {
            ctx.world.insert(entity, Grabbable::held());
        }
        if ctx.frame == end {
            ctx.world.insert(entity, Grabbable::released());
        }
        if ctx.frame < start || ctx.frame >= end {
            return;
        }

        let t = (ctx.frame - start) as f32 / (end - start).max(1) as f32;
        let target = along_path(&waypoints, t);
        move_to_world(ctx.world, entity, target);
    })
    .with_stage(SystemStage::Input)
    .with_priority(1)
}

fn along_path(points: &[Vec3; 3], t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t < 1.0 {
        points[0].lerp(points[1], t)
    } else {
        points[1].lerp(points[2], t - 1.0)
    }
}

/// Place `entity` at a world position, keeping its rotation
fn move_to_world(world: &mut World, entity: Entity, position: Vec3) {
    let Some(current) = world_pose(&*world, entity) else {
        return;
    };
    let parent = world
        .get::<TransformParent>(entity)
        .and_then(|p| p.live(&*world))
        .and_then(|p| world_pose(&*world, p));

    let target = Pose::new(position, current.rotation);
    let local = match parent {
        Some(parent) => parent.relative(&target),
        None => target,
    };
    world.insert(entity, Transform::new(local));
}
