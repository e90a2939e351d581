//! Throttled pose persistence for grabbed tools and unique assets

use crate::config::PoseSyncConfig;
use crate::ecs::{Entity, System, SystemContext, SystemStage, World};
use crate::scene::{ActiveProject, Grabbable, Tool, Transform, UniqueAsset};
use crate::store::AssetStore;
use std::sync::Arc;
use tracing::{trace, warn};

/// Writes the local pose of grabbed tools every `interval` seconds
///
/// Tools marked [`UniqueAsset`] go through [`AssetStore::update_unique_asset`],
/// the rest through [`AssetStore::update_asset_pose`]. Idle while no project
/// is open; the timer restarts once one is.
pub struct PoseSyncSystem {
    store: Arc<dyn AssetStore>,
    config: PoseSyncConfig,
    since_last_sync: f32,
}

impl PoseSyncSystem {
    pub fn new(store: Arc<dyn AssetStore>, config: PoseSyncConfig) -> Self {
        Self {
            store,
            config,
            since_last_sync: 0.0,
        }
    }

    /// Advance the timer by `delta_time` and persist if due
    ///
    /// Returns how many poses were written.
    pub fn tick(&mut self, world: &World, delta_time: f32) -> usize {
        let project_open = world
            .resource::<ActiveProject>()
            .is_some_and(ActiveProject::is_open);
        if !project_open {
            self.since_last_sync = 0.0;
            return 0;
        }

        self.since_last_sync += delta_time;
        if self.since_last_sync <= self.config.interval {
            return 0;
        }
        self.since_last_sync = 0.0;

        let due: Vec<(Entity, Tool, Transform)> = world
            .each::<Tool>()
            .filter(|(_, tool)| tool.asset_type.persists_pose())
            .filter(|(entity, _)| world.get::<Grabbable>(*entity).is_some_and(|g| g.grabbed))
            .filter_map(|(entity, tool)| Some((entity, *tool, *world.get::<Transform>(entity)?)))
            .collect();

        let mut written = 0;
        for (entity, tool, transform) in due {
            let result = if world.get::<UniqueAsset>(entity).is_some() {
                self.store
                    .update_unique_asset(tool.id, tool.asset_type, transform.pose)
            } else {
                self.store
                    .update_asset_pose(tool.id, tool.asset_type, transform.pose)
            };
            match result {
                Ok(()) => written += 1,
                Err(err) => warn!(?entity, id = %tool.id, error = %err, "failed to persist pose"),
            }
        }

        trace!(written, "pose sync");
        written
    }
}

impl System for PoseSyncSystem {
    fn run(&mut self, ctx: &mut SystemContext) {
        self.tick(ctx.world, ctx.delta_time);
    }

    fn name(&self) -> &'static str {
        "PoseSyncSystem"
    }

    fn stage(&self) -> SystemStage {
        SystemStage::Persist
    }
}
