//! Board attachment
//!
//! Each frame the grabbed attachable is measured against every board's face
//! rectangle. Closer than the threshold attaches it to the nearest board;
//! moving away from its board detaches it. A tool stays on its current board
//! while still within the threshold, even if another board is closer.

use crate::config::AttachConfig;
use crate::ecs::{Entity, SceneGraph, System, SystemContext, SystemStage, World};
use crate::geometry::Rectangle;
use crate::math::{Pose, Vec3};
use crate::scene::{
    world_pose, Attachable, Grabbable, MeshBoundsCache, Tool, Transform, TransformParent,
    ATTACHABLE_TAG,
};
use crate::store::AssetStore;
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A change of parent decided for the grabbed tool
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Stick `child` to `board`, leaving `previous` if it had a parent
    Attached {
        child: Entity,
        board: Entity,
        previous: Option<Entity>,
        distance: f32,
    },
    /// Unstick `child` from `board`
    Detached { child: Entity, board: Entity },
}

impl Transition {
    pub fn child(&self) -> Entity {
        match *self {
            Transition::Attached { child, .. } | Transition::Detached { child, .. } => child,
        }
    }
}

/// Sticks grabbed tools to nearby boards
pub struct BoardParentingSystem {
    store: Arc<dyn AssetStore>,
    config: AttachConfig,
}

impl BoardParentingSystem {
    pub fn new(store: Arc<dyn AssetStore>, config: AttachConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &AttachConfig {
        &self.config
    }

    /// Decide and apply this frame's transition for `world`
    ///
    /// Board bounds come from the world's [`MeshBoundsCache`]; without one
    /// every board counts as unresolved.
    pub fn evaluate(&self, world: &mut World) -> Option<Transition> {
        let transition = match world.resource::<MeshBoundsCache>() {
            Some(bounds) => self.decide(&*world, bounds),
            None => self.decide(&*world, &MeshBoundsCache::new()),
        }?;
        self.apply(world, transition);
        Some(transition)
    }

    /// Work out the transition for the grabbed attachable, if any
    ///
    /// Only one grabbed tool is considered per frame. Boards whose bounds are
    /// not resolved yet are skipped.
    pub fn decide<G: SceneGraph>(&self, graph: &G, bounds: &MeshBoundsCache) -> Option<Transition> {
        let mut boards: SmallVec<[Entity; 8]> = SmallVec::new();
        let mut grabbed = None;
        let mut extra_grabbed = 0usize;

        for entity in graph.entities_with_tag(ATTACHABLE_TAG) {
            let Some(attachable) = graph.component::<Attachable>(entity) else {
                continue;
            };
            if attachable.is_board() {
                boards.push(entity);
            } else if graph
                .component::<Grabbable>(entity)
                .is_some_and(|g| g.grabbed)
            {
                if grabbed.is_none() {
                    grabbed = Some(entity);
                } else {
                    extra_grabbed += 1;
                }
            }
        }

        let child = grabbed?;
        if extra_grabbed > 0 {
            warn!(?child, extra_grabbed, "more than one attachable grabbed, evaluating the first only");
        }

        let position = world_pose(graph, child)?.position;
        let current = graph
            .component::<TransformParent>(child)
            .and_then(|p| p.live(graph));

        if let Some(parent) = current {
            match self.board_distance(graph, bounds, parent, position) {
                None => {
                    trace!(?child, board = ?parent, "parent bounds not resolved, keeping parent");
                    return None;
                }
                Some(distance) if distance < self.config.threshold => return None,
                Some(_) => {}
            }
        }

        let nearest = boards
            .iter()
            .copied()
            .filter(|&board| Some(board) != current && board != child)
            .filter_map(|board| match self.board_distance(graph, bounds, board, position) {
                Some(distance) => Some((board, distance)),
                None => {
                    trace!(?board, "board bounds not resolved, skipping");
                    None
                }
            })
            .filter(|&(_, distance)| distance < self.config.threshold)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        match (nearest, current) {
            (Some((board, distance)), previous) => Some(Transition::Attached {
                child,
                board,
                previous,
                distance,
            }),
            (None, Some(board)) => Some(Transition::Detached { child, board }),
            (None, None) => None,
        }
    }

    /// Apply a transition: relink, keep the world pose, persist
    pub fn apply<G: SceneGraph>(&self, graph: &mut G, transition: Transition) {
        let child = transition.child();
        let child_world = world_pose(graph, child).unwrap_or(Pose::IDENTITY);

        let parent_id = match transition {
            Transition::Attached {
                board,
                previous,
                distance,
                ..
            } => {
                let board_world = world_pose(graph, board).unwrap_or(Pose::IDENTITY);
                graph.set_component(child, Transform::new(board_world.relative(&child_world)));
                graph.set_component(child, TransformParent::new(board));

                let board_id = graph.component::<Tool>(board).map(|t| t.id);
                debug!(?child, ?board, ?previous, distance, "attached to board");
                board_id
            }
            Transition::Detached { board, .. } => {
                graph.set_component(child, Transform::new(child_world));
                graph.set_component(child, TransformParent::none());
                debug!(?child, ?board, "detached from board");
                None
            }
        };

        let attachable = graph
            .component::<Attachable>(child)
            .copied()
            .unwrap_or_default();
        graph.set_component(child, attachable.with_parent(parent_id));

        if let Some(tool) = graph.component::<Tool>(child).copied() {
            if let Err(err) = self.store.update_parent(tool.id, tool.asset_type, parent_id) {
                warn!(id = %tool.id, error = %err, "failed to persist parent");
            }
        }
    }

    fn board_distance<G: SceneGraph>(
        &self,
        graph: &G,
        bounds: &MeshBoundsCache,
        board: Entity,
        point: Vec3,
    ) -> Option<f32> {
        let local_bounds = bounds.resolved(board)?;
        let pose = world_pose(graph, board)?;
        let rect = Rectangle::from_bounds(&local_bounds, &pose)?;
        Some(rect.distance(point, self.config.surface_inset))
    }
}

impl System for BoardParentingSystem {
    fn run(&mut self, ctx: &mut SystemContext) {
        self.evaluate(ctx.world);
    }

    fn name(&self) -> &'static str {
        "BoardParentingSystem"
    }

    fn stage(&self) -> SystemStage {
        SystemStage::Update
    }
}
