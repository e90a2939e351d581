//! Tool identity and spawning

use super::{AttachKind, Attachable, Grabbable, MeshBoundsCache, Transform, ATTACHABLE_TAG};
use crate::ecs::{Component, Entity, StorageType, World};
use crate::math::{BoundingBox, Pose};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a persisted asset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub u64);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of asset a tool entity represents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    TasksPanel,
    AiPanel,
    Clock,
    Speaker,
    Task,
    StickyNote,
    Sticker,
    WebView,
    Label,
    Shape3d,
    Shape2d,
    Timer,
    Arrow,
    Board,
}

impl AssetType {
    /// How this asset type takes part in board attachment, if at all
    pub fn attach_kind(self) -> Option<AttachKind> {
        match self {
            AssetType::Board => Some(AttachKind::Board),
            AssetType::StickyNote
            | AssetType::Label
            | AssetType::Arrow
            | AssetType::Shape2d
            | AssetType::Sticker
            | AssetType::Task => Some(AttachKind::Child),
            _ => None,
        }
    }

    /// Whether grabbed instances have their pose persisted
    pub fn persists_pose(self) -> bool {
        // timers are recreated at their spawn point
        self != AssetType::Timer
    }

    /// At most one per project, persisted apart from the regular assets
    pub fn is_unique(self) -> bool {
        matches!(
            self,
            AssetType::TasksPanel | AssetType::AiPanel | AssetType::Clock | AssetType::Speaker
        )
    }
}

/// Identity of a tool entity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tool {
    pub id: AssetId,
    pub asset_type: AssetType,
}

impl Component for Tool {}

impl Tool {
    pub fn new(id: AssetId, asset_type: AssetType) -> Self {
        Self { id, asset_type }
    }
}

/// Marks a tool whose asset type [`AssetType::is_unique`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniqueAsset;

impl Component for UniqueAsset {
    const STORAGE: StorageType = StorageType::Sparse;
}

/// The project whose assets are currently loaded, if any
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveProject {
    pub id: Option<u64>,
}

impl ActiveProject {
    pub fn open(id: u64) -> Self {
        Self { id: Some(id) }
    }

    pub fn is_open(&self) -> bool {
        self.id.is_some()
    }
}

/// Everything needed to place a tool in the scene
#[derive(Clone, Debug)]
pub struct ToolSpec {
    pub id: AssetId,
    pub asset_type: AssetType,
    pub pose: Pose,
    /// Saved parent board, restored by `link_to_parent_boards`
    pub parent: Option<AssetId>,
    /// Mesh bounds if already known; boards without them stay pending
    pub bounds: Option<BoundingBox>,
    pub name: Option<String>,
}

impl ToolSpec {
    pub fn new(id: AssetId, asset_type: AssetType, pose: Pose) -> Self {
        Self {
            id,
            asset_type,
            pose,
            parent: None,
            bounds: None,
            name: None,
        }
    }

    pub fn with_parent(mut self, parent: AssetId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Spawn a tool entity
///
/// Attachable asset types get an [`Attachable`] component and the
/// [`ATTACHABLE_TAG`], unique ones a [`UniqueAsset`] marker. Boards register with the [`MeshBoundsCache`]
/// resource when one is present: resolved right away if `spec.bounds` is
/// set, pending otherwise.
pub fn spawn_tool(world: &mut World, spec: ToolSpec) -> Entity {
    let kind = spec.asset_type.attach_kind();

    let mut builder = world
        .spawn()
        .insert(Transform::new(spec.pose))
        .insert(Grabbable::released())
        .insert(Tool::new(spec.id, spec.asset_type));

    if let Some(name) = spec.name {
        builder = builder.name(name);
    }

    if spec.asset_type.is_unique() {
        builder = builder.insert(UniqueAsset);
    }

    if let Some(kind) = kind {
        builder = builder
            .insert(Attachable {
                kind,
                parent: spec.parent,
            })
            .tag(ATTACHABLE_TAG);
    }

    let entity = builder.id();

    if kind == Some(AttachKind::Board) {
        if let Some(cache) = world.resource_mut::<MeshBoundsCache>() {
            match spec.bounds {
                Some(bounds) => cache.resolve(entity, bounds),
                None => cache.request(entity),
            }
        }
    }

    tracing::trace!(?entity, id = %spec.id, asset_type = ?spec.asset_type, "spawned tool");
    entity
}

/// Despawn a tool and drop its cached mesh bounds
///
/// Children stuck to a despawned board keep a dangling parent link, which
/// reads as detached.
pub fn despawn_tool(world: &mut World, entity: Entity) -> bool {
    if let Some(cache) = world.resource_mut::<MeshBoundsCache>() {
        cache.forget(entity);
    }
    world.despawn(entity)
}
