//! Scene components
//!
//! Components the host attaches to tool entities, the pending/resolved mesh
//! bounds cache, and helpers to spawn tools and resolve world poses.

mod attachable;
mod bounds_cache;
mod grab;
mod tool;
mod transform;

pub use attachable::{AttachKind, Attachable, ATTACHABLE_TAG};
pub use bounds_cache::{BoundsState, MeshBoundsCache};
pub use grab::Grabbable;
pub use tool::{
    despawn_tool, spawn_tool, ActiveProject, AssetId, AssetType, Tool, ToolSpec, UniqueAsset,
};
pub use transform::{world_pose, Transform, TransformParent};
