//! Prelude module for common imports
//!
//! ```rust,ignore
//! use focus_core::prelude::*;
//! ```

// ECS
pub use crate::ecs::{
    system, Component, Entity, SceneGraph, Schedule, ScheduleBuilder, System, SystemContext,
    SystemStage, World,
};

// Math
pub use crate::math::{BoundingBox, Pose, Quat, Vec3};

// Geometry
pub use crate::geometry::{point_to_rectangle_distance, point_to_segment_distance, Rectangle};

// Scene
pub use crate::scene::{
    despawn_tool, spawn_tool, world_pose, ActiveProject, AssetId, AssetType, AttachKind,
    Attachable, Grabbable, MeshBoundsCache, Tool, ToolSpec, Transform, TransformParent, UniqueAsset,
};

// Systems
pub use crate::systems::{link_to_parent_boards, BoardParentingSystem, PoseSyncSystem, Transition};

// Persistence
pub use crate::store::{AssetStore, MemoryStore, StoreError};

// Config & errors
pub use crate::config::{AttachConfig, FocusConfig, PoseSyncConfig};
pub use crate::error::{Error, Result};
