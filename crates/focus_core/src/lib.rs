//! # Focus Core
//!
//! The board attachment core of the Focus spatial workspace.
//!
//! This crate provides:
//! - **ECS** (Entity Component System) driving frame-stepped systems
//! - **Geometry** for point-to-rectangle proximity tests against boards
//! - **Scene components** for tools, boards, grab state and parenting
//! - **Systems** that stick grabbed tools to nearby boards and persist poses
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use focus_core::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let config = FocusConfig::default();
//!
//! let mut world = World::new();
//! world.insert_resource(MeshBoundsCache::new());
//!
//! let mut schedule = ScheduleBuilder::new()
//!     .add(BoardParentingSystem::new(store.clone(), config.attach.clone()))
//!     .add(PoseSyncSystem::new(store, config.pose_sync.clone()))
//!     .build();
//!
//! schedule.run(&mut world, 1.0 / 72.0, 0.0, 0);
//! ```

// ECS - Entity Component System
pub mod ecs;

// Math utilities
pub mod math;

// Proximity geometry
pub mod geometry;

// Scene components
pub mod scene;

// Persistence collaborator
pub mod store;

// Configuration
pub mod config;

// Errors
pub mod error;

// Built-in systems
pub mod systems;

// Prelude for common imports
pub mod prelude;

// Re-export core types at crate root
pub use config::{AttachConfig, FocusConfig, PoseSyncConfig};
pub use ecs::{Component, Entity, SceneGraph, System, SystemContext, SystemStage, World};
pub use error::{Error, Result};
pub use geometry::{point_to_rectangle_distance, point_to_segment_distance, Rectangle};
pub use math::{BoundingBox, Pose, Quat, Vec3};
pub use scene::{
    Attachable, AssetId, AssetType, AttachKind, Grabbable, MeshBoundsCache, Tool,
    Transform, TransformParent, UniqueAsset,
};
pub use store::{AssetStore, MemoryStore, StoreError};
pub use systems::{link_to_parent_boards, BoardParentingSystem, PoseSyncSystem};
