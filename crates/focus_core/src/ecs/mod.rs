//! Frame-stepped entity runtime
//!
//! Tools, boards and panels are [`Entity`] keys. Their data sits in one
//! [`Column`] per component type, and global state is stored as resources
//! on the [`World`]. A [`Schedule`] runs [`System`]s once per frame in
//! stage order. The attachment decision reads the world through
//! [`SceneGraph`] only.

mod component;
mod entity;
mod scene_graph;
mod schedule;
mod system;
mod world;

pub use component::{Column, Columns, Component, StorageType};
pub use entity::{Entities, Entity, EntityBuilder};
pub use scene_graph::SceneGraph;
pub use schedule::{Schedule, ScheduleBuilder};
pub use system::{system, FnSystem, System, SystemContext, SystemStage};
pub use world::{Resource, World};
