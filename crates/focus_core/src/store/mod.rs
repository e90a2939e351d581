//! Persistence collaborator
//!
//! Frame systems report parent and pose changes through [`AssetStore`]. Calls
//! are fire-and-forget from the frame's point of view: a failed write is
//! logged by the caller and never stops the frame.

mod memory;

pub use memory::{AssetRecord, MemoryStore};

use crate::math::Pose;
use crate::scene::{AssetId, AssetType};
use thiserror::Error;

/// Errors a store backend can report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Backend cannot take writes right now
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// No asset with this id in the current project
    #[error("unknown asset {0}")]
    UnknownAsset(AssetId),
}

/// Persists tool state that outlives the session
pub trait AssetStore: Send + Sync {
    /// Record the board an asset is stuck to, `None` when detached
    fn update_parent(
        &self,
        id: AssetId,
        asset_type: AssetType,
        parent: Option<AssetId>,
    ) -> Result<(), StoreError>;

    /// Record the latest local pose of an asset
    fn update_asset_pose(&self, id: AssetId, asset_type: AssetType, pose: Pose) -> Result<(), StoreError>;

    /// Record the latest local pose of a one-per-project asset
    ///
    /// Clocks, speakers and the panels live outside the regular asset table.
    fn update_unique_asset(&self, id: AssetId, asset_type: AssetType, pose: Pose) -> Result<(), StoreError>;
}
