//! In-memory asset store

use super::{AssetStore, StoreError};
use crate::math::Pose;
use crate::scene::{AssetId, AssetType};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// What the store last heard about one asset
#[derive(Clone, Debug, PartialEq)]
pub struct AssetRecord {
    pub asset_type: AssetType,
    pub parent: Option<AssetId>,
    pub pose: Option<Pose>,
    pub parent_writes: usize,
    pub pose_writes: usize,
}

impl AssetRecord {
    fn new(asset_type: AssetType) -> Self {
        Self {
            asset_type,
            parent: None,
            pose: None,
            parent_writes: 0,
            pose_writes: 0,
        }
    }
}

#[derive(Debug, Default)]
struct Tables {
    records: FxHashMap<AssetId, AssetRecord>,
    /// Ids a strict store accepts; `None` accepts any id
    known: Option<FxHashSet<AssetId>>,
}

impl Tables {
    fn record(&mut self, id: AssetId, asset_type: AssetType) -> Result<&mut AssetRecord, StoreError> {
        if self.known.as_ref().is_some_and(|known| !known.contains(&id)) {
            return Err(StoreError::UnknownAsset(id));
        }
        let record = self
            .records
            .entry(id)
            .or_insert_with(|| AssetRecord::new(asset_type));
        record.asset_type = asset_type;
        Ok(record)
    }
}

/// Keeps the latest parent and pose per asset
///
/// Used by tests and the simulator. A [`MemoryStore::strict`] store only
/// accepts ids passed to [`MemoryStore::register`], like a database that
/// only knows the current project's assets. [`MemoryStore::set_unavailable`]
/// makes every write fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Store accepting writes for any asset id
    pub fn new() -> Self {
        Self::default()
    }

    /// Store rejecting writes for unregistered asset ids
    pub fn strict() -> Self {
        let store = Self::default();
        store.lock().known = Some(FxHashSet::default());
        store
    }

    /// Accept writes for `id`; no effect on a non-strict store
    pub fn register(&self, id: AssetId) {
        if let Some(known) = self.lock().known.as_mut() {
            known.insert(id);
        }
    }

    /// Reject all writes while `unavailable` is set
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    /// Last persisted parent, `None` if never written or detached
    pub fn parent_of(&self, id: AssetId) -> Option<AssetId> {
        self.lock().records.get(&id).and_then(|r| r.parent)
    }

    pub fn pose_of(&self, id: AssetId) -> Option<Pose> {
        self.lock().records.get(&id).and_then(|r| r.pose)
    }

    pub fn parent_writes(&self, id: AssetId) -> usize {
        self.lock().records.get(&id).map_or(0, |r| r.parent_writes)
    }

    pub fn pose_writes(&self, id: AssetId) -> usize {
        self.lock().records.get(&id).map_or(0, |r| r.pose_writes)
    }

    /// Snapshot of every record, sorted by asset id
    pub fn records(&self) -> Vec<(AssetId, AssetRecord)> {
        let mut records: Vec<_> = self
            .lock()
            .records
            .iter()
            .map(|(id, record)| (*id, record.clone()))
            .collect();
        records.sort_by_key(|(id, _)| *id);
        records
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        // writers never panic mid-update, so a poisoned lock still holds whole records
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable("memory store disabled".to_string()));
        }
        Ok(())
    }

    fn write_pose(&self, id: AssetId, asset_type: AssetType, pose: Pose) -> Result<(), StoreError> {
        self.check_available()?;
        let mut tables = self.lock();
        let record = tables.record(id, asset_type)?;
        record.pose = Some(pose);
        record.pose_writes += 1;
        Ok(())
    }
}

impl AssetStore for MemoryStore {
    fn update_parent(
        &self,
        id: AssetId,
        asset_type: AssetType,
        parent: Option<AssetId>,
    ) -> Result<(), StoreError> {
        self.check_available()?;
        let mut tables = self.lock();
        let record = tables.record(id, asset_type)?;
        record.parent = parent;
        record.parent_writes += 1;
        Ok(())
    }

    fn update_asset_pose(&self, id: AssetId, asset_type: AssetType, pose: Pose) -> Result<(), StoreError> {
        self.write_pose(id, asset_type, pose)
    }

    fn update_unique_asset(&self, id: AssetId, asset_type: AssetType, pose: Pose) -> Result<(), StoreError> {
        self.write_pose(id, asset_type, pose)
    }
}
