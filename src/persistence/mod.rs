//! Persistence Layer
//!
//! Durable single-record snapshot of the store's `sites` slice, JSON-shaped
//! `{ "sites": [...] }` under a fixed storage key. No schema version field;
//! shape repair is handled by the checklist reconciler and the seed-union
//! logic on rehydrate.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::domain::{Site, StoreError, StoreResult};

/// Fixed storage key for the snapshot record
pub const STORAGE_KEY: &str = "site_timeline_data";

/// The persisted slice of store state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredData {
    pub sites: Vec<Site>,
}

/// Durable key-value storage the store snapshots itself into/out of
pub trait SnapshotStore: Send + Sync {
    /// Load the snapshot, `None` when nothing has been stored yet
    fn load(&self) -> StoreResult<Option<StoredData>>;

    /// Overwrite the snapshot
    fn save(&self, data: &StoredData) -> StoreResult<()>;
}

/// JSON-file snapshot store: one `<key>.json` file in a directory
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| StoreError::Persistence(e.to_string()))?;
        Ok(JsonFileStore {
            path: dir.join(format!("{}.json", STORAGE_KEY)),
        })
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<StoredData>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw =
            std::fs::read_to_string(&self.path).map_err(|e| StoreError::Persistence(e.to_string()))?;
        let data =
            serde_json::from_str(&raw).map_err(|e| StoreError::Persistence(e.to_string()))?;
        Ok(Some(data))
    }

    fn save(&self, data: &StoredData) -> StoreResult<()> {
        let raw =
            serde_json::to_string(data).map_err(|e| StoreError::Persistence(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| StoreError::Persistence(e.to_string()))
    }
}

/// In-memory snapshot store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<StoredData>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot, as if a previous session had saved
    pub fn with_data(data: StoredData) -> Self {
        MemorySnapshotStore {
            slot: Mutex::new(Some(data)),
        }
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> StoreResult<Option<StoredData>> {
        match self.slot.lock() {
            Ok(slot) => Ok(slot.clone()),
            Err(e) => Err(StoreError::Persistence(e.to_string())),
        }
    }

    fn save(&self, data: &StoredData) -> StoreResult<()> {
        match self.slot.lock() {
            Ok(mut slot) => {
                *slot = Some(data.clone());
                Ok(())
            }
            Err(e) => Err(StoreError::Persistence(e.to_string())),
        }
    }
}
