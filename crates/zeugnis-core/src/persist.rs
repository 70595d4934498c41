//! Snapshot persistence
//!
//! The whole form is saved as one flat JSON snapshot under a single named
//! slot. A missing slot is the normal first-run case; a slot holding
//! unreadable JSON is logged and treated the same way.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::snapshot::FormSnapshot;

/// Slot name the snapshot is stored under
pub const SNAPSHOT_SLOT: &str = "referenceLetterData";

/// A minimal string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Loads and saves the form snapshot in one slot of a store
#[derive(Debug, Clone)]
pub struct SnapshotStore<S> {
    store: S,
    slot: String,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    /// Use the default slot
    pub fn new(store: S) -> Self {
        Self::with_slot(store, SNAPSHOT_SLOT)
    }

    pub fn with_slot(store: S, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
        }
    }

    /// The saved snapshot, or `None` when absent or unreadable
    pub fn load(&self) -> Result<Option<FormSnapshot>> {
        let Some(json) = self.store.get(&self.slot)? else {
            debug!(slot = %self.slot, "No saved snapshot");
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(snapshot) => {
                debug!(slot = %self.slot, "Loaded saved snapshot");
                Ok(Some(snapshot))
            }
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "Ignoring corrupt snapshot");
                Ok(None)
            }
        }
    }

    /// Overwrite the slot with `snapshot`
    pub fn save(&mut self, snapshot: &FormSnapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        self.store.set(&self.slot, &json)?;
        info!(slot = %self.slot, "Snapshot saved");
        Ok(())
    }

    /// Remove the slot
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(&self.slot)?;
        info!(slot = %self.slot, "Snapshot cleared");
        Ok(())
    }

    /// The underlying store
    pub fn inner(&self) -> &S {
        &self.store
    }
}
