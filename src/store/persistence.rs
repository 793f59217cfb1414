//! sled-backed cache store

use crate::error::StorageError;
use crate::store::{CacheStore, CACHE_TREE};
use crate::types::Fingerprint;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

pub struct SledCacheStore {
    db: sled::Db,
    tree: sled::Tree,
    /// Entry count, seeded once at open; `Tree::len` walks the whole tree.
    entries: AtomicUsize,
}

impl SledCacheStore {
    /// Open (creating if needed) the database at `path`.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let db = sled::open(path)?;
        let store = Self::from_db(db)?;
        info!(
            path = %path.display(),
            cached_items = store.len(),
            "Opened rarity cache"
        );
        Ok(store)
    }

    pub fn from_db(db: sled::Db) -> Result<Self, StorageError> {
        let tree = db.open_tree(CACHE_TREE)?;
        let entries = AtomicUsize::new(tree.len());
        Ok(Self { db, tree, entries })
    }

    /// Throwaway database that is removed when dropped.
    pub fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db)
    }
}

impl CacheStore for SledCacheStore {
    fn get(&self, fingerprint: &Fingerprint) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.tree.get(fingerprint)?.map(|value| value.to_vec()))
    }

    fn put(&self, fingerprint: &Fingerprint, value: &[u8]) -> Result<(), StorageError> {
        if self.tree.insert(fingerprint, value)?.is_none() {
            self.entries.fetch_add(1, Ordering::Relaxed);
        }
        debug!(
            fingerprint = %hex::encode(fingerprint),
            bytes = value.len(),
            "Cached item"
        );
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.load(Ordering::Relaxed)
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }
}
