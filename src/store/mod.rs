//! Rarity cache store
//!
//! Content-addressed storage mapping item fingerprints to serialized items.
//! A miss is `Ok(None)`, never an error. Writes are unconditional upserts.

pub mod memory;
pub mod persistence;

pub use memory::MemoryCacheStore;
pub use persistence::SledCacheStore;

use crate::error::StorageError;
use crate::types::Fingerprint;

/// Name of the single namespace holding cached items.
pub const CACHE_TREE: &str = "RarityCache";

/// Cache store interface
///
/// Each `get` and `put` is atomic on its own. Callers get no cross-call
/// transaction; concurrent writers of one key resolve as last write wins.
pub trait CacheStore: Send + Sync {
    fn get(&self, fingerprint: &Fingerprint) -> Result<Option<Vec<u8>>, StorageError>;
    fn put(&self, fingerprint: &Fingerprint, value: &[u8]) -> Result<(), StorageError>;

    /// Number of cached items
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make completed writes durable. No-op for volatile stores.
    fn flush(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
