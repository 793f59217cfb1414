//! In-process cache store, lost on exit.

use crate::error::StorageError;
use crate::store::CacheStore;
use crate::types::Fingerprint;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
pub struct MemoryCacheStore {
    entries: RwLock<HashMap<Fingerprint, Vec<u8>>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryCacheStore {
    fn get(&self, fingerprint: &Fingerprint) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.read().get(fingerprint).cloned())
    }

    fn put(&self, fingerprint: &Fingerprint, value: &[u8]) -> Result<(), StorageError> {
        self.entries.write().insert(*fingerprint, value.to_vec());
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}
