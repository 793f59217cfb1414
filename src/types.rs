//! Core types shared across the extraction and cache layers.

/// Fingerprint: BLAKE3 digest of `"collection:id"`, used as the cache key
pub type Fingerprint = [u8; 32];

/// Item identifier within a collection
pub type ItemId = u64;
