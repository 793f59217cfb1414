//! Cache key computation

use crate::types::{Fingerprint, ItemId};

/// Compute the cache fingerprint for an item.
///
/// Hashes the string `"collection:id"` with BLAKE3. The id is formatted from its
/// integer value, so differently padded path segments share one entry.
pub fn fingerprint(collection: &str, id: ItemId) -> Fingerprint {
    let key = format!("{}:{}", collection, id);
    *blake3::hash(key.as_bytes()).as_bytes()
}

/// Lowercase hex rendering of a fingerprint, for logs and the CLI.
pub fn to_hex(fp: &Fingerprint) -> String {
    hex::encode(fp)
}
