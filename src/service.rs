//! Rarity lookup service
//!
//! Read-through cache in front of fetch + extraction. Within one lookup the
//! order is always: cache read, fetch, cache write. The write happens only after
//! the item is fully extracted and serialized, with no await in between, so an
//! abandoned lookup never leaves a partial entry behind.

use crate::error::{ApiError, StorageError};
use crate::extract::Extractor;
use crate::fetch::{item_url, PageFetcher};
use crate::fingerprint::{fingerprint, to_hex};
use crate::store::CacheStore;
use crate::types::ItemId;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, info_span, warn, Instrument};

/// Where a lookup's body came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSource {
    Cache,
    Fetched,
}

impl LookupSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupSource::Cache => "HIT",
            LookupSource::Fetched => "MISS",
        }
    }
}

/// Serialized item JSON plus its provenance
#[derive(Debug, Clone)]
pub struct Lookup {
    pub body: Vec<u8>,
    pub source: LookupSource,
}

pub struct RarityService {
    store: Arc<dyn CacheStore>,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Extractor,
    base_url: String,
}

impl RarityService {
    pub fn new(
        store: Arc<dyn CacheStore>,
        fetcher: Arc<dyn PageFetcher>,
        extractor: Extractor,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            fetcher,
            extractor,
            base_url: base_url.into(),
        }
    }

    /// Cached lookup: serve the stored snapshot, or fetch, extract and store one.
    pub async fn lookup(&self, collection: &str, id: ItemId) -> Result<Lookup, ApiError> {
        let span = info_span!("lookup", collection = %collection, id);
        async {
            let key = fingerprint(collection, id);
            if let Some(body) = self.store.get(&key)? {
                debug!(fingerprint = %to_hex(&key), "Cache hit");
                return Ok(Lookup {
                    body,
                    source: LookupSource::Cache,
                });
            }
            debug!(fingerprint = %to_hex(&key), "Cache miss");
            self.fetch_and_store(collection, id).await
        }
        .instrument(span)
        .await
    }

    /// Skip the cache read and overwrite the entry with a fresh snapshot.
    pub async fn refresh(&self, collection: &str, id: ItemId) -> Result<Lookup, ApiError> {
        let span = info_span!("refresh", collection = %collection, id);
        self.fetch_and_store(collection, id).instrument(span).await
    }

    pub fn cached_items(&self) -> usize {
        self.store.len()
    }

    pub fn flush(&self) -> Result<(), StorageError> {
        self.store.flush()
    }

    async fn fetch_and_store(&self, collection: &str, id: ItemId) -> Result<Lookup, ApiError> {
        let url = item_url(&self.base_url, collection, id)?;
        let started = Instant::now();
        let html = self.fetcher.fetch(&url).await.map_err(|e| {
            warn!(url = %url, error = %e, "Source fetch failed");
            e
        })?;
        let fetch_ms = started.elapsed().as_millis() as u64;

        let item = self.extractor.extract(&html).map_err(|e| {
            warn!(url = %url, error = %e, "Extraction failed");
            e
        })?;
        let body = item.to_json().map_err(StorageError::from)?;

        let key = fingerprint(collection, id);
        self.store.put(&key, &body)?;
        info!(
            fingerprint = %to_hex(&key),
            fetch_ms,
            traits = item.traits.len(),
            "Stored fresh item"
        );

        Ok(Lookup {
            body,
            source: LookupSource::Fetched,
        })
    }
}
