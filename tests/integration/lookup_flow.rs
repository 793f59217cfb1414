use raritymon::error::{ApiError, ExtractError};
use raritymon::extract::Extractor;
use raritymon::fingerprint::fingerprint;
use raritymon::store::{CacheStore, SledCacheStore};
use raritymon::{Item, LookupSource, RarityService};
use std::sync::Arc;
use tempfile::TempDir;

use super::support::{CountingFetcher, ITEM_PAGE};

fn service(store: Arc<dyn CacheStore>, fetcher: Arc<CountingFetcher>) -> RarityService {
    RarityService::new(store, fetcher, Extractor::default(), "https://www.raritymon.com")
}

#[tokio::test]
async fn one_fetch_one_write_then_cached_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(SledCacheStore::open(&temp_dir.path().join("cache.db")).unwrap());
    let fetcher = CountingFetcher::new(ITEM_PAGE);
    let svc = service(store.clone(), fetcher.clone());

    let first = svc.lookup("X", 7).await.unwrap();
    assert_eq!(first.source, LookupSource::Fetched);
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&fingerprint("X", 7)).unwrap(), Some(first.body.clone()));

    let item: Item = serde_json::from_slice(&first.body).unwrap();
    assert_eq!(item.name, "Ape #7");
    assert_eq!(item.traits.len(), 4);

    let second = svc.lookup("X", 7).await.unwrap();
    assert_eq!(second.source, LookupSource::Cache);
    assert_eq!(second.body, first.body);
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn distinct_items_get_distinct_entries() {
    let store: Arc<dyn CacheStore> = Arc::new(SledCacheStore::temporary().unwrap());
    let fetcher = CountingFetcher::new(ITEM_PAGE);
    let svc = service(store.clone(), fetcher.clone());

    svc.lookup("X", 7).await.unwrap();
    svc.lookup("X", 8).await.unwrap();
    svc.lookup("Y", 7).await.unwrap();

    assert_eq!(fetcher.calls(), 3);
    assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn cache_survives_service_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cache.db");
    let first_body = {
        let store = Arc::new(SledCacheStore::open(&path).unwrap());
        let svc = service(store, CountingFetcher::new(ITEM_PAGE));
        let body = svc.lookup("X", 7).await.unwrap().body;
        svc.flush().unwrap();
        body
    };

    let store = Arc::new(SledCacheStore::open(&path).unwrap());
    let fetcher = CountingFetcher::new(ITEM_PAGE);
    let svc = service(store, fetcher.clone());
    let hit = svc.lookup("X", 7).await.unwrap();
    assert_eq!(hit.source, LookupSource::Cache);
    assert_eq!(hit.body, first_body);
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn unbalanced_page_is_never_cached() {
    let html = ITEM_PAGE.replacen(r#"<div class="item-rarity-percentage">3.5%</div>"#, "", 1);
    let store: Arc<dyn CacheStore> = Arc::new(SledCacheStore::temporary().unwrap());
    let fetcher = CountingFetcher::new(&html);
    let svc = service(store.clone(), fetcher.clone());

    for _ in 0..2 {
        let err = svc.lookup("X", 7).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Extract(ExtractError::UnbalancedTraitData { .. })
        ));
    }
    assert_eq!(fetcher.calls(), 2);
    assert!(store.is_empty());
}
