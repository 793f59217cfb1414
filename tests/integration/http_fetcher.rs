use raritymon::config::SourceConfig;
use raritymon::error::FetchError;
use raritymon::fetch::{item_url, HttpPageFetcher, PageFetcher};
use std::sync::atomic::Ordering;

use super::support::{start_source_site, ITEM_PAGE};

fn fetcher(base_url: &str) -> HttpPageFetcher {
    HttpPageFetcher::new(&SourceConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..SourceConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn fetches_page_body() {
    let site = start_source_site().await;
    let url = item_url(&site.base_url, "apes", 7).unwrap();

    let body = fetcher(&site.base_url).fetch(&url).await.unwrap();
    assert_eq!(body, ITEM_PAGE);
    assert_eq!(site.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let site = start_source_site().await;
    let url = item_url(&site.base_url, "broken", 7).unwrap();

    let err = fetcher(&site.base_url).fetch(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 503, .. }));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = format!("http://{addr}");
    let url = item_url(&base, "apes", 7).unwrap();
    let err = fetcher(&base).fetch(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}
