//! Shared fixtures: a saved item page, a counting fetcher and a fake source site.

use async_trait::async_trait;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use raritymon::error::FetchError;
use raritymon::fetch::PageFetcher;
use reqwest::Url;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const ITEM_PAGE: &str = include_str!("../fixtures/item_page.html");

/// Serves a fixed body and counts calls.
pub struct CountingFetcher {
    body: String,
    calls: AtomicUsize,
}

impl CountingFetcher {
    pub fn new(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: body.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for CountingFetcher {
    async fn fetch(&self, _url: &Url) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }
}

/// Fake source site serving `/Item-details`.
///
/// `collection=broken` answers 503 and `collection=empty` answers an empty 200.
pub struct SourceSite {
    pub base_url: String,
    pub hits: Arc<AtomicUsize>,
}

async fn item_details(
    State(hits): State<Arc<AtomicUsize>>,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    hits.fetch_add(1, Ordering::SeqCst);
    match params.get("collection").map(String::as_str) {
        Some("broken") => (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance").into_response(),
        Some("empty") => Html(String::new()).into_response(),
        _ => Html(ITEM_PAGE).into_response(),
    }
}

/// Bind a fake source site to an ephemeral port.
pub async fn start_source_site() -> SourceSite {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/Item-details", get(item_details))
        .with_state(hits.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    SourceSite {
        base_url: format!("http://{addr}"),
        hits,
    }
}
