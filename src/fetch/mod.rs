//! Source page fetching
//!
//! The fetcher only moves bytes; HTTP-level failures surface as `FetchError`
//! and are never retried here.

pub mod http;

pub use http::HttpPageFetcher;

use crate::error::FetchError;
use crate::types::ItemId;
use async_trait::async_trait;
use reqwest::Url;

/// Retrieves raw item page HTML.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Item detail page URL: `<base>/Item-details?collection=<collection>&id=<id>`.
pub fn item_url(base_url: &str, collection: &str, id: ItemId) -> Result<Url, FetchError> {
    let base = base_url.trim_end_matches('/');
    let mut url = Url::parse(&format!("{}/Item-details", base))
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;
    url.query_pairs_mut()
        .append_pair("collection", collection)
        .append_pair("id", &id.to_string());
    Ok(url)
}
