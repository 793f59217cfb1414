//! reqwest-backed page fetcher

use crate::config::SourceConfig;
use crate::error::FetchError;
use crate::fetch::PageFetcher;
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::{Duration, Instant};
use tracing::debug;

pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(source: &SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(source.timeout_secs))
            .user_agent(source.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let started = Instant::now();
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        debug!(
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched source page"
        );
        Ok(body)
    }
}
