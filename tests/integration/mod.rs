//! Integration tests for extraction, caching and the HTTP surface

mod cache_store;
mod extract_pipeline;
mod http_fetcher;
mod lookup_flow;
mod support;
