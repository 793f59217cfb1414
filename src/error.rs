//! Error types
//!
//! Each layer owns its error enum; `ApiError` is what reaches the request boundary.

use thiserror::Error;

/// Failures raised while turning a page into an `Item`.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document could not be parsed: {0}")]
    ParseFailure(String),

    #[error("could not find the HTML node matching `{0}`")]
    NodeNotFound(String),

    #[error("HTML node matching `{0}` has no text content")]
    MissingText(String),

    #[error(
        "rarity nodes found are unbalanced: {titles} titles, {percentages} percentages, {tiers} tiers"
    )]
    UnbalancedTraitData {
        titles: usize,
        percentages: usize,
        tiers: usize,
    },

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Cache store failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cache database error: {0}")]
    Database(#[from] sled::Error),

    #[error("failed to serialize item: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Failures from the page fetch collaborator.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to source failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("source returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("invalid source URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
