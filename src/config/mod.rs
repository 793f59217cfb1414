//! Configuration
//!
//! `RarityConfig` is assembled from built-in defaults, config files and the
//! environment. See `merge::service` for precedence.

mod facade;
pub(crate) mod merge;
pub mod paths;
pub(crate) mod sources;
mod storage;

pub use facade::ConfigLoader;
pub use storage::StorageConfig;

use crate::error::ApiError;
use crate::extract::PageLayout;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RarityConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub layout: PageLayout,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RarityConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        self.storage.validate()?;
        self.server.validate()?;
        self.source.validate()
    }
}

fn default_listen() -> String {
    "0.0.0.0:1337".to_string()
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the lookup API listens on
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl ServerConfig {
    fn validate(&self) -> Result<(), ApiError> {
        parse_listen_addr(&self.listen).map(|_| ())
    }
}

/// Expand the bare `:port` form to all interfaces.
pub fn normalize_listen(listen: &str) -> String {
    let listen = listen.trim();
    match listen.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{}", port),
        None => listen.to_string(),
    }
}

/// Parse a listen address, accepting `host:port` and `:port`.
pub fn parse_listen_addr(listen: &str) -> Result<SocketAddr, ApiError> {
    if listen.trim().is_empty() {
        return Err(ApiError::ConfigError(
            "server.listen must not be empty".to_string(),
        ));
    }
    normalize_listen(listen).parse().map_err(|e| {
        ApiError::ConfigError(format!(
            "server.listen must be a socket address, got '{}': {}",
            listen, e
        ))
    })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.raritymon.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("raritymon/{}", env!("CARGO_PKG_VERSION"))
}

/// Source site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Scheme and host serving `/Item-details`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout for one page fetch
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl SourceConfig {
    fn validate(&self) -> Result<(), ApiError> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ApiError::ConfigError(format!(
                "source.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ApiError::ConfigError(
                "source.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}
