//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::RarityConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from the global file, an optional
    /// explicit file and the process environment.
    pub fn load(explicit_file: Option<&Path>) -> Result<RarityConfig, ApiError> {
        let config = MergeService::load(explicit_file)?;
        config.validate()?;
        Ok(config)
    }

    /// Create default configuration.
    pub fn default() -> RarityConfig {
        RarityConfig::default()
    }
}
