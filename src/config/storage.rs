//! StorageConfig for the rarity cache database.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_db_path() -> PathBuf {
    PathBuf::from("raritymon.db")
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the sled database directory (relative paths resolve against the cwd)
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl StorageConfig {
    pub(crate) fn validate(&self) -> Result<(), ApiError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(ApiError::ConfigError(
                "storage.db_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}
