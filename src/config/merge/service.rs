//! MergeService: orchestrates sources, applies precedence, deserializes to RarityConfig.

use crate::config::paths::global_config_path;
use crate::config::sources::{environment, global_file};
use crate::config::RarityConfig;
use config::{ConfigError, Map};
use std::path::Path;

use super::builder_with_defaults;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources and the process environment.
    /// Precedence: defaults (lowest) -> global file -> explicit file -> environment (highest).
    pub fn load(explicit_file: Option<&Path>) -> Result<RarityConfig, ConfigError> {
        let global = global_config_path();
        Self::load_from(global.as_deref(), explicit_file, None)
    }

    /// Load with every source spelled out. `vars` stands in for the process
    /// environment when given.
    pub fn load_from(
        global_file_path: Option<&Path>,
        explicit_file: Option<&Path>,
        vars: Option<&Map<String, String>>,
    ) -> Result<RarityConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global_file_path)?;
        let builder = match explicit_file {
            Some(path) => global_file::add_explicit_to_builder(builder, path)?,
            None => builder,
        };
        let builder = environment::add_to_builder(builder, vars)?;

        builder.build()?.try_deserialize()
    }
}
