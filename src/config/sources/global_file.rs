//! Config file sources: the optional global file and an explicit `--config` file.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

/// Add the global config file, if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    global_path: Option<&Path>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(match global_path {
        Some(path) => builder.add_source(File::from(path).required(false)),
        None => builder,
    })
}

/// Add a file the user named explicitly; it must exist.
pub fn add_explicit_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    Ok(builder.add_source(File::from(path).required(true)))
}
