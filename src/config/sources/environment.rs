//! Environment variable source: RARITYMON_* prefix with __ separator

use crate::config::normalize_listen;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, Map};

/// Short variable names kept for existing deployments, mapped to config keys.
const SHORT_NAMES: [(&str, &str); 2] = [
    ("RARITYMON_DB_PATH", "storage.db_path"),
    ("RARITYMON_WEB_HOST", "server.listen"),
];

/// Add environment variable overlay to builder.
///
/// Nested keys use `__` (`RARITYMON_SOURCE__TIMEOUT_SECS`). The short names in
/// `SHORT_NAMES` are applied on top, with `RARITYMON_WEB_HOST` also accepting the
/// bare `:port` form. `vars` replaces the process environment when given.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    vars: Option<&Map<String, String>>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder.add_source(
        Environment::with_prefix("RARITYMON")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(vars.cloned()),
    );

    for (name, key) in SHORT_NAMES {
        let value = match vars {
            Some(vars) => vars.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        let value = value
            .filter(|v| !v.trim().is_empty())
            .map(|v| match key {
                "server.listen" => normalize_listen(&v),
                _ => v,
            });
        builder = builder.set_override_option(key, value)?;
    }
    Ok(builder)
}
