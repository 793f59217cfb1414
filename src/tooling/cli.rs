//! CLI Tooling
//!
//! Command-line interface for serving and inspecting rarity lookups.

use crate::config::{parse_listen_addr, ConfigLoader, RarityConfig};
use crate::error::{ApiError, StorageError};
use crate::extract::Extractor;
use crate::fetch::HttpPageFetcher;
use crate::fingerprint::{fingerprint, to_hex};
use crate::server;
use crate::service::RarityService;
use crate::store::{CacheStore, MemoryCacheStore, SledCacheStore};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Raritymon CLI - cached rarity lookups for collectible items
#[derive(Parser)]
#[command(name = "raritymon")]
#[command(about = "Cached rarity lookups scraped from collectible item detail pages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the HTTP lookup API
    Serve {
        /// Listen address (overrides server.listen)
        #[arg(long)]
        listen: Option<String>,
        /// Cache database path (overrides storage.db_path)
        #[arg(long)]
        db_path: Option<PathBuf>,
    },
    /// Look up one item through the cache and print its JSON
    Lookup {
        collection: String,
        id: u64,
        /// Cache database path (overrides storage.db_path)
        #[arg(long)]
        db_path: Option<PathBuf>,
        /// Ignore any cached entry and store a fresh snapshot
        #[arg(long)]
        refresh: bool,
        /// Use an in-memory cache instead of the database
        #[arg(long, conflicts_with = "db_path")]
        ephemeral: bool,
    },
    /// Run extraction on a saved HTML page (no cache, no network)
    Extract {
        /// Path to the HTML file
        path: PathBuf,
    },
    /// Print the hex cache key for an item
    Fingerprint { collection: String, id: u64 },
    /// Print the effective configuration as TOML
    Config,
}

/// CLI context holding the loaded configuration
pub struct CliContext {
    config: RarityConfig,
}

impl CliContext {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        Ok(Self { config })
    }

    pub fn from_config(config: RarityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RarityConfig {
        &self.config
    }

    /// Fold `--log-*` flags into the logging section.
    pub fn apply_log_overrides(&mut self, cli: &Cli) {
        let logging = &mut self.config.logging;
        if let Some(level) = &cli.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &cli.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &cli.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &cli.log_file {
            logging.file = Some(file.clone());
        }
    }

    pub async fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Serve { listen, db_path } => {
                let addr =
                    parse_listen_addr(listen.as_deref().unwrap_or(&self.config.server.listen))?;
                let service = Arc::new(self.build_service(self.open_store(db_path.as_deref())?)?);
                server::serve(service, addr).await?;
                Ok(String::new())
            }
            Commands::Lookup {
                collection,
                id,
                db_path,
                refresh,
                ephemeral,
            } => {
                let store: Arc<dyn CacheStore> = if *ephemeral {
                    Arc::new(MemoryCacheStore::new())
                } else {
                    self.open_store(db_path.as_deref())?
                };
                let service = self.build_service(store)?;
                let lookup = if *refresh {
                    service.refresh(collection, *id).await?
                } else {
                    service.lookup(collection, *id).await?
                };
                service.flush()?;
                info!(source = lookup.source.as_str(), "Lookup complete");
                Ok(String::from_utf8_lossy(&lookup.body).into_owned())
            }
            Commands::Extract { path } => {
                let html = std::fs::read_to_string(path).map_err(|e| {
                    ApiError::InvalidInput(format!("Failed to read {}: {}", path.display(), e))
                })?;
                let item = Extractor::new(&self.config.layout)?.extract(&html)?;
                let json = item.to_json().map_err(StorageError::from)?;
                Ok(String::from_utf8_lossy(&json).into_owned())
            }
            Commands::Fingerprint { collection, id } => Ok(to_hex(&fingerprint(collection, *id))),
            Commands::Config => toml::to_string_pretty(&self.config)
                .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e))),
        }
    }

    fn open_store(&self, db_path: Option<&Path>) -> Result<Arc<dyn CacheStore>, ApiError> {
        let path = db_path.unwrap_or(&self.config.storage.db_path);
        Ok(Arc::new(SledCacheStore::open(path)?))
    }

    fn build_service(&self, store: Arc<dyn CacheStore>) -> Result<RarityService, ApiError> {
        let fetcher = Arc::new(HttpPageFetcher::new(&self.config.source)?);
        let extractor = Extractor::new(&self.config.layout)?;
        Ok(RarityService::new(
            store,
            fetcher,
            extractor,
            self.config.source.base_url.clone(),
        ))
    }
}
