//! Raritymon: Cached Rarity Lookups
//!
//! Scrapes the rarity profile of a collectible item (name, rank, score and
//! per-trait tier/percentage) from its detail page, and serves it through a
//! content-addressed cache so each item is fetched once.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod fingerprint;
pub mod item;
pub mod logging;
pub mod server;
pub mod service;
pub mod store;
pub mod tooling;
pub mod types;

pub use error::{ApiError, ExtractError, FetchError, StorageError};
pub use extract::{extract_item, Extractor};
pub use item::{Item, Trait};
pub use service::{Lookup, LookupSource, RarityService};
