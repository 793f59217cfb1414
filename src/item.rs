//! Item records
//!
//! The rarity profile of one collectible as scraped at fetch time. The JSON form
//! of `Item` is both the HTTP response body and the cached value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel for rank, total and score values the page did not expose.
pub const MISSING: i64 = -1;

/// Item: full rarity profile of one collectible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub rank: i64,
    pub total: i64,
    pub score: f64,
    /// Keyed by trait type; ordered so serialization is stable
    pub traits: BTreeMap<String, Trait>,
}

/// One categorical attribute and its rarity within the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    #[serde(rename = "type")]
    pub trait_type: String,
    pub name: String,
    pub tier: String,
    pub percentage: f64,
}

impl Item {
    pub fn new(name: String, rank: i64, total: i64, score: f64) -> Self {
        Self {
            name,
            rank,
            total,
            score,
            traits: BTreeMap::new(),
        }
    }

    /// Record a trait, replacing any earlier one of the same type.
    pub fn insert_trait(&mut self, t: Trait) -> Option<Trait> {
        self.traits.insert(t.trait_type.clone(), t)
    }

    /// Serialize to the cached/served JSON form.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }
}
