//! Extraction pipeline
//!
//! Turns one item detail page into an `Item`. Either every required node is found
//! and the trait blocks line up, or no item is produced.

pub mod document;
pub mod fields;
pub mod layout;

pub use document::{Document, Node, Query};
pub use fields::{parse_percentage, parse_rank, parse_rarity_score, parse_trait_entry};
pub use layout::{NodeQuery, PageLayout};

use crate::error::ExtractError;
use crate::item::{Item, Trait};
use tracing::{debug, warn};

/// Compiled page layout, ready to run against any number of pages.
#[derive(Debug, Clone)]
pub struct Extractor {
    name: Query,
    rank: Query,
    score: Query,
    trait_titles: Query,
    trait_percentages: Query,
    trait_tiers: Query,
}

impl Extractor {
    pub fn new(layout: &PageLayout) -> Result<Self, ExtractError> {
        Ok(Self {
            name: Query::compile(&layout.name)?,
            rank: Query::compile(&layout.rank)?,
            score: Query::compile(&layout.score)?,
            trait_titles: Query::compile(&layout.trait_titles)?,
            trait_percentages: Query::compile(&layout.trait_percentages)?,
            trait_tiers: Query::compile(&layout.trait_tiers)?,
        })
    }

    pub fn extract(&self, raw_html: &str) -> Result<Item, ExtractError> {
        let doc = Document::parse(raw_html)?;

        let name = doc.find_one(&self.name)?;
        let rank = doc.find_one(&self.rank)?;
        let score = doc.find_one(&self.score)?;

        let titles = doc.find_all(&self.trait_titles);
        let percentages = doc.find_all(&self.trait_percentages);
        let tiers = doc.find_all(&self.trait_tiers);

        if titles.len() != percentages.len() || percentages.len() != tiers.len() {
            return Err(ExtractError::UnbalancedTraitData {
                titles: titles.len(),
                percentages: percentages.len(),
                tiers: tiers.len(),
            });
        }

        let (rank, total) = parse_rank(rank.text()?);
        let mut item = Item::new(
            name.text()?.to_string(),
            rank,
            total,
            parse_rarity_score(score.text()?),
        );

        for ((title, percentage), tier) in titles.iter().zip(&percentages).zip(&tiers) {
            let (trait_type, trait_value) = parse_trait_entry(title.text()?);
            if trait_type.is_empty() {
                warn!(title = title.text()?, "Trait title did not match `key: value`");
            }
            let replaced = item.insert_trait(Trait {
                trait_type,
                name: trait_value,
                tier: tier.text()?.to_string(),
                percentage: parse_percentage(percentage.text()?),
            });
            if let Some(previous) = replaced {
                debug!(trait_type = %previous.trait_type, "Duplicate trait type, keeping the later block");
            }
        }

        debug!(
            name = %item.name,
            rank = item.rank,
            total = item.total,
            traits = item.traits.len(),
            "Extracted item"
        );
        Ok(item)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        // The built-in layout is made of fixed, valid selectors.
        Self::new(&PageLayout::default()).expect("default page layout compiles")
    }
}

/// Extract an item using the default page layout.
pub fn extract_item(raw_html: &str) -> Result<Item, ExtractError> {
    Extractor::default().extract(raw_html)
}
