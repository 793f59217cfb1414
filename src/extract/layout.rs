//! Page layout: where each field lives in the item page markup.
//!
//! Defaults describe the source site's current markup. Every query can be
//! overridden from configuration when the markup drifts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag plus optional attribute filter.
///
/// `class` matches one entry of the element's class list; any other attribute
/// must equal `value` exactly. An attribute without a value only requires presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeQuery {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl NodeQuery {
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attribute: None,
            value: None,
        }
    }

    pub fn with_class(tag: &str, class: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attribute: Some("class".to_string()),
            value: Some(class.to_string()),
        }
    }

    /// CSS selector equivalent of this query.
    pub fn to_css(&self) -> String {
        let tag = self.tag.trim();
        match (self.attribute.as_deref(), self.value.as_deref()) {
            (None, _) => tag.to_string(),
            (Some(attr), None) => format!("{}[{}]", tag, attr),
            (Some("class"), Some(value)) => format!("{}[class~=\"{}\"]", tag, escape(value)),
            (Some(attr), Some(value)) => format!("{}[{}=\"{}\"]", tag, attr, escape(value)),
        }
    }
}

impl fmt::Display for NodeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// The six queries the extraction pipeline runs against a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default = "default_name")]
    pub name: NodeQuery,
    #[serde(default = "default_rank")]
    pub rank: NodeQuery,
    #[serde(default = "default_score")]
    pub score: NodeQuery,
    #[serde(default = "default_trait_titles")]
    pub trait_titles: NodeQuery,
    #[serde(default = "default_trait_percentages")]
    pub trait_percentages: NodeQuery,
    #[serde(default = "default_trait_tiers")]
    pub trait_tiers: NodeQuery,
}

fn default_name() -> NodeQuery {
    NodeQuery::tag("h2")
}

fn default_rank() -> NodeQuery {
    NodeQuery::with_class("button", "item-rarity-rank")
}

fn default_score() -> NodeQuery {
    NodeQuery::with_class("button", "item-trait-data")
}

fn default_trait_titles() -> NodeQuery {
    NodeQuery::with_class("h3", "tier-title")
}

fn default_trait_percentages() -> NodeQuery {
    NodeQuery::with_class("div", "item-rarity-percentage")
}

fn default_trait_tiers() -> NodeQuery {
    NodeQuery::with_class("div", "item-rarity-tier")
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            name: default_name(),
            rank: default_rank(),
            score: default_score(),
            trait_titles: default_trait_titles(),
            trait_percentages: default_trait_percentages(),
            trait_tiers: default_trait_tiers(),
        }
    }
}
