//! Field parsers
//!
//! Total text-to-value converters for the label strings found on item pages.
//! A miss returns a sentinel instead of an error so one bad label cannot sink
//! the rest of the page.

use crate::item::MISSING;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static RANK_MATCHER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Rank\s([0-9]+)\s/\s([0-9]+)").expect("rank pattern compiles"));

static RARITY_SCORE_MATCHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Rarity\sScore:\s([0-9.]+)").expect("rarity score pattern compiles")
});

static TRAIT_MATCHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\w\s_-]+):\s([\w\s_-]+)").expect("trait entry pattern compiles")
});

/// Parse `Rank <N> / <M>` into `(rank, total)`, or `(-1, -1)` on a miss.
pub fn parse_rank(text: &str) -> (i64, i64) {
    let Some(caps) = RANK_MATCHER.captures(text.trim()) else {
        return (MISSING, MISSING);
    };
    match (caps[1].parse::<i64>(), caps[2].parse::<i64>()) {
        (Ok(rank), Ok(total)) => (rank, total),
        _ => (MISSING, MISSING),
    }
}

/// Parse `Rarity Score: <float>`, or -1 on a miss.
pub fn parse_rarity_score(text: &str) -> f64 {
    RARITY_SCORE_MATCHER
        .captures(text.trim())
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .unwrap_or(MISSING as f64)
}

/// Split `<key>: <value>` into its parts, or `("", "")` on a miss.
pub fn parse_trait_entry(text: &str) -> (String, String) {
    match TRAIT_MATCHER.captures(text.trim()) {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => (String::new(), String::new()),
    }
}

/// Parse a percentage such as ` 3.5% `.
///
/// Malformed input becomes `0.0` and is reported at warn level.
pub fn parse_percentage(text: &str) -> f64 {
    let cleaned = text.replace('%', "");
    let cleaned = cleaned.trim();
    match cleaned.parse::<f64>() {
        Ok(value) => value,
        Err(e) => {
            warn!(raw = %text, error = %e, "Unparseable trait percentage, using 0");
            0.0
        }
    }
}
