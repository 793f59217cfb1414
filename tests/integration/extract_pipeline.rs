use raritymon::error::ExtractError;
use raritymon::extract::{extract_item, Extractor, NodeQuery, PageLayout};

use super::support::ITEM_PAGE;

#[test]
fn saved_page_extracts_full_profile() {
    let item = extract_item(ITEM_PAGE).unwrap();

    assert_eq!(item.name, "Ape #7");
    assert_eq!((item.rank, item.total), (12, 500));
    assert_eq!(item.score, 87.42);

    let keys: Vec<&str> = item.traits.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Background", "Eyes", "Fur Color", "Mouth"]);

    let eyes = &item.traits["Eyes"];
    assert_eq!(eyes.trait_type, "Eyes");
    assert_eq!(eyes.name, "Laser-Red");
    assert_eq!(eyes.tier, "Legendary");
    assert_eq!(eyes.percentage, 0.8);

    assert_eq!(item.traits["Fur Color"].name, "Golden Brown");
    assert_eq!(item.traits["Mouth"].name, "Bored_Cigar");
    assert_eq!(item.traits["Mouth"].percentage, 27.25);
}

#[test]
fn score_comes_from_first_trait_data_button() {
    // The fixture has a second `item-trait-data` button ("Trait Count: 4").
    let item = extract_item(ITEM_PAGE).unwrap();
    assert_eq!(item.score, 87.42);
}

#[test]
fn dropping_one_tier_block_unbalances_the_page() {
    let html = ITEM_PAGE.replacen(r#"<div class="item-rarity-tier">Rare</div>"#, "", 1);
    match extract_item(&html) {
        Err(ExtractError::UnbalancedTraitData {
            titles,
            percentages,
            tiers,
        }) => assert_eq!((titles, percentages, tiers), (4, 4, 3)),
        other => panic!("expected unbalanced trait data, got {:?}", other),
    }
}

#[test]
fn renamed_rank_class_is_node_not_found() {
    let html = ITEM_PAGE.replace("item-rarity-rank", "item-rank-v2");
    assert!(matches!(
        extract_item(&html),
        Err(ExtractError::NodeNotFound(_))
    ));
}

#[test]
fn layout_override_recovers_renamed_rank_class() {
    let html = ITEM_PAGE.replace("item-rarity-rank", "item-rank-v2");
    let layout = PageLayout {
        rank: NodeQuery::with_class("button", "item-rank-v2"),
        ..PageLayout::default()
    };
    let item = Extractor::new(&layout).unwrap().extract(&html).unwrap();
    assert_eq!((item.rank, item.total), (12, 500));
}

#[test]
fn empty_and_non_html_bodies_are_parse_failures() {
    assert!(matches!(extract_item(""), Err(ExtractError::ParseFailure(_))));
    assert!(matches!(
        extract_item("upstream timed out"),
        Err(ExtractError::ParseFailure(_))
    ));
}

#[test]
fn trait_count_never_exceeds_block_count() {
    let duplicated = ITEM_PAGE.replace("Eyes: Laser-Red", "Background: Red");
    let item = extract_item(&duplicated).unwrap();
    assert_eq!(item.traits.len(), 3);
    assert_eq!(item.traits["Background"].name, "Red");
}
