//! Tests for the three-tier match engine.

use super::*;
use crate::model::ItemStore;

fn store(items: &[&str]) -> ItemStore {
    ItemStore::load(items.iter().map(|s| s.to_string()))
}

fn texts<'a>(store: &'a ItemStore, view: &FilteredView) -> Vec<&'a str> {
    view.iter().map(|i| store.get(i).unwrap().text()).collect()
}

// ===== Tier classification =====

#[test]
fn classify_exact_beats_prefix() {
    assert_eq!(
        classify("foo", "foo", MatchMode::Sensitive),
        Some(Tier::Exact)
    );
}

#[test]
fn classify_prefix_requires_strict_extension() {
    assert_eq!(
        classify("foobar", "foo", MatchMode::Sensitive),
        Some(Tier::Prefix)
    );
}

#[test]
fn classify_substring_anywhere_in_text() {
    assert_eq!(
        classify("seafood", "foo", MatchMode::Sensitive),
        Some(Tier::Substring)
    );
}

#[test]
fn classify_miss_returns_none() {
    assert_eq!(classify("bar", "foo", MatchMode::Sensitive), None);
}

#[test]
fn classify_empty_pattern_is_exact_for_everything() {
    assert_eq!(classify("anything", "", MatchMode::Sensitive), Some(Tier::Exact));
    assert_eq!(classify("", "", MatchMode::Insensitive), Some(Tier::Exact));
}

#[test]
fn classify_is_case_sensitive_by_default() {
    assert_eq!(classify("Foo", "foo", MatchMode::Sensitive), None);
}

#[test]
fn classify_insensitive_folds_ascii_case() {
    assert_eq!(
        classify("FOO", "foo", MatchMode::Insensitive),
        Some(Tier::Exact)
    );
    assert_eq!(
        classify("FOObar", "foo", MatchMode::Insensitive),
        Some(Tier::Prefix)
    );
    assert_eq!(
        classify("seaFOOd", "foo", MatchMode::Insensitive),
        Some(Tier::Substring)
    );
}

// ===== View ordering =====

#[test]
fn scenario_a_prefix_tier_in_original_order() {
    // items = ["apple","apply","banana"], pattern "app" (case-sensitive)
    // -> ["apple","apply"], both prefix tier, original order.
    let store = store(&["apple", "apply", "banana"]);
    let view = match_items(&store, "app", MatchMode::Sensitive);
    assert_eq!(texts(&store, &view), ["apple", "apply"]);
}

#[test]
fn scenario_b_exact_tier_precedes_prefix_tier() {
    // items = ["Foo","foo","foobar"], pattern "foo" case-insensitive
    // -> exact ["Foo","foo"] then prefix ["foobar"].
    let store = store(&["Foo", "foo", "foobar"]);
    let view = match_items(&store, "foo", MatchMode::Insensitive);
    assert_eq!(texts(&store, &view), ["Foo", "foo", "foobar"]);
}

#[test]
fn tiers_concatenate_exact_prefix_substring() {
    let store = store(&["xfoox", "foobar", "foo", "none"]);
    let view = match_items(&store, "foo", MatchMode::Sensitive);
    assert_eq!(texts(&store, &view), ["foo", "foobar", "xfoox"]);
}

#[test]
fn each_tier_preserves_canonical_order() {
    let store = store(&["bfoo", "foob", "afoo", "fooa"]);
    let view = match_items(&store, "foo", MatchMode::Sensitive);
    // prefix tier: foob, fooa (store order); substring tier: bfoo, afoo.
    assert_eq!(texts(&store, &view), ["foob", "fooa", "bfoo", "afoo"]);
}

#[test]
fn empty_pattern_selects_all_in_canonical_order() {
    let store = store(&["c", "a", "b", ""]);
    let view = match_items(&store, "", MatchMode::Sensitive);
    assert_eq!(texts(&store, &view), ["c", "a", "b", ""]);
}

#[test]
fn no_matches_yields_empty_view() {
    let store = store(&["alpha", "beta"]);
    let view = match_items(&store, "zzz", MatchMode::Sensitive);
    assert!(view.is_empty());
    assert_eq!(view.len(), 0);
    assert_eq!(view.get(0), None);
}

#[test]
fn view_positions_index_the_store() {
    let store = store(&["miss", "hit", "miss2", "hitter"]);
    let view = match_items(&store, "hit", MatchMode::Sensitive);
    let positions: Vec<usize> = view.iter().collect();
    assert_eq!(positions, [1, 3]);
}

#[test]
fn multibyte_pattern_matches_without_panicking() {
    let store = store(&["héllo", "hello", "oé"]);
    let view = match_items(&store, "é", MatchMode::Insensitive);
    assert_eq!(texts(&store, &view), ["héllo", "oé"]);
}

#[test]
fn pattern_longer_than_item_never_matches() {
    let store = store(&["ab"]);
    let view = match_items(&store, "abc", MatchMode::Insensitive);
    assert!(view.is_empty());
}
