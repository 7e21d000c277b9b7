//! Three-tier match engine.
//!
//! Classifies every store item against the current pattern into exactly one
//! of three tiers (exact, prefix, substring) and produces the filtered view:
//! all exact matches first, then all prefix matches, then all substring
//! matches, each tier in canonical store order.
//!
//! The scan is O(n · m) over item count and pattern length, with no index
//! structure; the view is re-derived from scratch on every call. That keeps
//! worst-case behavior bounded and obvious for the list sizes a menu sees
//! (hundreds to low thousands of items).

use crate::model::ItemStore;

// ===== MatchMode =====

/// Comparison strategy, chosen once at startup and passed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Byte-exact comparison.
    Sensitive,
    /// ASCII-case-folding comparison.
    Insensitive,
}

// ===== Tier =====

/// Classification bucket for a matching item. First matching tier wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Item text equals the pattern.
    Exact,
    /// Item text starts with the pattern but is not equal to it.
    Prefix,
    /// Pattern occurs somewhere inside the item text.
    Substring,
}

// ===== FilteredView =====

/// Ordered sequence of store positions matching the current pattern.
///
/// Rebuilt in full by every [`match_items`] call; neighbor relationships are
/// implicit in the sequence (position ± 1), so stale views simply get
/// dropped rather than leaving dangling links behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    positions: Vec<usize>,
}

impl FilteredView {
    /// Number of items in the view.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Store position of the view entry at `pos`.
    pub fn get(&self, pos: usize) -> Option<usize> {
        self.positions.get(pos).copied()
    }

    /// Store positions in view order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }
}

// ===== Classification =====

/// Classify one item text against the pattern, if it matches at all.
///
/// An empty pattern makes every item an exact match: the empty filter shows
/// the full unfiltered list in canonical order. This is user-visible
/// behavior inherited from the original tool and deliberately preserved.
pub fn classify(text: &str, pattern: &str, mode: MatchMode) -> Option<Tier> {
    if pattern.is_empty() {
        return Some(Tier::Exact);
    }
    if eq(text, pattern, mode) {
        Some(Tier::Exact)
    } else if starts_with(text, pattern, mode) {
        Some(Tier::Prefix)
    } else if contains(text, pattern, mode) {
        Some(Tier::Substring)
    } else {
        None
    }
}

/// Build the filtered view for a pattern.
///
/// Scans the store once in canonical order, appending each item to its
/// tier's sequence, then concatenates exact + prefix + substring. Each tier
/// therefore preserves canonical order internally.
pub fn match_items(store: &ItemStore, pattern: &str, mode: MatchMode) -> FilteredView {
    let mut exact = Vec::new();
    let mut prefix = Vec::new();
    let mut substring = Vec::new();

    for (index, item) in store.iter().enumerate() {
        match classify(item.text(), pattern, mode) {
            Some(Tier::Exact) => exact.push(index),
            Some(Tier::Prefix) => prefix.push(index),
            Some(Tier::Substring) => substring.push(index),
            None => {}
        }
    }

    let mut positions = exact;
    positions.append(&mut prefix);
    positions.append(&mut substring);
    FilteredView { positions }
}

fn eq(text: &str, pattern: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Sensitive => text == pattern,
        MatchMode::Insensitive => text.eq_ignore_ascii_case(pattern),
    }
}

fn starts_with(text: &str, pattern: &str, mode: MatchMode) -> bool {
    let (text, pattern) = (text.as_bytes(), pattern.as_bytes());
    if text.len() < pattern.len() {
        return false;
    }
    match mode {
        MatchMode::Sensitive => &text[..pattern.len()] == pattern,
        MatchMode::Insensitive => text[..pattern.len()].eq_ignore_ascii_case(pattern),
    }
}

fn contains(text: &str, pattern: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Sensitive => text.contains(pattern),
        MatchMode::Insensitive => {
            let (text, pattern) = (text.as_bytes(), pattern.as_bytes());
            if text.len() < pattern.len() {
                return false;
            }
            (0..=text.len() - pattern.len())
                .any(|start| text[start..start + pattern.len()].eq_ignore_ascii_case(pattern))
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
