//! Candidate items and the store that owns their canonical order.

/// A single candidate line.
///
/// Items carry only their text. Their position in the [`ItemStore`] is the
/// canonical order; membership in the current filtered view is tracked
/// outside the item (see `state::matcher::FilteredView`), so items are never
/// mutated after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    text: String,
}

impl Item {
    /// The item's text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Immutable-after-load ordered collection of candidate items.
///
/// Built once at startup from the input source; the canonical order (arrival
/// order of the input lines) never changes afterwards. Safe to share by
/// reference with the renderer.
#[derive(Debug, Default, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    /// Index of the longest item, tracked at load time as a layout hint for
    /// the horizontal input-field reservation.
    longest: Option<usize>,
}

impl ItemStore {
    /// Build a store from input lines, one item per line in arrival order.
    ///
    /// A trailing newline is stripped from each line; nothing else is
    /// trimmed. Empty lines are valid items. No deduplication.
    pub fn load<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut items = Vec::new();
        let mut longest: Option<usize> = None;
        let mut longest_len = 0usize;

        for line in lines {
            let mut text: String = line.into();
            if text.ends_with('\n') {
                text.pop();
            }
            if longest.is_none() || text.len() > longest_len {
                longest_len = text.len();
                longest = Some(items.len());
            }
            items.push(Item { text });
        }

        Self { items, longest }
    }

    /// Total number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a canonical position.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Forward iteration in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Text of the single longest item, if any.
    ///
    /// A rendering hint for sizing the input field, not a correctness
    /// requirement of the core.
    pub fn longest_text(&self) -> Option<&str> {
        self.longest.map(|i| self.items[i].text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_preserves_arrival_order() {
        let store = ItemStore::load(["banana", "apple", "cherry"]);
        let texts: Vec<&str> = store.iter().map(Item::text).collect();
        assert_eq!(texts, ["banana", "apple", "cherry"]);
    }

    #[test]
    fn load_strips_single_trailing_newline() {
        let store = ItemStore::load(["one\n", "two\n\n"]);
        assert_eq!(store.get(0).unwrap().text(), "one");
        assert_eq!(store.get(1).unwrap().text(), "two\n");
    }

    #[test]
    fn load_keeps_empty_lines_and_duplicates() {
        let store = ItemStore::load(["", "dup", "dup", ""]);
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(0).unwrap().text(), "");
        assert_eq!(store.get(2).unwrap().text(), "dup");
    }

    #[test]
    fn longest_text_tracks_first_maximum() {
        let store = ItemStore::load(["aa", "cccc", "bbbb"]);
        assert_eq!(store.longest_text(), Some("cccc"));
    }

    #[test]
    fn longest_text_none_when_empty() {
        let store = ItemStore::load(Vec::<String>::new());
        assert!(store.is_empty());
        assert_eq!(store.longest_text(), None);
    }
}
