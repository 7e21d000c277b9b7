//! Windowed navigation over the filtered view.
//!
//! Given the filtered view, a pivot position, and a layout budget, computes
//! which contiguous run of items is visible and where one page forward or
//! backward would start. Pure and idempotent: the same inputs always yield
//! the same window.

use crate::model::ItemStore;
use crate::state::matcher::FilteredView;

/// Measures the rendered width of an item, in layout units.
///
/// Supplied once at startup by the shell (terminal cells there); tests use
/// simple synthetic measures.
pub type MeasureFn = fn(&str) -> u16;

// ===== LayoutBudget =====

/// Layout budget, selected once at startup. The two variants are mutually
/// exclusive layout modes.
#[derive(Debug, Clone, Copy)]
pub enum LayoutBudget {
    /// Horizontal layout: items share one row of `total` width units.
    ///
    /// Each item's measured width is capped at one-third of `total` so a
    /// single long entry cannot monopolize the row; `chrome` is the fixed
    /// allowance for the prompt, the input-field reservation, and the two
    /// page markers.
    Extent {
        /// Total available width.
        total: u16,
        /// Fixed width consumed before any item is placed.
        chrome: u16,
        /// Per-item width measurement.
        measure: MeasureFn,
    },
    /// Vertical layout: a fixed number of visible rows, one item per row.
    Count {
        /// Visible row count.
        lines: u16,
    },
}

// ===== Window =====

/// The visible run of filtered items.
///
/// All fields are positions in the [`FilteredView`]. The visible range is
/// `[first, next)`, with `next = None` meaning the view's end. `prev` is the
/// pivot that scrolls one page backward; at the view head it equals `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First visible position.
    pub first: usize,
    /// First invisible position after the window, or `None` at the end.
    pub next: Option<usize>,
    /// Pivot for one page backward.
    pub prev: usize,
}

impl Window {
    /// End of the visible range (exclusive), given the view length.
    pub fn end(&self, view_len: usize) -> usize {
        self.next.unwrap_or(view_len)
    }

    /// Whether a position lies inside the visible range.
    pub fn contains(&self, pos: usize, view_len: usize) -> bool {
        pos >= self.first && pos < self.end(view_len)
    }
}

// ===== Pagination =====

/// Compute the window anchored at `pivot`.
///
/// Returns `None` for an empty view (all-none window). A forward scan from
/// the pivot accumulates budget until it would be exceeded; the position at
/// that point becomes `next`. The backward scan is symmetric and yields
/// `prev`. If everything from the pivot onward fits, `next` is `None`.
pub fn paginate(
    store: &ItemStore,
    view: &FilteredView,
    pivot: Option<usize>,
    budget: &LayoutBudget,
) -> Option<Window> {
    let pivot = pivot?.min(view.len().checked_sub(1)?);
    match *budget {
        LayoutBudget::Extent {
            total,
            chrome,
            measure,
        } => Some(paginate_extent(store, view, pivot, total, chrome, measure)),
        LayoutBudget::Count { lines } => Some(paginate_count(view, pivot, lines)),
    }
}

fn item_width(store: &ItemStore, view: &FilteredView, pos: usize, cap: u16, measure: MeasureFn) -> u16 {
    let text = view
        .get(pos)
        .and_then(|i| store.get(i))
        .map(|item| item.text())
        .unwrap_or("");
    measure(text).min(cap)
}

fn paginate_extent(
    store: &ItemStore,
    view: &FilteredView,
    pivot: usize,
    total: u16,
    chrome: u16,
    measure: MeasureFn,
) -> Window {
    let cap = total / 3;

    let mut used = u32::from(chrome);
    let mut next = None;
    for pos in pivot..view.len() {
        used += u32::from(item_width(store, view, pos, cap, measure));
        if used > u32::from(total) {
            next = Some(pos);
            break;
        }
    }

    let mut used = u32::from(chrome);
    let mut prev = pivot;
    while prev > 0 {
        used += u32::from(item_width(store, view, prev - 1, cap, measure));
        if used > u32::from(total) {
            break;
        }
        prev -= 1;
    }

    Window {
        first: pivot,
        next,
        prev,
    }
}

fn paginate_count(view: &FilteredView, pivot: usize, lines: u16) -> Window {
    let mut rows = lines;
    let mut next = None;
    for pos in pivot..view.len() {
        if rows == 0 {
            next = Some(pos);
            break;
        }
        rows -= 1;
    }

    let mut rows = lines;
    let mut prev = pivot;
    while prev > 0 && rows > 0 {
        prev -= 1;
        rows -= 1;
    }

    Window {
        first: pivot,
        next,
        prev,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "paginate_tests.rs"]
mod tests;
