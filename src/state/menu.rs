//! Central menu state.
//!
//! `MenuState` owns everything the interaction loop mutates: the candidate
//! store, the edit buffer, and the filtered view / window / selection that
//! are recomputed as a unit after every buffer mutation. The key handler in
//! `state::key_handler` drives it; the view only reads from it.

use tracing::debug;

use crate::model::ItemStore;
use crate::state::edit_buffer::EditBuffer;
use crate::state::matcher::{match_items, FilteredView, MatchMode};
use crate::state::paginate::{paginate, LayoutBudget, Window};

/// All mutable interaction state, plus the read-only configuration the
/// recompute pipeline needs (comparison mode, layout budget, prompt).
#[derive(Debug)]
pub struct MenuState {
    pub(crate) store: ItemStore,
    pub(crate) buffer: EditBuffer,
    pub(crate) mode: MatchMode,
    pub(crate) budget: LayoutBudget,
    pub(crate) prompt: String,
    pub(crate) view: FilteredView,
    pub(crate) window: Option<Window>,
    pub(crate) selection: Option<usize>,
}

impl MenuState {
    /// Build the initial state and run the first match pass (empty pattern,
    /// so the full list is visible and the first item selected).
    pub fn new(store: ItemStore, mode: MatchMode, budget: LayoutBudget, prompt: String) -> Self {
        let mut state = Self {
            store,
            buffer: EditBuffer::new(),
            mode,
            budget,
            prompt,
            view: FilteredView::default(),
            window: None,
            selection: None,
        };
        state.refilter();
        state
    }

    /// Re-run the match engine with the current buffer contents, re-paginate
    /// from the new view's head, and reset the selection to the window's
    /// first item.
    ///
    /// Called after every buffer mutation; never on pure cursor moves.
    pub(crate) fn refilter(&mut self) {
        self.view = match_items(&self.store, self.buffer.text(), self.mode);
        let pivot = if self.view.is_empty() { None } else { Some(0) };
        self.window = paginate(&self.store, &self.view, pivot, &self.budget);
        self.selection = self.window.map(|w| w.first);
        debug!(
            pattern = self.buffer.text(),
            matched = self.view.len(),
            "refiltered"
        );
    }

    /// Re-anchor the window at `pivot` without re-matching.
    ///
    /// Used by navigation keys; the selection is left alone (callers set it
    /// before or after, keeping it inside the new window).
    pub(crate) fn repaginate_at(&mut self, pivot: usize) {
        self.window = paginate(&self.store, &self.view, Some(pivot), &self.budget);
    }

    /// Install a new layout budget (terminal resize) and recompute the
    /// window at the current anchor, clamping the selection into it.
    pub fn set_budget(&mut self, budget: LayoutBudget) {
        self.budget = budget;
        let pivot = self.window.map(|w| w.first).or(if self.view.is_empty() {
            None
        } else {
            Some(0)
        });
        self.window = paginate(&self.store, &self.view, pivot, &self.budget);
        if let (Some(win), Some(sel)) = (self.window, self.selection) {
            let end = win.end(self.view.len());
            if sel < win.first {
                self.selection = Some(win.first);
            } else if sel >= end && end > win.first {
                self.selection = Some(end - 1);
            }
        }
    }

    // ===== Read access for the shell =====

    /// The candidate store.
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Current buffer contents (the active pattern).
    pub fn pattern(&self) -> &str {
        self.buffer.text()
    }

    /// Cursor byte offset within the pattern.
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// The configured prompt, possibly empty.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The active layout budget.
    pub fn budget(&self) -> &LayoutBudget {
        &self.budget
    }

    /// Number of items matching the current pattern.
    pub fn match_count(&self) -> usize {
        self.view.len()
    }

    /// View position of the selection, if any.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Text of the selected item, if any.
    pub fn selected_text(&self) -> Option<&str> {
        let pos = self.selection?;
        let index = self.view.get(pos)?;
        Some(self.store.get(index)?.text())
    }

    /// The current window, if the view is non-empty.
    pub fn window(&self) -> Option<Window> {
        self.window
    }

    /// Visible items as `(view position, text)` pairs, in view order.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        let range = match self.window {
            Some(win) => win.first..win.end(self.view.len()),
            None => 0..0,
        };
        range.filter_map(move |pos| {
            let index = self.view.get(pos)?;
            Some((pos, self.store.get(index)?.text()))
        })
    }

    /// Whether a page exists before the window.
    pub fn has_prev_page(&self) -> bool {
        self.window.is_some_and(|w| w.first > 0)
    }

    /// Whether a page exists after the window.
    pub fn has_next_page(&self) -> bool {
        self.window.is_some_and(|w| w.next.is_some())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
