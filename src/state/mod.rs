//! Interaction core (pure).
//!
//! Match engine, pagination, edit buffer, and key dispatch. All state
//! transitions are pure functions testable without a terminal; the shell in
//! `crate::view` only decodes events and renders snapshots of this state.

pub mod edit_buffer;
pub mod key_handler;
pub mod matcher;
pub mod menu;
pub mod paginate;

// Re-export for convenience
pub use edit_buffer::EditBuffer;
pub use key_handler::{handle_key, NoSelection, SelectionSource};
pub use matcher::{classify, match_items, FilteredView, MatchMode, Tier};
pub use menu::MenuState;
pub use paginate::{paginate, LayoutBudget, MeasureFn, Window};
