//! End-to-end interaction flows.
//!
//! Each test plays a realistic key sequence against a fresh menu and checks
//! the outcome, exercising matcher, pagination, edit buffer, and key
//! dispatch together.

use crate::model::{ItemStore, Key, Modifiers, Outcome};
use crate::state::key_handler::{handle_key, NoSelection};
use crate::state::{LayoutBudget, MatchMode, MenuState};

fn menu(items: &[&str], lines: u16, mode: MatchMode) -> MenuState {
    MenuState::new(
        ItemStore::load(items.iter().copied()),
        mode,
        LayoutBudget::Count { lines },
        String::new(),
    )
}

fn type_str(state: &mut MenuState, text: &str) {
    for c in text.chars() {
        handle_key(state, Key::Char(c), Modifiers::NONE, &mut NoSelection);
    }
}

fn press(state: &mut MenuState, key: Key) -> Option<Outcome> {
    handle_key(state, key, Modifiers::NONE, &mut NoSelection)
}

fn visible_texts(state: &MenuState) -> Vec<String> {
    state.visible().map(|(_, text)| text.to_string()).collect()
}

#[test]
fn filter_then_confirm() {
    let mut state = menu(&["chromium", "firefox", "surf"], 5, MatchMode::Sensitive);
    type_str(&mut state, "fire");
    assert_eq!(state.match_count(), 1);
    assert_eq!(
        press(&mut state, Key::Enter),
        Some(Outcome::Confirmed("firefox".to_string()))
    );
}

#[test]
fn tiers_order_the_view_exact_prefix_substring() {
    let mut state = menu(&["barfoo", "foobar", "foo"], 5, MatchMode::Sensitive);
    type_str(&mut state, "foo");
    assert_eq!(visible_texts(&state), ["foo", "foobar", "barfoo"]);
}

#[test]
fn case_insensitive_mode_matches_across_case() {
    let mut state = menu(&["Firefox", "chromium"], 5, MatchMode::Insensitive);
    type_str(&mut state, "fIrE");
    assert_eq!(
        press(&mut state, Key::Enter),
        Some(Outcome::Confirmed("Firefox".to_string()))
    );
}

#[test]
fn paging_forward_then_moving_within_the_page() {
    let items: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();
    let refs: Vec<&str> = items.iter().map(String::as_str).collect();
    let mut state = menu(&refs, 3, MatchMode::Sensitive);

    assert!(press(&mut state, Key::PageDown).is_none());
    assert!(press(&mut state, Key::PageDown).is_none());
    assert_eq!(state.window().unwrap().first, 6);
    assert_eq!(state.selection(), Some(6));

    assert!(press(&mut state, Key::Down).is_none());
    assert_eq!(
        press(&mut state, Key::Enter),
        Some(Outcome::Confirmed("item7".to_string()))
    );
}

#[test]
fn enter_with_no_matches_returns_the_typed_text() {
    let mut state = menu(&["alpha", "beta"], 5, MatchMode::Sensitive);
    type_str(&mut state, "new-entry");
    assert_eq!(state.match_count(), 0);
    assert_eq!(
        press(&mut state, Key::Enter),
        Some(Outcome::Confirmed("new-entry".to_string()))
    );
}

#[test]
fn shift_enter_returns_typed_text_despite_a_selection() {
    let mut state = menu(&["alpha", "beta"], 5, MatchMode::Sensitive);
    type_str(&mut state, "al");
    assert_eq!(state.selected_text(), Some("alpha"));
    let outcome = handle_key(&mut state, Key::Enter, Modifiers::SHIFT, &mut NoSelection);
    assert_eq!(outcome, Some(Outcome::Confirmed("al".to_string())));
}

#[test]
fn escape_cancels_regardless_of_state() {
    let mut state = menu(&["alpha"], 5, MatchMode::Sensitive);
    type_str(&mut state, "alp");
    assert_eq!(press(&mut state, Key::Esc), Some(Outcome::Cancelled));
}

#[test]
fn tab_completes_the_selection_into_the_buffer() {
    let mut state = menu(&["config.toml", "config.rs"], 5, MatchMode::Sensitive);
    type_str(&mut state, "conf");
    assert!(press(&mut state, Key::Tab).is_none());
    assert_eq!(state.pattern(), "config.toml");
    assert_eq!(state.match_count(), 1);
    assert_eq!(
        press(&mut state, Key::Enter),
        Some(Outcome::Confirmed("config.toml".to_string()))
    );
}

#[test]
fn backspace_widens_the_match_set_again() {
    let mut state = menu(&["bar", "baz", "qux"], 5, MatchMode::Sensitive);
    type_str(&mut state, "bar");
    assert_eq!(state.match_count(), 1);
    assert!(press(&mut state, Key::Backspace).is_none());
    assert_eq!(state.match_count(), 2);
    assert_eq!(visible_texts(&state), ["bar", "baz"]);
}

#[test]
fn ctrl_u_clears_the_pattern_and_restores_the_full_view() {
    let mut state = menu(&["alpha", "beta", "gamma"], 5, MatchMode::Sensitive);
    type_str(&mut state, "ga");
    assert_eq!(state.match_count(), 1);
    let outcome = handle_key(&mut state, Key::Char('u'), Modifiers::CTRL, &mut NoSelection);
    assert!(outcome.is_none());
    assert_eq!(state.pattern(), "");
    assert_eq!(state.match_count(), 3);
    assert_eq!(state.selection(), Some(0));
}

#[test]
fn enter_with_empty_pattern_confirms_the_first_item() {
    let mut state = menu(&["first", "second"], 5, MatchMode::Sensitive);
    assert_eq!(
        press(&mut state, Key::Enter),
        Some(Outcome::Confirmed("first".to_string()))
    );
}

#[test]
fn end_key_pages_to_and_selects_the_last_item() {
    let items: Vec<String> = (0..8).map(|i| format!("entry{i}")).collect();
    let refs: Vec<&str> = items.iter().map(String::as_str).collect();
    let mut state = menu(&refs, 3, MatchMode::Sensitive);

    assert!(press(&mut state, Key::End).is_none());
    assert_eq!(state.selected_text(), Some("entry7"));
    assert!(!state.has_next_page());
}
