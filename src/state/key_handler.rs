//! Key dispatch (the interaction state machine).
//!
//! A single "editing" state with two terminal exits, Confirmed and
//! Cancelled. Every decoded `(Key, Modifiers)` event is dispatched with this
//! precedence:
//!
//! 1. Control-modified letters map to fixed editing operations; any other
//!    control combination is swallowed.
//! 2. Alt-modified letters remap to navigation keys, plus the
//!    paste-primary-selection hook.
//! 3. Plain keys insert text, move the selection/cursor, or end the loop.
//!
//! All functions are pure over [`MenuState`] apart from the injected
//! [`SelectionSource`]; no terminal I/O happens here.

use tracing::trace;

use crate::model::{Key, Modifiers, Outcome};
use crate::state::menu::MenuState;

// ===== Paste hook =====

/// External provider of the primary selection (Alt-p paste).
///
/// Implemented by the shell, typically by running a helper command. A `None`
/// return (no selection, helper missing) is a no-op, not an error.
pub trait SelectionSource {
    /// Fetch the primary selection, if any.
    fn paste_primary(&mut self) -> Option<String>;
}

/// A [`SelectionSource`] that never has a selection. Useful in tests and
/// when pasting is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSelection;

impl SelectionSource for NoSelection {
    fn paste_primary(&mut self) -> Option<String> {
        None
    }
}

// ===== Dispatch =====

/// Handle one decoded key event.
///
/// Returns `Some(outcome)` exactly when the event ends the interaction;
/// the caller must stop the loop then. Everything else (including ignored
/// combinations) returns `None` with the event consumed.
pub fn handle_key(
    state: &mut MenuState,
    key: Key,
    mods: Modifiers,
    selection_source: &mut dyn SelectionSource,
) -> Option<Outcome> {
    trace!(?key, ?mods, "key event");

    let key = if mods.ctrl {
        match remap_control(state, key) {
            Remapped::Key(key) => key,
            Remapped::Done => return None,
        }
    } else if mods.alt {
        match remap_alt(state, key, selection_source) {
            Remapped::Key(key) => key,
            Remapped::Done => return None,
        }
    } else {
        key
    };

    dispatch(state, key, mods)
}

enum Remapped {
    /// Continue dispatching under this key.
    Key(Key),
    /// Fully handled (or swallowed); stop here.
    Done,
}

/// Control-modified letters. Anything unrecognized is swallowed.
fn remap_control(state: &mut MenuState, key: Key) -> Remapped {
    let Key::Char(c) = key else {
        return Remapped::Done;
    };
    match c.to_ascii_lowercase() {
        'a' => Remapped::Key(Key::Home),
        'c' => Remapped::Key(Key::Esc),
        'e' => Remapped::Key(Key::End),
        'h' => Remapped::Key(Key::Backspace),
        'i' => Remapped::Key(Key::Tab),
        'j' => Remapped::Key(Key::Enter),
        'u' => {
            if state.buffer.kill_to_start() {
                state.refilter();
            }
            Remapped::Done
        }
        'w' => {
            if state.buffer.kill_word_backward() {
                state.refilter();
            }
            Remapped::Done
        }
        _ => Remapped::Done,
    }
}

/// Alt-modified letters: navigation remaps and the paste hook. Anything
/// unrecognized is swallowed.
fn remap_alt(
    state: &mut MenuState,
    key: Key,
    selection_source: &mut dyn SelectionSource,
) -> Remapped {
    let Key::Char(c) = key else {
        return Remapped::Done;
    };
    match c {
        'h' => Remapped::Key(Key::Left),
        'l' => Remapped::Key(Key::Right),
        'j' => Remapped::Key(Key::PageDown),
        'k' => Remapped::Key(Key::PageUp),
        'g' => Remapped::Key(Key::Home),
        'G' => Remapped::Key(Key::End),
        'p' => {
            let Some(mut pasted) = selection_source.paste_primary() else {
                return Remapped::Done;
            };
            if pasted.ends_with('\n') {
                pasted.pop();
            }
            if state.buffer.insert(&pasted) {
                state.refilter();
            }
            Remapped::Done
        }
        _ => Remapped::Done,
    }
}

fn dispatch(state: &mut MenuState, key: Key, mods: Modifiers) -> Option<Outcome> {
    match key {
        Key::Char(c) => {
            if !c.is_control() {
                let mut utf8 = [0u8; 4];
                if state.buffer.insert(c.encode_utf8(&mut utf8)) {
                    state.refilter();
                }
            }
            None
        }
        Key::Backspace => {
            if state.buffer.delete_backward() {
                state.refilter();
            }
            None
        }
        Key::Delete => {
            if state.buffer.delete_forward() {
                state.refilter();
            }
            None
        }
        Key::Left | Key::Up => {
            select_left(state);
            None
        }
        Key::Right | Key::Down => {
            select_right(state);
            None
        }
        Key::PageUp => {
            if let Some(win) = state.window {
                state.selection = Some(win.prev);
                state.repaginate_at(win.prev);
            }
            None
        }
        Key::PageDown => {
            if let Some(next) = state.window.and_then(|w| w.next) {
                state.selection = Some(next);
                state.repaginate_at(next);
            }
            None
        }
        Key::Home => {
            if state.view.is_empty() || state.selection == Some(0) {
                state.buffer.move_to_start();
            } else {
                state.selection = Some(0);
                state.repaginate_at(0);
            }
            None
        }
        Key::End => {
            select_end(state);
            None
        }
        Key::Tab => {
            if let Some(text) = state.selected_text().map(str::to_owned) {
                state.buffer.set_text(&text);
                state.refilter();
            }
            None
        }
        Key::Enter => Some(confirm(state, mods.shift)),
        Key::Esc => Some(Outcome::Cancelled),
    }
}

/// Left/Up: prefer moving the selection to its left view-neighbor, scrolling
/// one page back if it leaves the window; otherwise move the edit cursor.
fn select_left(state: &mut MenuState) {
    if let (Some(sel), Some(win)) = (state.selection, state.window) {
        if sel > 0 {
            let sel = sel - 1;
            state.selection = Some(sel);
            if sel < win.first {
                state.repaginate_at(win.prev);
            }
            return;
        }
    }
    state.buffer.move_left();
}

/// Right/Down: prefer moving the edit cursor toward the buffer end;
/// otherwise advance the selection, scrolling one page forward when it
/// crosses the window boundary.
fn select_right(state: &mut MenuState) {
    if state.buffer.cursor() < state.buffer.text().len() {
        state.buffer.move_right();
        return;
    }
    if let (Some(sel), Some(win)) = (state.selection, state.window) {
        if sel + 1 < state.view.len() {
            let sel = sel + 1;
            state.selection = Some(sel);
            if win.next == Some(sel) {
                state.repaginate_at(sel);
            }
        }
    }
}

/// End: move the cursor to the buffer end if it is not there; otherwise page
/// the window forward until no next page remains and select the last item.
fn select_end(state: &mut MenuState) {
    if state.buffer.cursor() < state.buffer.text().len() {
        state.buffer.move_to_end();
        return;
    }
    while let Some(next) = state.window.and_then(|w| w.next) {
        // A degenerate budget can pin the pivot in place; bail out instead
        // of looping.
        if Some(next) == state.window.map(|w| w.first) {
            break;
        }
        state.selection = Some(next);
        state.repaginate_at(next);
    }
    if !state.view.is_empty() {
        state.selection = Some(state.view.len() - 1);
    }
}

/// Return: Shift or no selection submits the typed text; otherwise the
/// selected item's text.
fn confirm(state: &MenuState, shift: bool) -> Outcome {
    if shift {
        return Outcome::Confirmed(state.buffer.text().to_owned());
    }
    match state.selected_text() {
        Some(text) => Outcome::Confirmed(text.to_owned()),
        None => Outcome::Confirmed(state.buffer.text().to_owned()),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "key_handler_tests.rs"]
mod tests;
