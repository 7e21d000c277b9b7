//! Decoded keyboard input and terminal outcomes.
//!
//! The core never sees platform key events. The shell decodes them into
//! [`Key`] + [`Modifiers`] at the boundary, so the dispatch logic in
//! `state::key_handler` is testable without a terminal.

/// A decoded key symbol.
///
/// Only the keys the menu reacts to are represented; everything else is
/// dropped by the shell before reaching the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable (or control) character input.
    Char(char),
    /// Delete one codepoint before the cursor.
    Backspace,
    /// Delete one codepoint at the cursor.
    Delete,
    /// Move selection/cursor left.
    Left,
    /// Move selection/cursor right.
    Right,
    /// Same as [`Key::Left`] in the menu's navigation model.
    Up,
    /// Same as [`Key::Right`] in the menu's navigation model.
    Down,
    /// Jump to the first filtered item, or to the buffer start.
    Home,
    /// Jump past the last page, or to the buffer end.
    End,
    /// Scroll one page backward.
    PageUp,
    /// Scroll one page forward.
    PageDown,
    /// Complete the buffer from the selected item.
    Tab,
    /// Confirm the selection (or the typed text).
    Enter,
    /// Cancel the menu.
    Esc,
}

/// Modifier flags attached to a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Control held.
    pub ctrl: bool,
    /// Alt/Meta held.
    pub alt: bool,
    /// Shift held.
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
    };

    /// Control only.
    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
    };

    /// Alt only.
    pub const ALT: Self = Self {
        ctrl: false,
        alt: true,
        shift: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
    };
}

/// Terminal outcome of the interaction loop.
///
/// Emitted exactly once, synchronously, by the key handler; the event loop
/// stops as soon as one is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed; the payload is printed to stdout verbatim.
    Confirmed(String),
    /// The user cancelled; nothing is printed and the process exits 1.
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_constants_set_single_flags() {
        assert!(Modifiers::CTRL.ctrl && !Modifiers::CTRL.alt && !Modifiers::CTRL.shift);
        assert!(Modifiers::ALT.alt && !Modifiers::ALT.ctrl);
        assert!(Modifiers::SHIFT.shift && !Modifiers::SHIFT.ctrl);
        assert_eq!(Modifiers::NONE, Modifiers::default());
    }

    #[test]
    fn outcome_carries_confirmed_text() {
        let outcome = Outcome::Confirmed("picked".to_string());
        match outcome {
            Outcome::Confirmed(text) => assert_eq!(text, "picked"),
            Outcome::Cancelled => panic!("expected Confirmed"),
        }
    }
}
