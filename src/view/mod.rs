//! TUI rendering and terminal management (impure shell).
//!
//! The menu draws on stderr so stdout stays clean for the confirmed result.
//! Keyboard events come from the controlling terminal, which keeps piped
//! stdin usable for the candidate list.

mod menu_bar;
mod styles;

pub use menu_bar::{cell_width, layout_budget, MenuBar, MARKER_WIDTH};
pub use styles::{ColorConfig, MenuStyles};

use crate::config::ResolvedConfig;
use crate::model::{ItemStore, Key, Modifiers, Outcome};
use crate::source::PrimarySelection;
use crate::state::key_handler::handle_key;
use crate::state::{MatchMode, MenuState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stderr};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

// ===== Key decoding =====

/// Translate a terminal key event into the menu's key vocabulary.
///
/// Release events and keys the menu has no use for decode to `None`.
/// BackTab folds into shifted Tab; keypad Enter arrives as `Enter` and
/// needs no special case.
fn decode_key(key: KeyEvent) -> Option<(Key, Modifiers)> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let mut mods = Modifiers {
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
    };
    let decoded = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => {
            mods.shift = true;
            Key::Tab
        }
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        _ => return None,
    };
    Some((decoded, mods))
}

// ===== TuiApp =====

/// Main TUI application.
///
/// Generic over the backend to support testing with TestBackend.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: MenuState,
    styles: MenuStyles,
    selection_source: PrimarySelection,
    lines: u16,
}

impl TuiApp<CrosstermBackend<Stderr>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with an alternate screen on stderr
    /// and sizes the layout budget from the current terminal width.
    pub fn new(
        store: ItemStore,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        stderr.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stderr);
        let terminal = Terminal::new(backend)?;

        let width = match terminal.size() {
            Ok(size) if size.width > 0 => size.width,
            _ => 80,
        };
        let budget = layout_budget(width, config.lines, &config.prompt, &store);
        let mode = if config.ignore_case {
            MatchMode::Insensitive
        } else {
            MatchMode::Sensitive
        };
        let state = MenuState::new(store, mode, budget, config.prompt.clone());
        debug!(
            width,
            lines = config.lines,
            items = state.store().len(),
            "menu initialized"
        );

        Ok(Self {
            terminal,
            state,
            styles: MenuStyles::with_color_config(colors),
            selection_source: PrimarySelection::new(config.selection_command.clone()),
            lines: config.lines,
        })
    }

    /// Run the main event loop.
    ///
    /// Blocks on terminal events; returns when a key resolves the menu.
    pub fn run(&mut self) -> Result<Outcome, TuiError> {
        loop {
            self.draw()?;
            if let Some(outcome) = self.handle_event(event::read()?) {
                return Ok(outcome);
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Feed one terminal event through the key handler.
    fn handle_event(&mut self, event: Event) -> Option<Outcome> {
        match event {
            Event::Key(key) => {
                let (decoded, mods) = decode_key(key)?;
                handle_key(&mut self.state, decoded, mods, &mut self.selection_source)
            }
            Event::Resize(width, _) => {
                let budget =
                    layout_budget(width, self.lines, self.state.prompt(), self.state.store());
                self.state.set_budget(budget);
                None
            }
            _ => None,
        }
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let Self {
            terminal,
            state,
            styles,
            ..
        } = self;
        terminal.draw(|frame| frame.render_widget(MenuBar::new(state, styles), frame.area()))?;
        Ok(())
    }
}

// ===== Entry point =====

/// Run the menu to completion and restore the terminal.
pub fn run_menu(
    store: ItemStore,
    config: &ResolvedConfig,
    colors: ColorConfig,
) -> Result<Outcome, TuiError> {
    let mut app = TuiApp::new(store, config, colors)?;
    let result = app.run();

    // Always restore terminal state, even when the loop failed.
    restore_terminal()?;
    result
}

fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stderr().execute(LeaveAlternateScreen)?;
    Ok(())
}

// ===== Tests =====
