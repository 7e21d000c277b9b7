//! tmenu - dynamic menu for the terminal.
//!
//! Reads candidate lines from stdin (or a file), lets the user type an
//! incremental filter and pick an entry with the keyboard, then prints the
//! chosen text to stdout.
//!
//! The crate follows a Pure Core / Impure Shell split: everything under
//! [`state`] is pure and platform-free (match engine, pagination, edit
//! buffer, key dispatch); [`view`] is the terminal shell that decodes key
//! events and draws the menu.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;
