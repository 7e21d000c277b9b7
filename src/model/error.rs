//! Error types for input handling.
//!
//! Structured errors via `thiserror`, composing with `?` and `From`. Input
//! errors are fatal: the menu cannot run without a candidate list, so they
//! propagate to `main` and terminate the process with a diagnostic.

use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered while reading the candidate list.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given candidate file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// No file was given and stdin is attached to a terminal, so there is
    /// nothing to read candidates from.
    #[error("No input source: provide a file path or pipe candidates on stdin")]
    NoInput,

    /// I/O failure while reading candidates.
    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),
}
