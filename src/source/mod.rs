//! Candidate input sources.
//!
//! The candidate list is read fully, before any interaction begins, from
//! either a file or piped stdin. Keyboard events do not come from stdin
//! (the shell reads them from the controlling terminal), so piping a list
//! in while interacting works the way it does for any picker.

use crate::model::InputError;
use std::io::{BufRead, BufReader, IsTerminal, Read};
use std::path::PathBuf;

pub mod clipboard;

pub use clipboard::PrimarySelection;

/// Where the candidate list comes from.
#[derive(Debug)]
pub enum InputSource {
    /// Read a file at the given path.
    File(PathBuf),
    /// Read piped stdin to EOF.
    Stdin,
}

impl InputSource {
    /// Read the whole candidate list, one item per line.
    ///
    /// Line terminators are stripped; empty lines are valid items. Reads to
    /// EOF before returning - the menu never starts with a partial list.
    pub fn read_lines(&self) -> Result<Vec<String>, InputError> {
        match self {
            InputSource::File(path) => {
                let file = std::fs::File::open(path)?;
                collect_lines(BufReader::new(file))
            }
            InputSource::Stdin => collect_lines(BufReader::new(std::io::stdin().lock())),
        }
    }
}

fn collect_lines<R: Read>(reader: BufReader<R>) -> Result<Vec<String>, InputError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

/// Detect and create the appropriate input source.
///
/// A file path wins when given (and must exist). Otherwise stdin must be a
/// pipe; with stdin on a terminal there is nothing to read and the result
/// is [`InputError::NoInput`].
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => {
            if !path.exists() {
                return Err(InputError::FileNotFound { path });
            }
            Ok(InputSource::File(path))
        }
        None => {
            if std::io::stdin().is_terminal() {
                return Err(InputError::NoInput);
            }
            Ok(InputSource::Stdin)
        }
    }
}
