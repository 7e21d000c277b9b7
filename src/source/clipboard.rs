//! Primary-selection paste via an external helper command.

use std::process::Command;
use tracing::debug;

use crate::state::key_handler::SelectionSource;

/// Fetches the primary selection by running a helper command (`sselp` by
/// default, configurable) and capturing its stdout.
///
/// Any failure - helper missing, non-zero exit, non-UTF-8 output - yields
/// `None`, which the key handler treats as a no-op.
#[derive(Debug, Clone)]
pub struct PrimarySelection {
    command: String,
}

impl PrimarySelection {
    /// Use the given helper command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl SelectionSource for PrimarySelection {
    fn paste_primary(&mut self) -> Option<String> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next()?;
        let output = match Command::new(program).args(parts).output() {
            Ok(output) => output,
            Err(err) => {
                debug!(command = %self.command, %err, "selection helper failed to run");
                return None;
            }
        };
        if !output.status.success() {
            debug!(command = %self.command, status = %output.status, "selection helper exited nonzero");
            return None;
        }
        String::from_utf8(output.stdout).ok()
    }
}
