//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not missing files —
    /// a missing file is not an error).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tmenu/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Prompt shown before the input field.
    #[serde(default)]
    pub prompt: Option<String>,

    /// Vertical layout with this many visible lines (0 = horizontal).
    #[serde(default)]
    pub lines: Option<u16>,

    /// Case-insensitive matching.
    #[serde(default)]
    pub ignore_case: Option<bool>,

    /// Command run to fetch the primary selection for Alt-p paste.
    #[serde(default)]
    pub selection_command: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Prompt shown before the input field (empty = no prompt).
    pub prompt: String,
    /// Vertical layout with this many visible lines (0 = horizontal).
    pub lines: u16,
    /// Case-insensitive matching.
    pub ignore_case: bool,
    /// Command run to fetch the primary selection for Alt-p paste.
    pub selection_command: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            lines: 0,
            ignore_case: false,
            selection_command: "sselp".to_string(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// `~/.local/state/tmenu/tmenu.log` on Linux, with a temp-dir fallback when
/// no state directory can be resolved.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("tmenu")
        .join("tmenu.log")
}

/// Resolve default config file path (`~/.config/tmenu/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tmenu").join("config.toml"))
}

/// Load a config file from an explicit path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults).
pub fn load_config_file(path: PathBuf) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    let parsed = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path,
        reason: e.to_string(),
    })?;
    Ok(Some(parsed))
}

/// Load the config file with path precedence: explicit `--config` path
/// first, else the default location. Missing files are NOT errors.
pub fn load_config_with_precedence(
    explicit: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }
    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }
    Ok(None)
}

/// Merge config file into defaults to create a resolved config.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();
    let Some(file) = file else {
        return resolved;
    };
    if let Some(prompt) = file.prompt {
        resolved.prompt = prompt;
    }
    if let Some(lines) = file.lines {
        resolved.lines = lines;
    }
    if let Some(ignore_case) = file.ignore_case {
        resolved.ignore_case = ignore_case;
    }
    if let Some(command) = file.selection_command {
        resolved.selection_command = command;
    }
    if let Some(path) = file.log_file_path {
        resolved.log_file_path = path;
    }
    resolved
}

/// Apply environment variable overrides (`TMENU_PROMPT`, `TMENU_LINES`,
/// `TMENU_IGNORE_CASE`, `TMENU_SELECTION_COMMAND`, `TMENU_LOG_FILE`).
///
/// Unparsable numeric/boolean values are ignored rather than fatal.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(prompt) = std::env::var("TMENU_PROMPT") {
        config.prompt = prompt;
    }
    if let Some(lines) = std::env::var("TMENU_LINES")
        .ok()
        .and_then(|v| v.parse().ok())
    {
        config.lines = lines;
    }
    if let Some(ignore_case) = std::env::var("TMENU_IGNORE_CASE")
        .ok()
        .and_then(|v| parse_bool(&v))
    {
        config.ignore_case = ignore_case;
    }
    if let Ok(command) = std::env::var("TMENU_SELECTION_COMMAND") {
        config.selection_command = command;
    }
    if let Ok(path) = std::env::var("TMENU_LOG_FILE") {
        config.log_file_path = PathBuf::from(path);
    }
    config
}

/// CLI argument overrides. `None` fields leave the resolved value alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// `-p/--prompt`.
    pub prompt: Option<String>,
    /// `-l/--lines`.
    pub lines: Option<u16>,
    /// `-i/--ignore-case` (only `Some(true)` when the flag was given).
    pub ignore_case: Option<bool>,
}

/// Apply CLI argument overrides (highest precedence).
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(prompt) = cli.prompt {
        config.prompt = prompt;
    }
    if let Some(lines) = cli.lines {
        config.lines = lines;
    }
    if let Some(ignore_case) = cli.ignore_case {
        config.ignore_case = ignore_case;
    }
    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
