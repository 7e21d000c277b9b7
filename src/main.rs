//! tmenu - Entry point.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use tmenu::model::Outcome;

/// tmenu - interactive line selector
#[derive(Parser, Debug)]
#[command(name = "tmenu")]
#[command(version)]
#[command(about = "Pick one line from stdin or a file, interactively")]
pub struct Args {
    /// Read candidate lines from this file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Match case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Vertical list with this many visible lines (default: one horizontal row)
    #[arg(short = 'l', long)]
    pub lines: Option<u16>,

    /// Prompt displayed before the input field
    #[arg(short = 'p', long)]
    pub prompt: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(Outcome::Confirmed(text)) => {
            // The result goes to stdout verbatim, no trailing newline.
            print!("{text}");
            if std::io::stdout().flush().is_err() {
                return ExitCode::from(2);
            }
            ExitCode::SUCCESS
        }
        Ok(Outcome::Cancelled) => ExitCode::from(1),
        Err(err) => {
            eprintln!("tmenu: {err}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<Outcome, Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults -> Config File -> Env Vars -> CLI Args
    let config = {
        let config_file = tmenu::config::load_config_with_precedence(args.config.clone())?;
        let merged = tmenu::config::merge_config(config_file);
        let with_env = tmenu::config::apply_env_overrides(merged);
        tmenu::config::apply_cli_overrides(
            with_env,
            tmenu::config::CliOverrides {
                prompt: args.prompt.clone(),
                lines: args.lines,
                ignore_case: if args.ignore_case { Some(true) } else { None },
            },
        )
    };

    tmenu::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let input_source = tmenu::source::detect_input_source(args.file.clone())?;
    let store = tmenu::model::ItemStore::load(input_source.read_lines()?);
    info!(items = store.len(), "Candidates loaded");

    let colors = tmenu::view::ColorConfig::from_env_and_args(args.no_color);
    let outcome = tmenu::view::run_menu(store, &config, colors)?;
    Ok(outcome)
}
