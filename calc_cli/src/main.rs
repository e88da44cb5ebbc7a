//! # Quotient CLI Application
//!
//! Terminal front end for the calc_core engine.
//!
//! - default: full-screen TUI built with Ratatui
//! - `--plain`: line-oriented mode reading keys from stdin
//! - `--json`: plain mode printing each emission as one JSON line
//!
//! Logging goes through `tracing`; set `QUOTIENT_LOG` (e.g. `debug`) to
//! change the filter. The TUI only logs when `--log-file` is given.

mod plain;
mod tui;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use calc_core::engine::Engine;
use calc_core::settings::{load_settings, save_settings, Settings};
use clap::{Parser, ValueEnum};
use tracing::info;

/// Environment variable holding the log filter
const LOG_ENV: &str = "QUOTIENT_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Quotient - a calculator where dividing by zero leaves a remainder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start with safe division on or off (overrides the settings file)
    #[arg(long, value_enum, value_name = "MODE")]
    safe_division: Option<Toggle>,

    /// Read keys line by line from stdin instead of running the TUI
    #[arg(long)]
    plain: bool,

    /// Print emissions as JSON lines (implies --plain)
    #[arg(long)]
    json: bool,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Write the effective settings to this file and exit
    #[arg(long, value_name = "FILE")]
    save_config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Toggle {
    On,
    Off,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let line_mode = args.plain || args.json;

    configure_logger(args.log_file.as_deref(), line_mode)?;

    let settings = load_cfg(&args)?;

    if let Some(path) = &args.save_config {
        save_settings(&settings, path)
            .with_context(|| format!("failed to save config to {}", path.display()))?;
        info!(path = %path.display(), "config saved");
        return Ok(());
    }

    let engine = Engine::with_settings(&settings);
    info!(safe_division = engine.safe_division(), line_mode, "starting");

    if line_mode {
        let output = if args.json { plain::Output::Json } else { plain::Output::Text };
        plain::run(engine, &settings, io::stdin().lock(), io::stdout().lock(), output)
    } else {
        tui::run(engine, &settings)
    }
}

/// Resolve settings: file (if any), then command line overrides.
fn load_cfg(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => {
            let settings = load_settings(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            info!(path = %path.display(), "config loaded");
            settings
        }
        None => Settings::default(),
    };

    if let Some(toggle) = args.safe_division {
        settings.safe_division = toggle == Toggle::On;
    }

    Ok(settings)
}

/// Install the tracing subscriber.
///
/// Without a log file, line mode logs to stderr and the TUI does not log
/// at all, since any stray output would tear the screen.
fn configure_logger(log_file: Option<&Path>, line_mode: bool) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if line_mode => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["calc_cli", "--json", "--safe-division", "off"]).unwrap();
        assert!(args.json);
        assert_eq!(args.safe_division, Some(Toggle::Off));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_reject_bad_toggle() {
        assert!(Args::try_parse_from(["calc_cli", "--safe-division", "maybe"]).is_err());
    }

    #[test]
    fn test_command_line_overrides_defaults() {
        let args = Args::try_parse_from(["calc_cli", "--safe-division", "off"]).unwrap();
        let settings = load_cfg(&args).unwrap();
        assert!(!settings.safe_division);
        assert!(settings.show_status);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = Args::try_parse_from(["calc_cli", "--config", "/nonexistent/quotient.json"]).unwrap();
        assert!(load_cfg(&args).is_err());
    }
}
