//! gamedb-minify CLI
//!
//! Consolidates a games database: canonicalizes names through an alias
//! table, merges duplicate records, and optionally reports near-duplicate
//! names by Levenshtein distance.

mod cli_types;
mod commands;
mod error;
mod logging;
mod progress;

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use gamedb_lib::{Settings, load_settings_from, settings_path};

use crate::cli_types::Cli;
use crate::error::CliError;

/// Environment variable overriding the settings file location.
const SETTINGS_ENV: &str = "GAMEDB_SETTINGS";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = logging::init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        fail(&e, false);
    }
    if let Err(e) = run(&cli) {
        fail(&e, true);
    }
}

fn fail(err: &CliError, logger_ready: bool) -> ! {
    eprintln!(
        "{}",
        "An error occurred:".if_supports_color(Stderr, |t| t.red())
    );
    if !(logger_ready && logging::log_failure(err)) {
        eprintln!("{}", err);
    }
    std::process::exit(1);
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = load_cli_settings(cli.no_settings)?;
    commands::minify::run_minify(cli, &settings)
}

fn load_cli_settings(skip: bool) -> Result<Settings, CliError> {
    if skip {
        return Ok(Settings::default());
    }
    let path = std::env::var_os(SETTINGS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(settings_path);
    Ok(load_settings_from(&path)?)
}
