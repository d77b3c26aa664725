use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedb_catalog::{AliasTable, load_aliases, load_games, save_games};
use gamedb_lib::{DistanceEntry, MinifyOptions, ScanOptions, Settings, minify};

use crate::cli_types::Cli;
use crate::error::CliError;
use crate::progress::scan_progress;

/// Input and output paths, both required.
pub(crate) fn required_paths(cli: &Cli) -> Result<(PathBuf, PathBuf), CliError> {
    let input = cli
        .input
        .clone()
        .ok_or_else(|| CliError::usage("Input file not provided."))?;
    let output = cli
        .output
        .clone()
        .ok_or_else(|| CliError::usage("Output file not provided."))?;
    Ok((input, output))
}

/// Scan options from settings, with command-line flags layered on top.
pub(crate) fn scan_options(cli: &Cli, settings: &Settings) -> ScanOptions {
    let mut options = settings.scan.scan_options();
    if cli.sequential {
        options = options.parallel(false);
    }
    if cli.threads.is_some() {
        options = options.threads(cli.threads);
    }
    options
}

/// Load, deduplicate, optionally scan, and write the result.
///
/// The output file is written last, only after everything else succeeded.
pub(crate) fn run_minify(cli: &Cli, settings: &Settings) -> Result<(), CliError> {
    let (input, output) = required_paths(cli)?;

    let db = load_games(&input)?;
    log::info!("Loaded {} records from {}", db.len(), input.display());

    let aliases = match settings.resolve_aliases_path(cli.aliases.clone()) {
        Some(path) => {
            let aliases = load_aliases(&path)?;
            log::info!("Loaded {} aliases from {}", aliases.len(), path.display());
            aliases
        }
        None => AliasTable::new(),
    };

    let options = MinifyOptions::new()
        .levenshtein(cli.levenshtein)
        .scan(scan_options(cli, settings));
    if options.levenshtein {
        log::info!("Calculating Levenshtein distances...");
    }

    let progress = scan_progress(cli.quiet, settings.scan.progress_interval);
    let outcome = minify(db, &aliases, &options, progress.as_ref())?;

    log::info!(
        "{} records -> {} ({} renamed, {} merged)",
        outcome.stats.input,
        outcome.stats.output,
        outcome.stats.renamed,
        outcome.stats.merged,
    );

    if let Some(report) = &outcome.report {
        print_report(report);
    }

    save_games(&output, &outcome.db)?;
    log::info!(
        "Wrote {} records to {}",
        outcome.db.len(),
        output.display()
    );
    Ok(())
}

fn print_report(report: &[DistanceEntry]) {
    println!(
        "{}",
        "Levenshtein distances (in sorted order):".if_supports_color(Stdout, |t| t.bold())
    );
    for entry in report {
        println!("{}", entry);
    }
}
