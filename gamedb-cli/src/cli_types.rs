//! CLI type definitions.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gamedb-minify")]
#[command(
    about = "Deduplicate a games database, merging records through an alias table",
    long_about = None
)]
pub(crate) struct Cli {
    /// Input games database (JSON)
    pub input: Option<PathBuf>,

    /// Output path for the deduplicated database (overwritten)
    pub output: Option<PathBuf>,

    /// Alias table mapping raw names to canonical names (JSON5)
    #[arg(long)]
    pub aliases: Option<PathBuf>,

    /// Report near-duplicate names by Levenshtein distance
    #[arg(short, long)]
    pub levenshtein: bool,

    /// Run the Levenshtein scan on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Worker threads for the Levenshtein scan
    #[arg(long)]
    pub threads: Option<usize>,

    /// Ignore the user settings file
    #[arg(long)]
    pub no_settings: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long)]
    pub logfile: Option<PathBuf>,
}
