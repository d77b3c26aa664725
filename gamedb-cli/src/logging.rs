//! Logger setup for the CLI.
//!
//! Normal runs print bare messages; `--verbose` switches to debug level with
//! timestamps. `--logfile` copies everything to a file with ANSI codes
//! stripped. `RUST_LOG` is applied on top of the chosen level.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

use crate::error::CliError;

/// Writes log output to stderr and to a file with ANSI codes removed.
struct TeeWriter {
    file: strip_ansi_escapes::Writer<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

pub(crate) fn level_filter(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. Call once, before any work starts.
pub(crate) fn init_logging(
    quiet: bool,
    verbose: bool,
    logfile: Option<&Path>,
) -> Result<(), CliError> {
    let mut builder = Builder::new();
    builder.filter_level(level_filter(quiet, verbose));
    builder.parse_default_env();

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Error => writeln!(buf, "error: {}", record.args()),
            Level::Warn => writeln!(buf, "warning: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    if let Some(path) = logfile {
        let file = File::create(path).map_err(|e| {
            CliError::logging(format!("cannot create {}: {}", path.display(), e))
        })?;
        builder.target(Target::Pipe(Box::new(TeeWriter {
            file: strip_ansi_escapes::Writer::new(file),
        })));
    }

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

/// Report a fatal error through the logger so it also reaches `--logfile`.
/// Returns false when error records are filtered out and nothing was written.
pub(crate) fn log_failure(err: &dyn Display) -> bool {
    if !log::log_enabled!(Level::Error) {
        return false;
    }
    log::error!("{err}");
    log::logger().flush();
    true
}
