//! The consolidation pipeline: canonicalize, deduplicate, optionally scan.
//!
//! Performs no file or console I/O; callers load the inputs, pick a progress
//! reporter, and decide what to do with the outcome.

use gamedb_catalog::{AliasTable, GamesDb};

use crate::dedup::{DedupStats, dedupe};
use crate::error::ScanError;
use crate::progress::ScanProgress;
use crate::scan::{DistanceEntry, ScanOptions, nearest_neighbors};

/// Options for a [`minify`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinifyOptions {
    /// Run the nearest-neighbor scan over the deduplicated names.
    pub levenshtein: bool,
    pub scan: ScanOptions,
}

impl MinifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn levenshtein(mut self, levenshtein: bool) -> Self {
        self.levenshtein = levenshtein;
        self
    }

    pub fn scan(mut self, scan: ScanOptions) -> Self {
        self.scan = scan;
        self
    }
}

/// Everything a [`minify`] run produced.
#[derive(Debug, Clone)]
pub struct MinifyOutcome {
    /// The deduplicated catalog.
    pub db: GamesDb,
    pub stats: DedupStats,
    /// Near-duplicate report, present only when the scan was requested.
    pub report: Option<Vec<DistanceEntry>>,
}

/// Deduplicate `db` through `aliases`, then scan the result if requested.
pub fn minify(
    db: GamesDb,
    aliases: &AliasTable,
    options: &MinifyOptions,
    progress: &dyn ScanProgress,
) -> Result<MinifyOutcome, ScanError> {
    let deduped = dedupe(db.games, aliases);
    let db = GamesDb::new(deduped.games);

    let report = if options.levenshtein {
        Some(nearest_neighbors(&db.names(), &options.scan, progress)?)
    } else {
        None
    };

    Ok(MinifyOutcome {
        db,
        stats: deduped.stats,
        report,
    })
}
