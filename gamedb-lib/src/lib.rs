//! Record consolidation for the games database.
//!
//! Canonicalizes record names through an alias table, merges records that
//! collide, and optionally scans the result for near-duplicate names that the
//! aliases missed.

pub mod dedup;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod scan;
pub mod settings;

pub use dedup::{DedupStats, Deduped, canonicalize, dedupe};
pub use error::{ScanError, SettingsError};
pub use gamedb_catalog::{AliasTable, Game, GamesDb};
pub use pipeline::{MinifyOptions, MinifyOutcome, minify};
pub use progress::{DEFAULT_PROGRESS_INTERVAL, LogProgress, ScanProgress, SilentProgress};
pub use scan::{
    DISTANCE_THRESHOLD, DistanceEntry, ScanOptions, closest, edit_distance, nearest_neighbors,
};
pub use settings::{Settings, load_settings, load_settings_from, settings_path};
