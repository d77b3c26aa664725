//! Games database data model and JSON I/O.
//!
//! This crate defines the on-disk catalog format and the alias table used to
//! canonicalize record names. It performs no deduplication itself; see
//! `gamedb-lib` for the consolidation pipeline.

pub mod json;
pub mod types;

pub use json::{
    CatalogError, load_aliases, load_games, parse_aliases, parse_games, save_games, to_pretty_json,
};
pub use types::*;
