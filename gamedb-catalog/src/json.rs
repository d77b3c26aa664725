//! Reading and writing the games database and alias files.
//!
//! The database is strict JSON in both directions. Alias tables are
//! hand-maintained, so they are parsed as JSON5 (comments, unquoted keys,
//! trailing commas).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{AliasTable, GamesDb};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Alias parse error in {path}: {source}")]
    AliasParse {
        path: String,
        source: json5::Error,
    },
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Parse a `{ "games": [...] }` document.
pub fn parse_games(contents: &str) -> Result<GamesDb, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Parse a relaxed-JSON object of `raw name -> canonical name`.
pub fn parse_aliases(contents: &str) -> Result<AliasTable, json5::Error> {
    json5::from_str(contents)
}

/// Load the games database from a JSON file.
pub fn load_games(path: &Path) -> Result<GamesDb, CatalogError> {
    let contents = read_file(path)?;
    parse_games(&contents).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load an alias table from a JSON5 file.
pub fn load_aliases(path: &Path) -> Result<AliasTable, CatalogError> {
    let contents = read_file(path)?;
    parse_aliases(&contents).map_err(|e| CatalogError::AliasParse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Serialize the database as JSON with 2-space indentation.
pub fn to_pretty_json(db: &GamesDb) -> Result<String, CatalogError> {
    Ok(serde_json::to_string_pretty(db)?)
}

/// Write the database to `path`, replacing any existing file.
///
/// The document is written to a sibling temp file and renamed into place, so
/// an existing file at `path` is only replaced once the full write succeeded.
pub fn save_games(path: &Path, db: &GamesDb) -> Result<(), CatalogError> {
    let serialized = to_pretty_json(db)?;
    let tmp = temp_path(path);
    let io_err = |source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Err(e) = std::fs::write(&tmp, &serialized) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(e));
    }
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(e));
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// `games.json` -> `games.json.tmp`, in the same directory.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "games".into());
    name.push(".tmp");
    path.with_file_name(name)
}
