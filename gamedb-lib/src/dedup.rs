//! Alias canonicalization and merge-by-name deduplication.

use std::collections::HashMap;

use gamedb_catalog::{AliasTable, Game};

/// Counters describing what a [`dedupe`] pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupStats {
    /// Records consumed.
    pub input: usize,
    /// Records emitted (distinct canonical names).
    pub output: usize,
    /// Records whose name was changed by an alias.
    pub renamed: usize,
    /// Records folded into an earlier record with the same canonical name.
    pub merged: usize,
}

/// Result of a [`dedupe`] pass.
#[derive(Debug, Clone)]
pub struct Deduped {
    pub games: Vec<Game>,
    pub stats: DedupStats,
}

/// Map a raw record name to its canonical name.
pub fn canonicalize<'a>(name: &'a str, aliases: &'a AliasTable) -> &'a str {
    aliases.canonicalize(name)
}

/// Canonicalize every record name and merge records that collide.
///
/// The first record seen for a canonical name becomes its representative and
/// keeps its position; later records with the same name append their sources
/// onto it and are dropped. Empty names are ordinary keys.
pub fn dedupe(games: Vec<Game>, aliases: &AliasTable) -> Deduped {
    let mut stats = DedupStats {
        input: games.len(),
        ..Default::default()
    };
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(games.len());
    let mut out: Vec<Game> = Vec::with_capacity(games.len());

    for mut game in games {
        if let Some(canonical) = aliases.get(&game.name) {
            if canonical != game.name {
                stats.renamed += 1;
                game.name = canonical.to_string();
            }
        }

        match seen.get(&game.name) {
            Some(&idx) => {
                out[idx].sources.append(&mut game.sources);
                stats.merged += 1;
            }
            None => {
                seen.insert(game.name.clone(), out.len());
                out.push(game);
            }
        }
    }

    stats.output = out.len();
    log::debug!(
        "Deduplicated {} records into {} ({} renamed by alias, {} merged)",
        stats.input,
        stats.output,
        stats.renamed,
        stats.merged
    );

    Deduped { games: out, stats }
}
