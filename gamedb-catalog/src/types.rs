//! Data model types for the games database.
//!
//! A [`GamesDb`] is the on-disk catalog: an ordered list of [`Game`] records,
//! each carrying the provenance sources it was assembled from. An
//! [`AliasTable`] maps raw record names onto their canonical spelling.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── Game ────────────────────────────────────────────────────────────────────

/// A single catalog record.
///
/// Serialized keys keep the order they had on input, with `name` and
/// `sources` in their original positions among the passthrough fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Game {
    /// Display name, and the deduplication key once canonicalized.
    pub name: String,
    /// Every provenance origin that contributed to this record, in the order
    /// they were appended. Duplicates are kept.
    pub sources: Vec<String>,
    /// Any other fields on the input record, passed through untouched.
    pub extra: Map<String, Value>,
    /// Key order as read. Empty for records built in code.
    key_order: Vec<String>,
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.sources == other.sources && self.extra == other.extra
    }
}

impl TryFrom<Map<String, Value>> for Game {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let key_order = fields.keys().cloned().collect();
        let name = match fields.shift_remove("name") {
            Some(v) => serde_json::from_value(v).map_err(|e| format!("invalid name: {e}"))?,
            None => return Err("missing field `name`".to_string()),
        };
        let sources = match fields.shift_remove("sources") {
            Some(v) => serde_json::from_value(v).map_err(|e| format!("invalid sources: {e}"))?,
            None => return Err("missing field `sources`".to_string()),
        };
        Ok(Self {
            name,
            sources,
            extra: fields,
            key_order,
        })
    }
}

impl From<Game> for Map<String, Value> {
    fn from(game: Game) -> Self {
        let Game {
            name,
            sources,
            mut extra,
            key_order,
        } = game;
        let mut name = Some(Value::String(name));
        let mut sources = Some(Value::from(sources));
        let mut out = Map::with_capacity(extra.len() + 2);

        for key in key_order {
            let value = match key.as_str() {
                "name" => name.take(),
                "sources" => sources.take(),
                _ => extra.shift_remove(&key),
            };
            if let Some(value) = value {
                out.insert(key, value);
            }
        }
        if let Some(name) = name {
            out.shift_insert(0, "name".to_string(), name);
        }
        if let Some(sources) = sources {
            let at = usize::from(out.contains_key("name"));
            out.shift_insert(at, "sources".to_string(), sources);
        }
        out.extend(extra);
        out
    }
}

impl Game {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sources: Vec::new(),
            extra: Map::new(),
            key_order: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.sources.push(source.into());
        self
    }

    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources.extend(sources.into_iter().map(Into::into));
        self
    }
}

// ── GamesDb ─────────────────────────────────────────────────────────────────

/// The top-level `{ "games": [...] }` document.
///
/// Record order is significant: it is the order of first appearance and is
/// preserved through deduplication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GamesDb {
    pub games: Vec<Game>,
}

impl GamesDb {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Record names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.games.iter().map(|g| g.name.as_str()).collect()
    }
}

// ── AliasTable ──────────────────────────────────────────────────────────────

/// Mapping from raw record name to canonical name.
///
/// Names without an entry map to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, raw: impl Into<String>, canonical: impl Into<String>) {
        self.aliases.insert(raw.into(), canonical.into());
    }

    /// The canonical name registered for `raw`, if any. Empty alias values
    /// count as unset.
    pub fn get(&self, raw: &str) -> Option<&str> {
        self.aliases
            .get(raw)
            .map(String::as_str)
            .filter(|canonical| !canonical.is_empty())
    }

    /// The canonical name for `raw`, falling back to `raw` itself.
    pub fn canonicalize<'a>(&'a self, raw: &'a str) -> &'a str {
        self.get(raw).unwrap_or(raw)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for AliasTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            aliases: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_falls_back_to_raw_name() {
        let aliases: AliasTable = [("foo", "Foo")].into_iter().collect();
        assert_eq!(aliases.canonicalize("foo"), "Foo");
        assert_eq!(aliases.canonicalize("bar"), "bar");
        assert_eq!(aliases.canonicalize(""), "");
    }

    #[test]
    fn empty_alias_value_keeps_raw_name() {
        let mut aliases = AliasTable::new();
        aliases.insert("Untitled", "");
        assert_eq!(aliases.get("Untitled"), None);
        assert_eq!(aliases.canonicalize("Untitled"), "Untitled");
    }

    #[test]
    fn extra_fields_pass_through() {
        let game: Game = serde_json::from_str(
            r#"{"name":"Tetris","sources":["gb"],"year":1989,"publisher":"Nintendo"}"#,
        )
        .unwrap();
        assert_eq!(game.name, "Tetris");
        assert_eq!(game.extra.len(), 2);

        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Tetris","sources":["gb"],"year":1989,"publisher":"Nintendo"}"#
        );
    }

    #[test]
    fn input_key_order_is_kept() {
        let json = r#"{"sources":["x"],"year":1,"name":"A"}"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&game).unwrap(), json);
    }

    #[test]
    fn renamed_record_keeps_key_position() {
        let mut game: Game =
            serde_json::from_str(r#"{"id":7,"name":"sanic","sources":[]}"#).unwrap();
        game.name = "Sonic".to_string();
        game.sources.push("wiki".to_string());
        assert_eq!(
            serde_json::to_string(&game).unwrap(),
            r#"{"id":7,"name":"Sonic","sources":["wiki"]}"#
        );
    }

    #[test]
    fn built_record_writes_name_and_sources_first() {
        let mut game = Game::new("Tetris").with_source("gb");
        game.extra.insert("year".to_string(), Value::from(1989));
        assert_eq!(
            serde_json::to_string(&game).unwrap(),
            r#"{"name":"Tetris","sources":["gb"],"year":1989}"#
        );
    }

    #[test]
    fn non_string_name_is_rejected() {
        let result: Result<Game, _> = serde_json::from_str(r#"{"name":1,"sources":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_sources_is_rejected() {
        let result: Result<Game, _> = serde_json::from_str(r#"{"name":"Tetris"}"#);
        assert!(result.is_err());
    }
}
