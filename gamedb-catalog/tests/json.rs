use gamedb_catalog::{CatalogError, Game, GamesDb, load_aliases, load_games, save_games};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn load_games_from_json() {
    let tmp = TempDir::new().unwrap();
    write_file(
        tmp.path(),
        "games.json",
        r#"
{
  "games": [
    { "name": "Super Mario Bros.", "sources": ["nes-dat", "wiki"] },
    { "name": "Tetris", "sources": [] }
  ]
}
"#,
    );

    let db = load_games(&tmp.path().join("games.json")).unwrap();
    assert_eq!(db.len(), 2);
    assert_eq!(db.games[0].name, "Super Mario Bros.");
    assert_eq!(db.games[0].sources, vec!["nes-dat", "wiki"]);
    assert!(db.games[1].sources.is_empty());
}

#[test]
fn load_games_ignores_unknown_top_level_keys() {
    let tmp = TempDir::new().unwrap();
    write_file(
        tmp.path(),
        "games.json",
        r#"{ "version": 3, "games": [ { "name": "Tetris", "sources": ["gb"] } ] }"#,
    );

    let db = load_games(&tmp.path().join("games.json")).unwrap();
    assert_eq!(db.names(), vec!["Tetris"]);
}

#[test]
fn load_games_missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let result = load_games(&tmp.path().join("missing.json"));
    assert!(matches!(result, Err(CatalogError::Io { .. })));
}

#[test]
fn load_games_malformed_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "games.json", r#"{ "games": [ { "name": 1 } ] }"#);

    let result = load_games(&tmp.path().join("games.json"));
    match result {
        Err(CatalogError::Parse { path, .. }) => assert!(path.ends_with("games.json")),
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn load_aliases_from_json5() {
    let tmp = TempDir::new().unwrap();
    write_file(
        tmp.path(),
        "aliases.json5",
        r#"
{
  // Lowercase spellings from the wiki scrape
  "foo": "Foo",
  sanic: "Sonic",
}
"#,
    );

    let aliases = load_aliases(&tmp.path().join("aliases.json5")).unwrap();
    assert_eq!(aliases.len(), 2);
    assert_eq!(aliases.canonicalize("foo"), "Foo");
    assert_eq!(aliases.canonicalize("sanic"), "Sonic");
    assert_eq!(aliases.canonicalize("Mario"), "Mario");
}

#[test]
fn load_aliases_malformed_is_alias_parse_error() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "aliases.json5", "{ foo: ");

    let result = load_aliases(&tmp.path().join("aliases.json5"));
    assert!(matches!(result, Err(CatalogError::AliasParse { .. })));
}

#[test]
fn save_games_overwrites_existing_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out.json");
    fs::write(&out, "stale contents").unwrap();

    let db = GamesDb::new(vec![Game::new("Foo").with_sources(["x", "y"])]);
    save_games(&out, &db).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("{\n  \"games\": ["));
    assert_eq!(load_games(&out).unwrap(), db);
    assert!(!tmp.path().join("out.json.tmp").exists());
}

#[test]
fn save_games_to_missing_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("no-such-dir").join("out.json");

    let db = GamesDb::new(vec![Game::new("Foo")]);
    let result = save_games(&out, &db);
    assert!(matches!(result, Err(CatalogError::Io { .. })));
    assert!(!out.exists());
}

#[test]
fn save_preserves_extra_fields_and_order() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("in.json");
    write_file(
        tmp.path(),
        "in.json",
        r#"{ "games": [ { "name": "Tetris", "sources": ["gb"], "year": 1989, "genre": "Puzzle" } ] }"#,
    );

    let db = load_games(&input).unwrap();
    let out = tmp.path().join("out.json");
    save_games(&out, &db).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    let year = written.find("\"year\"").unwrap();
    let genre = written.find("\"genre\"").unwrap();
    assert!(year < genre);
}

#[test]
fn save_keeps_each_record_key_order() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("in.json");
    write_file(
        tmp.path(),
        "in.json",
        r#"{ "games": [ { "sources": ["x"], "year": 1, "name": "A" }, { "name": "B", "sources": [] } ] }"#,
    );

    let db = load_games(&input).unwrap();
    let out = tmp.path().join("out.json");
    save_games(&out, &db).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    let first = &written[..written.find("\"B\"").unwrap()];
    let sources = first.find("\"sources\"").unwrap();
    let year = first.find("\"year\"").unwrap();
    let name = first.find("\"name\"").unwrap();
    assert!(sources < year && year < name);
    assert_eq!(load_games(&out).unwrap(), db);
}
