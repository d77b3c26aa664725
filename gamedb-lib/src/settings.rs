//! Optional user settings (`~/.config/gamedb/settings.toml`).
//!
//! Settings only supply defaults. Every value can be overridden on the
//! command line, and the alias table itself is still read fresh on each run.
//!
//! ```toml
//! [minify]
//! aliases = "/path/to/aliases.json5"
//!
//! [scan]
//! parallel = true
//! threads = 8
//! progress_interval = 1000
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SettingsError;
use crate::progress::DEFAULT_PROGRESS_INTERVAL;
use crate::scan::ScanOptions;

/// Canonical path to the settings file: `~/.config/gamedb/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gamedb").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub minify: MinifySettings,
    pub scan: ScanSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinifySettings {
    /// Alias file used when none is given on the command line.
    pub aliases: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanSettings {
    pub parallel: bool,
    pub threads: Option<usize>,
    pub progress_interval: usize,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl ScanSettings {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new()
            .parallel(self.parallel)
            .threads(self.threads)
    }
}

impl Settings {
    /// Alias file path: CLI override first, then `minify.aliases`.
    pub fn resolve_aliases_path(&self, cli_override: Option<PathBuf>) -> Option<PathBuf> {
        cli_override.or_else(|| self.minify.aliases.clone())
    }
}

/// Parse settings from TOML text.
pub fn parse_settings(contents: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(contents)
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => {
            return Err(SettingsError::Io {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    let settings = parse_settings(&contents).map_err(|e| SettingsError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    log::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Load settings from the default location.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&settings_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.scan.parallel);
        assert_eq!(settings.scan.progress_interval, 1000);
    }

    #[test]
    fn full_file_parses() {
        let settings = parse_settings(
            r#"
[minify]
aliases = "/data/aliases.json5"

[scan]
parallel = false
threads = 2
progress_interval = 250
"#,
        )
        .unwrap();
        assert_eq!(
            settings.minify.aliases,
            Some(PathBuf::from("/data/aliases.json5"))
        );
        assert_eq!(
            settings.scan.scan_options(),
            ScanOptions::new().parallel(false).threads(Some(2))
        );
        assert_eq!(settings.scan.progress_interval, 250);
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let settings = parse_settings("[scan]\nthreads = 4\n").unwrap();
        assert!(settings.scan.parallel);
        assert_eq!(settings.scan.threads, Some(4));
        assert_eq!(settings.minify.aliases, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_settings("[scan]\nthreshold = 3\n").is_err());
    }

    #[test]
    fn cli_alias_path_wins() {
        let settings = Settings {
            minify: MinifySettings {
                aliases: Some(PathBuf::from("from-settings.json5")),
            },
            ..Default::default()
        };
        assert_eq!(
            settings.resolve_aliases_path(Some(PathBuf::from("from-cli.json5"))),
            Some(PathBuf::from("from-cli.json5"))
        );
        assert_eq!(
            settings.resolve_aliases_path(None),
            Some(PathBuf::from("from-settings.json5"))
        );
        assert_eq!(Settings::default().resolve_aliases_path(None), None);
    }

    #[test]
    fn missing_file_is_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = load_settings_from(&tmp.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[scan\nparallel = true\n").unwrap();
        assert!(matches!(
            load_settings_from(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn settings_path_ends_with_app_dir() {
        assert!(settings_path().ends_with("gamedb/settings.toml"));
    }
}
