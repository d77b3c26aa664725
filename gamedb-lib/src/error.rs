use thiserror::Error;

/// Errors that can occur during the nearest-neighbor scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The dedicated rayon pool could not be created
    #[error("Failed to build scan thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Errors that can occur while loading user settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has the wrong shape
    #[error("Settings parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}
