use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// A required argument is missing
    #[error("{0}")]
    Usage(String),

    /// Input, alias, or output file error
    #[error(transparent)]
    Catalog(#[from] gamedb_catalog::CatalogError),

    /// Settings file error
    #[error(transparent)]
    Settings(#[from] gamedb_lib::SettingsError),

    /// Levenshtein scan error
    #[error(transparent)]
    Scan(#[from] gamedb_lib::ScanError),

    /// Logger setup error
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
