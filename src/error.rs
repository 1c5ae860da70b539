use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed CSV in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("Missing column \"{column}\" in header")]
    MissingColumn { column: String },

    #[error("Invalid date \"{value}\" in column \"{column}\" on line {line} (expected YYYY-MM-DD)")]
    InvalidDate {
        line: u64,
        column: String,
        value: String,
    },

    #[error("Failed to serialize summary: {0}")]
    Summary(#[from] serde_json::Error),
}
