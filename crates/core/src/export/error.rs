//! Export error types.

use thiserror::Error;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Requested format is neither csv nor json.
    #[error("Unsupported export format: {0}")]
    UnknownFormat(String),

    /// CSV writer failure.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failure.
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Output buffer could not be finalized.
    #[error("Export output error: {0}")]
    Output(String),
}
