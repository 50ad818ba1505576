use thiserror::Error;

/// Error types for the activity recorder.
///
/// All in-memory operations are total; errors only arise on the export
/// serialization and file-save paths.
#[derive(Debug, Error)]
pub enum RecorderError {
    /// Error when serializing or deserializing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for recorder operations.
pub type Result<T> = std::result::Result<T, RecorderError>;
