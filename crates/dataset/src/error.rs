use thiserror::Error;

/// Errors that can occur when loading the canonical table.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The snapshot file could not be read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not a valid JSON array of records.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The snapshot parsed but contained no rows.
    #[error("Snapshot contains no records")]
    EmptySnapshot,
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;
