//! Error types for mdal-rs.

use thiserror::Error;

/// The main error type for mdal-rs operations.
#[derive(Error, Debug)]
pub enum MdalError {
    /// A group property that shapes dataset storage was changed after datasets were added.
    #[error("dataset group '{group}' already holds {count} dataset(s); location and scalar flag are frozen")]
    DatasetsExist { group: String, count: usize },

    /// A dataset group was built for a different mesh.
    #[error("dataset group '{0}' belongs to a different mesh")]
    ForeignGroup(String),

    /// A dataset was built for a different dataset group.
    #[error("dataset belongs to a different group than '{0}'")]
    ForeignDataset(String),

    /// A dataset was shaped before its group's location or scalar flag changed.
    #[error("dataset was shaped for a different location or scalar flag than dataset group '{0}' has")]
    StaleDataset(String),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A typed data request does not match the shape of the dataset group.
    #[error("incompatible dataset: {0}")]
    IncompatibleDataset(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for mdal-rs operations.
pub type Result<T> = std::result::Result<T, MdalError>;
