//! Error handling for the cleaning pipeline.
//!
//! Record-level problems (missing fields, unparseable values, unknown
//! counties) never surface here: they are absorbed by the pipeline stages as
//! drops, nulls or sentinels. Only failures that stop a run are errors.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Errors that can halt a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum EtlError {
    /// Plain IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// IO error tied to a specific location
    #[error("{context}: {}: {source}", .path.display())]
    IoAt {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// Malformed delimited input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Arrow error while building or reading batches
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Parquet encoding or decoding error
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// An expected raw or renamed column is absent
    #[error("Schema error: {0}")]
    Schema(String),

    /// Invalid run configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A background write or transform task failed to complete
    #[error("Background task failed: {0}")]
    Task(String),
}

impl EtlError {
    /// Attach a path and a short description of the operation to an IO error
    pub fn io_at(path: impl Into<PathBuf>, context: impl Into<String>, source: io::Error) -> Self {
        Self::IoAt {
            path: path.into(),
            context: context.into(),
            source,
        }
    }
}

impl From<tokio::task::JoinError> for EtlError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::Task(error.to_string())
    }
}

/// Alias for Result with `EtlError`
pub type Result<T> = std::result::Result<T, EtlError>;
