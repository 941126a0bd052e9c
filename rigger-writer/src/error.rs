//! Error types for rigger-writer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from output sinks.
#[derive(Debug, Error)]
pub enum WriteError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding of the dry-run log failed.
    #[error("dry-run serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience constructor for [`WriteError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> WriteError {
    WriteError::Io {
        path: path.into(),
        source,
    }
}
