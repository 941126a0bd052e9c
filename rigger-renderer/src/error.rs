//! Error types for rigger-renderer.

use std::path::PathBuf;

use thiserror::Error;

use rigger_core::{RegistryError, ValidationError};
use rigger_writer::WriteError;

/// All errors that can arise while loading and generating an addon.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON serialization error (building tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    /// A template override directory was given but is not a directory.
    #[error("template directory '{path}' does not exist or is not a directory")]
    TemplateDirNotFound { path: PathBuf },

    /// A declared output file has no template to render it from.
    #[error("no template '{name}' for declared output file")]
    MissingTemplate { name: String },

    /// Registry lookup or definition failure.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The configuration is not fully resolved.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The output sink rejected a file.
    #[error(transparent)]
    Write(#[from] WriteError),
}
