//! Error types for rigger-resolver.

use thiserror::Error;

use rigger_core::ValidationError;

/// All errors that can arise while binding variable values.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A required variable is still unset after every tier.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The interactive prompt could not be shown or read.
    #[error("prompt failed for variable '{name}': {message}")]
    Prompt { name: String, message: String },
}
