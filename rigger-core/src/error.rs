//! Error types for rigger-core.

use thiserror::Error;

/// All errors that can arise from registry lookups and definition loading.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The identifier is neither a canonical addon name nor a known alias.
    #[error("template not found: {name}")]
    NotFound { name: String },

    /// The registry entry exists but does not yield a usable configuration.
    #[error("invalid configuration for template {name}: {reason}")]
    InvalidConfig { name: String, reason: String },

    /// YAML parse error on an embedded addon definition.
    #[error("failed to parse definition for template {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Variable validation failure surfaced through the registry layer.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.rigger/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// Variable-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required variable is still empty after every resolution tier.
    #[error("required variable '{name}' has no value")]
    MissingRequired { name: String },

    /// An override token without a `=` separator.
    #[error("malformed variable override '{token}': expected name=value")]
    MalformedOverride { token: String },

    /// An override token whose name part is empty (`=value`).
    #[error("variable override '{token}' has an empty name")]
    EmptyOverrideKey { token: String },
}
