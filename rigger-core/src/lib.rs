//! Rigger core library — addon definitions, variable schema, registry, errors.
//!
//! - [`types`] — [`DraftConfig`], [`Variable`], [`VariableOverrideMap`]
//! - [`error`] — [`RegistryError`], [`ValidationError`]
//! - [`registry`] — alias resolution and definition loading

pub mod error;
pub mod registry;
pub mod types;

pub use error::{RegistryError, ValidationError};
pub use types::{DraftConfig, TemplateName, TemplateType, Variable, VariableOverrideMap};
