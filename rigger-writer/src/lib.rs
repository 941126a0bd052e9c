//! # rigger-writer
//!
//! Output sinks for addon generation.
//!
//! [`LocalFsWriter`] performs real writes; [`DryRunRecorder`] captures file
//! intents and variable bindings into a [`DryRunInfo`] log. Both implement
//! [`TemplateWriter`], so generation is identical in either mode.

pub mod dry_run;
pub mod error;
pub mod local;
pub mod sink;

pub use dry_run::{DryRunInfo, DryRunRecorder, FileIntent, VariableBinding};
pub use error::WriteError;
pub use local::LocalFsWriter;
pub use sink::{TemplateVariableRecorder, TemplateWriter};
