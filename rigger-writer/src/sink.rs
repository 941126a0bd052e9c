//! Output sink capabilities.
//!
//! Generation code is written once against [`TemplateWriter`]. The dry-run
//! variant additionally exposes [`TemplateVariableRecorder`], reachable through
//! [`TemplateWriter::as_variable_recorder`] so callers holding a
//! `&mut dyn TemplateWriter` never need to know which variant they have.

use std::path::Path;

use crate::error::WriteError;

/// Capability to persist one rendered file.
pub trait TemplateWriter {
    /// Write `content` to `path`, creating parent directories as needed.
    fn write_file(&mut self, path: &Path, content: &str) -> Result<(), WriteError>;

    /// The variable-recording capability, if this sink has one.
    fn as_variable_recorder(&mut self) -> Option<&mut dyn TemplateVariableRecorder> {
        None
    }
}

/// Capability to log a resolved `(name, value)` binding.
pub trait TemplateVariableRecorder {
    fn record(&mut self, name: &str, value: &str);
}

impl<W: TemplateWriter + ?Sized> TemplateWriter for Box<W> {
    fn write_file(&mut self, path: &Path, content: &str) -> Result<(), WriteError> {
        (**self).write_file(path, content)
    }

    fn as_variable_recorder(&mut self) -> Option<&mut dyn TemplateVariableRecorder> {
        (**self).as_variable_recorder()
    }
}
