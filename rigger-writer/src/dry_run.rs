//! Dry-run recorder — captures intended effects instead of performing them.
//!
//! The recorder is created fresh per invocation and handed to generation as
//! an ordinary [`TemplateWriter`]. At the end of the run its [`DryRunInfo`]
//! is printed as pretty JSON and optionally persisted verbatim.
//!
//! ```json
//! {
//!   "variables": [{ "name": "ingress-host", "value": "myapp.example.com" }],
//!   "filesToWrite": [{ "path": "manifests/ingress.yaml", "content": "..." }]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, WriteError};
use crate::sink::{TemplateVariableRecorder, TemplateWriter};

/// A file the run would have written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileIntent {
    pub path: PathBuf,
    pub content: String,
}

/// A resolved variable as it drove generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableBinding {
    pub name: String,
    pub value: String,
}

/// Ordered log of every recorded binding and file intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunInfo {
    pub variables: Vec<VariableBinding>,
    pub files_to_write: Vec<FileIntent>,
}

impl DryRunInfo {
    /// Paths of recorded file intents, in record order.
    pub fn file_paths(&self) -> Vec<&Path> {
        self.files_to_write.iter().map(|f| f.path.as_path()).collect()
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, WriteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the pretty JSON document to `path`, replacing any existing file.
    pub fn persist(&self, path: &Path) -> Result<String, WriteError> {
        let text = self.to_pretty_json()?;
        std::fs::write(path, &text).map_err(|e| io_err(path, e))?;
        Ok(text)
    }
}

/// In-memory sink. Never touches the filesystem.
#[derive(Debug, Default)]
pub struct DryRunRecorder {
    info: DryRunInfo,
}

impl DryRunRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self) -> &DryRunInfo {
        &self.info
    }

    pub fn into_info(self) -> DryRunInfo {
        self.info
    }
}

impl TemplateWriter for DryRunRecorder {
    fn write_file(&mut self, path: &Path, content: &str) -> Result<(), WriteError> {
        tracing::info!("[dry-run] would write: {}", path.display());
        self.info.files_to_write.push(FileIntent {
            path: path.to_path_buf(),
            content: content.to_string(),
        });
        Ok(())
    }

    fn as_variable_recorder(&mut self) -> Option<&mut dyn TemplateVariableRecorder> {
        Some(self)
    }
}

impl TemplateVariableRecorder for DryRunRecorder {
    fn record(&mut self, name: &str, value: &str) {
        tracing::debug!("[dry-run] variable {name} = {value:?}");
        self.info.variables.push(VariableBinding {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
