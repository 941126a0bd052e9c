//! Direct writer — real filesystem output.
//!
//! ## `write_file` protocol
//!
//! 1. Normalise line endings to LF.
//! 2. Create the parent directory chain.
//! 3. Write to `<path>.rigger.tmp`.
//! 4. Rename to the final path (atomic on POSIX); remove the tmp on failure.
//!
//! I/O failures are returned as [`WriteError::Io`] carrying the original
//! `std::io::Error` unchanged.

use std::path::{Path, PathBuf};

use crate::error::{io_err, WriteError};
use crate::sink::TemplateWriter;

/// Writes rendered files straight to disk.
#[derive(Debug, Default)]
pub struct LocalFsWriter {
    written: Vec<PathBuf>,
}

impl LocalFsWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl TemplateWriter for LocalFsWriter {
    fn write_file(&mut self, path: &Path, content: &str) -> Result<(), WriteError> {
        let tmp = PathBuf::from(format!("{}.rigger.tmp", path.display()));
        atomic_write_with_tmp(path, content, &tmp)?;
        self.written.push(path.to_path_buf());
        Ok(())
    }
}

fn atomic_write_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<(), WriteError> {
    let normalized = content.replace("\r\n", "\n");

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent() {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    std::fs::write(tmp, normalized).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
