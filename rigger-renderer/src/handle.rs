//! Template handles — a loaded addon bound to a destination and an output sink.

use std::path::{Path, PathBuf};

use rigger_core::{registry, DraftConfig, RegistryError};
use rigger_writer::TemplateWriter;

use crate::engine::TemplateEngine;
use crate::error::RenderError;

/// A loaded addon ready for variable binding and generation.
///
/// The handle borrows its sink for its whole lifetime; drop it to regain
/// access to a [`rigger_writer::DryRunRecorder`] for serialization.
pub struct TemplateHandle<'w> {
    config: DraftConfig,
    dest: PathBuf,
    engine: TemplateEngine,
    writer: &'w mut dyn TemplateWriter,
}

/// Resolve `identifier`, load its configuration and templates, and bind the
/// result to `dest` and `writer`.
///
/// `override_path` optionally names a directory of user `.tera` files that
/// replace the addon's embedded templates. No files are written here.
pub fn get_template<'w>(
    identifier: &str,
    override_path: Option<&Path>,
    dest: impl Into<PathBuf>,
    writer: &'w mut dyn TemplateWriter,
) -> Result<TemplateHandle<'w>, RenderError> {
    let canonical = registry::resolve(identifier).ok_or_else(|| RegistryError::NotFound {
        name: identifier.to_string(),
    })?;
    let config = registry::load(&canonical.0)?;
    let engine = TemplateEngine::new(&canonical.0, override_path)?;
    tracing::debug!(
        "loaded addon {} (requested as '{identifier}') with {} variables",
        canonical,
        config.variables().len()
    );
    Ok(TemplateHandle {
        config,
        dest: dest.into(),
        engine,
        writer,
    })
}

impl<'w> TemplateHandle<'w> {
    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut DraftConfig {
        &mut self.config
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Paths generation will write, in declaration order.
    pub fn output_paths(&self) -> Vec<PathBuf> {
        self.config.files.iter().map(|f| self.dest.join(f)).collect()
    }

    /// Push every variable binding into the sink's recorder, if it has one.
    ///
    /// Returns `true` when the bindings were recorded.
    pub fn record_variables(&mut self) -> bool {
        let Some(recorder) = self.writer.as_variable_recorder() else {
            return false;
        };
        for var in self.config.variables() {
            recorder.record(&var.name, &var.value);
        }
        true
    }

    /// Render every declared file and hand it to the sink.
    ///
    /// Refuses to run with an unresolved required variable. Stops at the first
    /// failing file; files already written stay on disk.
    pub fn generate(&mut self) -> Result<Vec<PathBuf>, RenderError> {
        self.config.validate()?;
        let rendered = self.engine.render(&self.config)?;
        let mut written = Vec::with_capacity(rendered.len());
        for (file, content) in rendered {
            let path = self.dest.join(&file);
            self.writer.write_file(&path, &content)?;
            written.push(path);
        }
        Ok(written)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rigger_writer::{DryRunRecorder, LocalFsWriter, WriteError};
    use tempfile::TempDir;

    struct FailingWriter {
        calls: usize,
    }

    impl TemplateWriter for FailingWriter {
        fn write_file(&mut self, path: &Path, _content: &str) -> Result<(), WriteError> {
            self.calls += 1;
            Err(WriteError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    #[test]
    fn unknown_identifier_is_not_found() {
        let mut writer = DryRunRecorder::new();
        let err = get_template("nonexistent-template", None, ".", &mut writer)
            .err()
            .expect("unknown addon");
        assert!(matches!(err, RenderError::Registry(RegistryError::NotFound { .. })));
        assert!(err.to_string().contains("nonexistent-template"));
    }

    #[test]
    fn alias_handle_has_canonical_config() {
        let mut writer = DryRunRecorder::new();
        let handle = get_template("webapp_routing", None, "/dest", &mut writer).unwrap();
        assert_eq!(handle.config().template_name.0, "app-routing-ingress");
        assert_eq!(handle.output_paths(), vec![PathBuf::from("/dest/ingress.yaml")]);
    }

    #[test]
    fn generate_refuses_unresolved_required_variable() {
        let mut writer = FailingWriter { calls: 0 };
        let mut handle = get_template("app-routing-ingress", None, "/dest", &mut writer).unwrap();
        let err = handle.generate().unwrap_err();
        assert!(matches!(err, RenderError::Validation(_)), "got: {err}");
        drop(handle);
        assert_eq!(writer.calls, 0, "sink must not be touched");
    }

    #[test]
    fn write_failure_propagates() {
        let mut writer = FailingWriter { calls: 0 };
        let mut handle = get_template("httproute", None, "/dest", &mut writer).unwrap();
        for var in ["route-host", "gateway-name", "gateway-namespace", "service-name", "service-port"] {
            handle.config_mut().set_variable(var, "x");
        }
        let err = handle.generate().unwrap_err();
        match err {
            RenderError::Write(WriteError::Io { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn record_variables_only_with_recorder() {
        let mut local = LocalFsWriter::new();
        let mut handle = get_template("app-routing-ingress", None, "/dest", &mut local).unwrap();
        assert!(!handle.record_variables());

        let mut rec = DryRunRecorder::new();
        let mut handle = get_template("app-routing-ingress", None, "/dest", &mut rec).unwrap();
        handle.config_mut().set_variable("ingress-host", "h.example.com");
        assert!(handle.record_variables());
        drop(handle);
        let names: Vec<_> = rec.info().variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names[2], "ingress-host");
        assert_eq!(rec.info().variables[2].value, "h.example.com");
    }

    #[test]
    fn generate_writes_into_destination() {
        let tmp = TempDir::new().unwrap();
        let mut local = LocalFsWriter::new();
        let mut handle =
            get_template("app-routing-ingress", None, tmp.path(), &mut local).unwrap();
        handle.config_mut().set_variable("ingress-host", "h.example.com");
        let defaults: Vec<(String, String)> = handle
            .config()
            .variables()
            .iter()
            .filter_map(|v| v.default_value().map(|d| (v.name.clone(), d.to_string())))
            .collect();
        for (n, d) in defaults {
            handle.config_mut().set_variable(&n, d);
        }
        let written = handle.generate().unwrap();
        assert_eq!(written, vec![tmp.path().join("ingress.yaml")]);
        assert!(tmp.path().join("ingress.yaml").exists());
    }
}
