//! Tera rendering engine for addon file templates.
//!
//! # Template naming
//!
//! Every output file `F` declared by addon `A` renders from `A/F.tera`.
//!
//! | Addon                 | Output file(s)   |
//! |-----------------------|------------------|
//! | `app-routing-ingress` | `ingress.yaml`   |
//! | `gateway-httproute`   | `httproute.yaml` |
//!
//! A user override directory for addon `A` may hold `F.tera` files (at any
//! depth matching `F`); each replaces the embedded `A/F.tera`. A directory
//! passed in must exist; callers drop optional defaults that don't.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use rigger_core::DraftConfig;

use crate::context::TemplateContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    (
        "app-routing-ingress/ingress.yaml.tera",
        include_str!("templates/app-routing-ingress/ingress.yaml.tera"),
    ),
    (
        "gateway-httproute/httproute.yaml.tera",
        include_str!("templates/gateway-httproute/httproute.yaml.tera"),
    ),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Template name for output `file` of addon `addon`.
pub fn template_name_for(addon: &str, file: &str) -> String {
    format!("{addon}/{}.tera", file.replace('\\', "/"))
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(addon: &str, dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.is_dir() {
        return Err(RenderError::TemplateDirNotFound { path: dir.to_path_buf() });
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = format!("{addon}/{}", normalize_template_name(rel));
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        tracing::debug!("user template override: {name} ({})", path.display());
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(addon: &str, user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert((*name).to_string(), (*content).to_string());
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(addon, dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for one addon, with optional user overrides.
pub struct TemplateEngine {
    addon: String,
    tera: Tera,
}

impl TemplateEngine {
    /// Load embedded templates plus any overrides for `addon` found in
    /// `user_template_dir`.
    pub fn new(addon: &str, user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(addon, user_template_dir)?;
        Ok(TemplateEngine {
            addon: addon.to_string(),
            tera,
        })
    }

    /// Whether a template named `name` is loaded.
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render every output file declared by `config`, in declaration order.
    ///
    /// Returns `Vec<(relative_file, rendered_content)>`.
    pub fn render(&self, config: &DraftConfig) -> Result<Vec<(String, String)>, RenderError> {
        let tera_ctx = TemplateContext::from_config(config).to_tera_context()?;
        let mut results = Vec::with_capacity(config.files.len());
        for file in &config.files {
            let name = template_name_for(&self.addon, file);
            if !self.has_template(&name) {
                return Err(RenderError::MissingTemplate { name });
            }
            let content = self.tera.render(&name, &tera_ctx)?;
            results.push((file.clone(), content));
        }
        Ok(results)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rigger_core::registry;
    use tempfile::TempDir;

    fn resolved(name: &str, host_var: &str) -> DraftConfig {
        let mut cfg = registry::load(name).unwrap();
        let defaults: Vec<(String, String)> = cfg
            .variables()
            .iter()
            .filter_map(|v| v.default_value().map(|d| (v.name.clone(), d.to_string())))
            .collect();
        for (n, d) in defaults {
            cfg.set_variable(&n, d);
        }
        cfg.set_variable(host_var, "myapp.example.com");
        cfg
    }

    #[test]
    fn every_declared_file_has_an_embedded_template() {
        for addon in registry::canonical_names() {
            let cfg = registry::load(addon).unwrap();
            let engine = TemplateEngine::new(addon, None).unwrap();
            for file in &cfg.files {
                assert!(engine.has_template(&template_name_for(addon, file)), "{addon}/{file}");
            }
        }
    }

    #[test]
    fn ingress_renders_host_and_service() {
        let cfg = resolved("app-routing-ingress", "ingress-host");
        let engine = TemplateEngine::new("app-routing-ingress", None).unwrap();
        let out = engine.render(&cfg).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].0, "ingress.yaml");
        assert!(out[0].1.contains("host: myapp.example.com"));
        assert!(out[0].1.contains("number: 80"));
        assert!(!out[0].1.contains("use-osm-mtls"));
    }

    #[test]
    fn ingress_osm_block_follows_flag() {
        let mut cfg = resolved("app-routing-ingress", "ingress-host");
        cfg.set_variable("ingress-use-osm-mtls", "true");
        let engine = TemplateEngine::new("app-routing-ingress", None).unwrap();
        let out = engine.render(&cfg).unwrap();
        assert!(out[0].1.contains("kubernetes.azure.com/use-osm-mtls: \"true\""));
        assert!(out[0].1.contains("default.default.cluster.local"));
    }

    #[test]
    fn user_override_replaces_embedded_template() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("ingress.yaml.tera"),
            "custom {{ variables[\"ingress-host\"] }}",
        )
        .unwrap();
        std::fs::write(dir.path().join("README.md"), "ignored").unwrap();
        let cfg = resolved("app-routing-ingress", "ingress-host");
        let engine = TemplateEngine::new("app-routing-ingress", Some(dir.path())).unwrap();
        let out = engine.render(&cfg).unwrap();
        assert_eq!(out[0].1, "custom myapp.example.com");
    }

    #[test]
    fn missing_override_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");
        let err = TemplateEngine::new("gateway-httproute", Some(&missing))
            .err()
            .expect("absent dir must be rejected");
        match err {
            RenderError::TemplateDirNotFound { path } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn override_dir_that_is_a_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("templates");
        std::fs::write(&file, "not a directory").unwrap();
        let err = TemplateEngine::new("app-routing-ingress", Some(&file)).err();
        assert!(matches!(err, Some(RenderError::TemplateDirNotFound { .. })));
    }

    #[test]
    fn undeclared_template_is_reported() {
        let mut cfg = resolved("gateway-httproute", "route-host");
        cfg.files.push("extra.yaml".to_string());
        let engine = TemplateEngine::new("gateway-httproute", None).unwrap();
        let err = engine.render(&cfg).unwrap_err();
        assert!(matches!(err, RenderError::MissingTemplate { .. }), "got: {err}");
    }

    #[test]
    fn no_crlf_in_any_rendered_output() {
        for addon in registry::canonical_names() {
            let host = if addon == "gateway-httproute" { "route-host" } else { "ingress-host" };
            let cfg = resolved(addon, host);
            let engine = TemplateEngine::new(addon, None).unwrap();
            for (file, content) in engine.render(&cfg).unwrap() {
                assert!(!content.contains('\r'), "{addon}/{file} contains CR");
            }
        }
    }
}
