//! Deployment layout detection for `rigger-detector`.
//!
//! `addon_dest_path(dir)` inspects indicator files under a project directory
//! and returns the subdirectory addon manifests belong in. Checks are ordered
//! by specificity: a Helm chart wins over a kustomize tree, which wins over
//! plain manifests. Detection only reads; it never creates directories.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// How a project deploys its Kubernetes resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployType {
    Helm,
    Kustomize,
    Manifests,
}

impl DeployType {
    /// Addon destination, relative to the project directory.
    pub fn addon_subpath(&self) -> PathBuf {
        match self {
            DeployType::Helm => Path::new("charts").join("templates"),
            DeployType::Kustomize => Path::new("overlays").join("production"),
            DeployType::Manifests => PathBuf::from("manifests"),
        }
    }
}

impl fmt::Display for DeployType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployType::Helm => write!(f, "helm"),
            DeployType::Kustomize => write!(f, "kustomize"),
            DeployType::Manifests => write!(f, "manifests"),
        }
    }
}

/// Errors from layout detection.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("destination '{path}' exists but is not a directory")]
    NotADirectory { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Detect the deployment layout of the project at `dir`.
///
/// A missing `dir` is treated as a fresh project and yields
/// [`DeployType::Manifests`].
pub fn detect_deploy_type(dir: &Path) -> Result<DeployType, DetectError> {
    if dir.exists() && !dir.is_dir() {
        return Err(DetectError::NotADirectory { path: dir.to_path_buf() });
    }
    if is_helm(dir) { return Ok(DeployType::Helm); }
    if is_kustomize(dir) { return Ok(DeployType::Kustomize); }
    Ok(DeployType::Manifests)
}

/// Convert a user-supplied project directory into the addon destination.
pub fn addon_dest_path(dir: &Path) -> Result<PathBuf, DetectError> {
    let deploy_type = detect_deploy_type(dir)?;
    Ok(dir.join(deploy_type.addon_subpath()))
}

// ---------------------------------------------------------------------------
// Layout detectors
// ---------------------------------------------------------------------------

fn is_helm(dir: &Path) -> bool {
    dir.join("charts").join("Chart.yaml").is_file()
}

fn is_kustomize(dir: &Path) -> bool {
    dir.join("base").join("kustomization.yaml").is_file() || dir.join("overlays").is_dir()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subpaths_are_correct() {
        assert_eq!(DeployType::Helm.addon_subpath(), PathBuf::from("charts/templates"));
        assert_eq!(DeployType::Kustomize.addon_subpath(), PathBuf::from("overlays/production"));
        assert_eq!(DeployType::Manifests.addon_subpath(), PathBuf::from("manifests"));
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(DeployType::Kustomize.to_string(), "kustomize");
    }
}
