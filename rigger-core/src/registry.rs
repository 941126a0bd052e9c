//! Addon template registry.
//!
//! # Lookup
//!
//! ```text
//! identifier ──alias table──▶ canonical name ──ADDONS──▶ draft.yaml ──▶ DraftConfig
//! ```
//!
//! Aliases are resolved before lookup; the addon table is keyed by canonical
//! name only. Definitions are embedded at compile time, so loading is a pure
//! parse with no filesystem access.
//!
//! # User overrides
//!
//! File templates for an addon may be overridden from
//! `<home>/.rigger/templates/<canonical-name>/`. As elsewhere, every
//! home-derived helper has a `fn_at(home: &Path, …)` form for tests.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::RegistryError;
use crate::types::{DraftConfig, TemplateName};

// ---------------------------------------------------------------------------
// 1. Static tables
// ---------------------------------------------------------------------------

/// Addon used when the caller does not name one.
pub const DEFAULT_ADDON: &str = "app-routing-ingress";

/// Historical and alternate names, as `(alias, canonical)`.
pub const ALIASES: &[(&str, &str)] = &[
    ("webapp_routing", "app-routing-ingress"),
    ("app-routing", "app-routing-ingress"),
    ("httproute", "gateway-httproute"),
];

struct AddonEntry {
    name: &'static str,
    definition: &'static str,
}

const ADDONS: &[AddonEntry] = &[
    AddonEntry {
        name: "app-routing-ingress",
        definition: include_str!("addons/app-routing-ingress/draft.yaml"),
    },
    AddonEntry {
        name: "gateway-httproute",
        definition: include_str!("addons/gateway-httproute/draft.yaml"),
    },
];

// ---------------------------------------------------------------------------
// 2. Resolution
// ---------------------------------------------------------------------------

/// Map an alias to its canonical name. Any other identifier maps to itself.
pub fn resolve_alias(identifier: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == identifier)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(identifier)
}

/// Resolve `identifier` to a registered canonical name.
///
/// Returns `None` if the name is unknown after alias resolution.
pub fn resolve(identifier: &str) -> Option<TemplateName> {
    let canonical = resolve_alias(identifier);
    find_entry(canonical).map(|entry| TemplateName::from(entry.name))
}

/// True for every canonical name and every alias that maps to one.
pub fn is_valid_template(identifier: &str) -> bool {
    resolve(identifier).is_some()
}

/// Canonical addon names in registration order.
pub fn canonical_names() -> Vec<&'static str> {
    ADDONS.iter().map(|entry| entry.name).collect()
}

/// Aliases that resolve to `canonical`, in table order.
pub fn aliases_for(canonical: &str) -> Vec<&'static str> {
    ALIASES
        .iter()
        .filter(|(_, target)| *target == canonical)
        .map(|(alias, _)| *alias)
        .collect()
}

fn find_entry(canonical: &str) -> Option<&'static AddonEntry> {
    ADDONS.iter().find(|entry| entry.name == canonical)
}

// ---------------------------------------------------------------------------
// 3. Load
// ---------------------------------------------------------------------------

/// Load a fresh [`DraftConfig`] for `identifier` (canonical name or alias).
///
/// Returns `RegistryError::NotFound` naming the identifier if unknown,
/// `RegistryError::InvalidConfig` if the entry carries no configuration.
pub fn load(identifier: &str) -> Result<DraftConfig, RegistryError> {
    let canonical = resolve_alias(identifier);
    let entry = find_entry(canonical).ok_or_else(|| RegistryError::NotFound {
        name: identifier.to_string(),
    })?;
    parse_definition(entry.name, entry.definition)
}

/// Parse an addon definition document registered under `name`.
pub(crate) fn parse_definition(name: &str, source: &str) -> Result<DraftConfig, RegistryError> {
    let invalid = |reason: String| RegistryError::InvalidConfig {
        name: name.to_string(),
        reason,
    };

    if source.trim().is_empty() {
        return Err(invalid("configuration is nil".to_string()));
    }
    let value: serde_yaml::Value =
        serde_yaml::from_str(source).map_err(|e| RegistryError::Parse {
            name: name.to_string(),
            source: e,
        })?;
    if value.is_null() {
        return Err(invalid("configuration is nil".to_string()));
    }
    let config: DraftConfig = serde_yaml::from_value(value).map_err(|e| RegistryError::Parse {
        name: name.to_string(),
        source: e,
    })?;

    if config.template_name.0 != name {
        return Err(invalid(format!(
            "definition declares templateName '{}'",
            config.template_name
        )));
    }
    let mut seen = HashSet::new();
    for var in &config.variables {
        if !seen.insert(var.name.as_str()) {
            return Err(invalid(format!("duplicate variable '{}'", var.name)));
        }
    }
    Ok(config)
}

// ---------------------------------------------------------------------------
// 4. User template directory
// ---------------------------------------------------------------------------

/// `<home>/.rigger/templates/<canonical>/` — pure, no I/O.
pub fn user_template_dir_at(home: &Path, canonical: &TemplateName) -> PathBuf {
    home.join(".rigger").join("templates").join(&canonical.0)
}

/// `user_template_dir_at` convenience wrapper.
pub fn user_template_dir(canonical: &TemplateName) -> Result<PathBuf, RegistryError> {
    Ok(user_template_dir_at(&home()?, canonical))
}

fn home() -> Result<PathBuf, RegistryError> {
    dirs::home_dir().ok_or(RegistryError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TemplateType;

    #[test]
    fn every_alias_targets_a_registered_addon() {
        for (alias, canonical) in ALIASES {
            assert!(
                find_entry(canonical).is_some(),
                "alias '{alias}' points at unregistered '{canonical}'"
            );
            assert!(find_entry(alias).is_none(), "alias '{alias}' shadows an addon");
        }
    }

    #[test]
    fn every_embedded_definition_parses() {
        for entry in ADDONS {
            let cfg = parse_definition(entry.name, entry.definition)
                .unwrap_or_else(|e| panic!("{}: {e}", entry.name));
            assert!(!cfg.files.is_empty(), "{} declares no files", entry.name);
        }
    }

    #[test]
    fn empty_definition_is_invalid_config() {
        let err = parse_definition("broken", "   \n").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidConfig { .. }));
        assert!(err.to_string().contains("configuration is nil"));
    }

    #[test]
    fn null_definition_is_invalid_config() {
        let err = parse_definition("broken", "~\n").unwrap_err();
        assert!(err.to_string().contains("configuration is nil"));
    }

    #[test]
    fn mismatched_template_name_is_invalid_config() {
        let err = parse_definition("a", "templateName: b\n").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidConfig { .. }), "got: {err}");
    }

    #[test]
    fn non_manifest_type_is_rejected() {
        let err = parse_definition("a", "templateName: a\ntype: dockerfile\n").unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }), "got: {err}");
    }

    #[test]
    fn missing_type_defaults_to_manifest() {
        let cfg = parse_definition("a", "templateName: a\n").unwrap();
        assert_eq!(cfg.template_type, TemplateType::Manifest);
    }

    #[test]
    fn duplicate_variable_is_invalid_config() {
        let src = "templateName: a\nvariables:\n  - name: x\n  - name: x\n";
        let err = parse_definition("a", src).unwrap_err();
        assert!(err.to_string().contains("duplicate variable 'x'"));
    }

    #[test]
    fn user_template_dir_is_correct() {
        let dir = user_template_dir_at(Path::new("/home/u"), &TemplateName::from("gateway-httproute"));
        assert!(dir.ends_with(".rigger/templates/gateway-httproute"));
    }

    #[test]
    fn home_not_found_error_message() {
        assert!(RegistryError::HomeNotFound.to_string().contains("home directory"));
    }
}
