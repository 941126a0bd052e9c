//! Domain types for addon definitions and variable binding.
//!
//! A [`DraftConfig`] is parsed from an embedded `draft.yaml` document and then
//! mutated in place as variables are bound. All types round-trip through
//! serde + serde_yaml using the camelCase keys of the definition format.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// The canonical (alias-free) name of an addon template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateName(pub String);

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TemplateName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TemplateName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for TemplateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The kind of artefact an addon template produces. Every addon renders
/// Kubernetes manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    #[default]
    Manifest,
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateType::Manifest => write!(f, "manifest"),
        }
    }
}

// ---------------------------------------------------------------------------
// Variable
// ---------------------------------------------------------------------------

/// A single named template variable.
///
/// An empty `value` means "unset".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Variable {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Variable {
    /// Whether a non-empty value has been bound.
    pub fn is_set(&self) -> bool {
        !self.value.is_empty()
    }

    /// The bound value, or `None` while unset.
    pub fn value(&self) -> Option<&str> {
        if self.is_set() {
            Some(&self.value)
        } else {
            None
        }
    }

    /// The declared default, treating an empty string as absent.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref().filter(|d| !d.is_empty())
    }
}

// ---------------------------------------------------------------------------
// DraftConfig
// ---------------------------------------------------------------------------

/// The configuration object of one addon template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftConfig {
    pub template_name: TemplateName,
    #[serde(rename = "type", default)]
    pub template_type: TemplateType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub variables: Vec<Variable>,
    /// Output files, relative to the destination directory. Each is rendered
    /// from `<templateName>/<file>.tera`.
    #[serde(default)]
    pub files: Vec<String>,
}

impl DraftConfig {
    /// Declared variables in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Declared variable names in declaration order.
    pub fn variable_names(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.name.as_str()).collect()
    }

    /// Look up a variable by name.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Bound value of `name`, if declared and set.
    pub fn variable_value(&self, name: &str) -> Option<&str> {
        self.variable(name).and_then(Variable::value)
    }

    /// Overwrite the value of `name`. Returns `false` if no such variable exists.
    pub fn set_variable(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.variables.iter_mut().find(|v| v.name == name) {
            Some(var) => {
                var.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Apply flag overrides to declared variables.
    ///
    /// Every variable named in `overrides` takes the override value, replacing
    /// any prior value. Keys matching no declared variable are left alone and
    /// returned so the caller can report them.
    pub fn apply_overrides(&mut self, overrides: &VariableOverrideMap) -> Vec<String> {
        let mut unmatched = Vec::new();
        for (name, value) in overrides.iter() {
            if !self.set_variable(name, value) {
                unmatched.push(name.to_string());
            }
        }
        unmatched
    }

    /// Ensure every required variable carries a non-empty value.
    ///
    /// Reports the first offender in declaration order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.variables.iter().find(|v| v.required && !v.is_set()) {
            Some(var) => Err(ValidationError::MissingRequired {
                name: var.name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Bound values keyed by variable name. Unset variables map to `""`.
    pub fn variable_map(&self) -> BTreeMap<String, String> {
        self.variables
            .iter()
            .map(|v| (v.name.clone(), v.value.clone()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// VariableOverrideMap
// ---------------------------------------------------------------------------

/// Externally supplied `name → value` bindings, usually from `--variable` flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariableOverrideMap(BTreeMap<String, String>);

impl VariableOverrideMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `name=value` tokens.
    ///
    /// Splits on the first `=`, so values may themselves contain `=` and may be
    /// empty. A later token for the same name replaces an earlier one.
    pub fn parse<I, S>(tokens: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for token in tokens {
            let token = token.as_ref();
            let Some((name, value)) = token.split_once('=') else {
                return Err(ValidationError::MalformedOverride {
                    token: token.to_string(),
                });
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(ValidationError::EmptyOverrideKey {
                    token: token.to_string(),
                });
            }
            map.insert(name, value);
        }
        Ok(map)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableOverrideMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
