//! Three-tier variable resolution.
//!
//! Per variable, the first tier that yields a non-empty value wins:
//!
//! 1. flag override (`--variable name=value`)
//! 2. interactive prompt (skipped when non-interactive)
//! 3. declared default
//!
//! A required variable left empty after tier 3 fails resolution.

use rigger_core::{DraftConfig, VariableOverrideMap};

use crate::error::ResolveError;
use crate::prompt::Prompter;

/// Binds values into a [`DraftConfig`]. Holds no state beyond its prompter.
pub struct Resolver<'p> {
    prompter: Option<&'p mut dyn Prompter>,
}

impl<'p> Resolver<'p> {
    /// `None` disables tier 2.
    pub fn new(prompter: Option<&'p mut dyn Prompter>) -> Self {
        Self { prompter }
    }

    pub fn non_interactive() -> Self {
        Self { prompter: None }
    }

    pub fn is_interactive(&self) -> bool {
        self.prompter.is_some()
    }

    /// Tier 1. Returns override keys that match no declared variable; these
    /// are ignored.
    pub fn bind(&self, config: &mut DraftConfig, overrides: &VariableOverrideMap) -> Vec<String> {
        let unmatched = config.apply_overrides(overrides);
        for name in &unmatched {
            tracing::warn!(
                "ignoring variable override '{name}': {} declares no such variable",
                config.template_name
            );
        }
        unmatched
    }

    /// Tiers 2 and 3 for every variable still unset, then validation.
    pub fn prompt_missing(&mut self, config: &mut DraftConfig) -> Result<(), ResolveError> {
        for var in config.variables.iter_mut() {
            if var.is_set() {
                tracing::debug!("{}: bound by override", var.name);
                continue;
            }
            if let Some(prompter) = self.prompter.as_deref_mut() {
                let answer = prompter.prompt(var)?;
                if !answer.is_empty() {
                    tracing::debug!("{}: bound by prompt", var.name);
                    var.value = answer;
                    continue;
                }
            }
            if let Some(default) = var.default_value().map(str::to_string) {
                tracing::debug!("{}: bound to default", var.name);
                var.value = default;
            }
        }
        config.validate()?;
        Ok(())
    }

    /// [`bind`](Self::bind) followed by [`prompt_missing`](Self::prompt_missing).
    pub fn resolve(
        &mut self,
        config: &mut DraftConfig,
        overrides: &VariableOverrideMap,
    ) -> Result<Vec<String>, ResolveError> {
        let unmatched = self.bind(config, overrides);
        self.prompt_missing(config)?;
        Ok(unmatched)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
