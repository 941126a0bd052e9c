//! Interactive prompt collaborators.

use std::collections::HashMap;

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use rigger_core::Variable;

use crate::error::ResolveError;

/// Asks the user for one variable's value.
///
/// An empty answer means "use the default".
pub trait Prompter {
    fn prompt(&mut self, variable: &Variable) -> Result<String, ResolveError>;
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

/// Dialoguer-backed prompter. Draws on stderr so stdout stays clean for
/// machine-readable output.
pub struct TerminalPrompter {
    term: Term,
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: ColorfulTheme {
                prompt_prefix: style("".to_string()),
                ..ColorfulTheme::default()
            },
        }
    }

    /// Whether a user is attached to the prompt terminal.
    pub fn is_attended(&self) -> bool {
        self.term.is_term()
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn question(variable: &Variable) -> String {
    let mut q = match &variable.description {
        Some(desc) => format!("{} ({desc})", variable.name),
        None => variable.name.clone(),
    };
    match variable.default_value() {
        Some(default) => q.push_str(&format!(" [default: {default}]")),
        None if variable.required => q.push_str(" [required]"),
        None => {}
    }
    q
}

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, variable: &Variable) -> Result<String, ResolveError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(question(variable))
            .allow_empty(true)
            .interact_on(&self.term)
            .map_err(|e| ResolveError::Prompt {
                name: variable.name.clone(),
                message: e.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Scripted
// ---------------------------------------------------------------------------

/// Prompter answering from a fixed table; unlisted variables get `""`.
///
/// Records every variable it was asked about, in order.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: HashMap<String, String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, name: &str, value: &str) -> Self {
        self.answers.insert(name.to_string(), value.to_string());
        self
    }

    /// Names prompted so far, in prompt order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, variable: &Variable) -> Result<String, ResolveError> {
        self.asked.push(variable.name.clone());
        Ok(self.answers.get(&variable.name).cloned().unwrap_or_default())
    }
}
