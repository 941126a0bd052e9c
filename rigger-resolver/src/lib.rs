//! # rigger-resolver
//!
//! Binds final values into an addon's [`rigger_core::DraftConfig`]:
//! flag overrides first, then interactive prompts, then declared defaults.

pub mod error;
pub mod prompt;
pub mod resolver;

pub use error::ResolveError;
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
pub use resolver::Resolver;
