//! `rigger update` — add an addon's manifests to a project.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use rigger_core::{registry, VariableOverrideMap};
use rigger_detector::addon_dest_path;
use rigger_renderer::get_template;
use rigger_resolver::{Resolver, TerminalPrompter};
use rigger_writer::{DryRunRecorder, LocalFsWriter, TemplateWriter};

use crate::GlobalArgs;

/// Arguments for `rigger update`.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Project directory; addon files go into its detected deployment layout.
    #[arg(long = "destination", short = 'd', default_value = ".", value_name = "DIR")]
    pub dest: PathBuf,

    /// Addon to add (canonical name or alias). Defaults to app-routing-ingress.
    #[arg(long, short = 'a')]
    pub addon: Option<String>,

    /// Bind a template variable, skipping its prompt. Repeatable.
    #[arg(long = "variable", value_name = "NAME=VALUE")]
    pub variables: Vec<String>,

    /// Directory of `.tera` files replacing the addon's built-in templates.
    #[arg(long = "template-dir", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

impl UpdateArgs {
    pub fn run(self, global: &GlobalArgs) -> Result<()> {
        let overrides =
            VariableOverrideMap::parse(&self.variables).context("invalid --variable flag")?;

        let dest = addon_dest_path(&self.dest).with_context(|| {
            format!("error getting addon destination path for '{}'", self.dest.display())
        })?;
        tracing::debug!("addon destination: {}", dest.display());

        let addon = self.addon.as_deref().unwrap_or(registry::DEFAULT_ADDON);
        let template_dir = self.template_dir.clone().or_else(|| user_template_dir(addon));

        let mut recorder = global.dry_run.then(DryRunRecorder::new);
        let mut local = LocalFsWriter::new();
        let writer: &mut dyn TemplateWriter = match recorder.as_mut() {
            Some(recorder) => recorder as &mut dyn TemplateWriter,
            None => &mut local,
        };

        let mut handle = get_template(addon, template_dir.as_deref(), &dest, writer)
            .with_context(|| format!("error getting addon template '{addon}'"))?;
        let template_name = handle.config().template_name.clone();

        let mut terminal = TerminalPrompter::new();
        let mut resolver = if !global.non_interactive && terminal.is_attended() {
            Resolver::new(Some(&mut terminal))
        } else {
            Resolver::non_interactive()
        };
        resolver
            .resolve(handle.config_mut(), &overrides)
            .with_context(|| format!("error resolving variables for '{template_name}'"))?;

        handle.record_variables();
        let written = handle
            .generate()
            .with_context(|| format!("error generating '{template_name}' files"))?;
        drop(handle);

        match recorder {
            Some(recorder) => emit_dry_run(recorder, global.dry_run_file.as_deref()),
            None => {
                print_written(&template_name.0, &written);
                Ok(())
            }
        }
    }
}

/// `~/.rigger/templates/<addon>` when it exists. Unknown addons are left for
/// `get_template` to report.
fn user_template_dir(addon: &str) -> Option<PathBuf> {
    let canonical = registry::resolve(addon)?;
    match registry::user_template_dir(&canonical) {
        Ok(dir) if dir.is_dir() => {
            tracing::debug!("using template overrides from {}", dir.display());
            Some(dir)
        }
        Ok(_) => None,
        Err(err) => {
            tracing::debug!("skipping user template overrides: {err}");
            None
        }
    }
}

/// Print the dry-run log, then save it if asked. The log reaches stdout even
/// when saving fails.
fn emit_dry_run(recorder: DryRunRecorder, file: Option<&Path>) -> Result<()> {
    let info = recorder.into_info();
    let text = info.to_pretty_json().context("failed to serialize dry run info")?;
    println!("{text}");
    if let Some(path) = file {
        tracing::info!("writing dry run info to {}", path.display());
        info.persist(path)
            .with_context(|| format!("failed to write dry run info to '{}'", path.display()))?;
    }
    Ok(())
}

fn print_written(addon: &str, written: &[PathBuf]) {
    println!(
        "{} '{addon}' added ({} files written)",
        "✓".green(),
        written.len()
    );
    for path in written {
        println!("  ✎  {}", path.display());
    }
}
