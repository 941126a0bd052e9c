//! `rigger addons` — list the addons the registry knows about.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use rigger_core::registry;

/// Arguments for `rigger addons`.
#[derive(Args, Debug)]
pub struct AddonsArgs {
    /// Print machine-readable JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct AddonJson {
    name: String,
    #[serde(rename = "type")]
    template_type: String,
    aliases: Vec<String>,
    variables: Vec<String>,
    files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Tabled)]
struct AddonRow {
    #[tabled(rename = "addon")]
    name: String,
    #[tabled(rename = "aliases")]
    aliases: String,
    #[tabled(rename = "files")]
    files: String,
    #[tabled(rename = "description")]
    description: String,
}

impl AddonsArgs {
    pub fn run(self) -> Result<()> {
        let addons = collect()?;
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&addons).context("failed to serialize addons JSON")?
            );
            return Ok(());
        }

        let rows: Vec<AddonRow> = addons
            .into_iter()
            .map(|a| AddonRow {
                name: a.name,
                aliases: if a.aliases.is_empty() { "-".to_string() } else { a.aliases.join(", ") },
                files: a.files.join(", "),
                description: a.description.unwrap_or_default(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!("default: {}", registry::DEFAULT_ADDON.bold());
        Ok(())
    }
}

fn collect() -> Result<Vec<AddonJson>> {
    registry::canonical_names()
        .into_iter()
        .map(|name| {
            let config = registry::load(name)
                .with_context(|| format!("failed to load addon '{name}'"))?;
            Ok(AddonJson {
                name: name.to_string(),
                template_type: config.template_type.to_string(),
                aliases: registry::aliases_for(name).into_iter().map(str::to_string).collect(),
                variables: config.variable_names().into_iter().map(str::to_string).collect(),
                files: config.files.clone(),
                description: config.description.clone(),
            })
        })
        .collect()
}
