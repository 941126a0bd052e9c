//! Rigger — addon manifest generator CLI.
//!
//! # Usage
//!
//! ```text
//! rigger update [-d <dir>] [-a <addon>] [--variable name=value]... [--template-dir <dir>]
//! rigger addons [--json]
//!
//! global: [--dry-run [--dry-run-file <file>]] [--non-interactive] [-v]
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use commands::{addons::AddonsArgs, update::UpdateArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "rigger",
    version,
    about = "Generate addon manifests (ingress, routes) into a project",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Record intended file writes and variable values as JSON instead of writing files.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Also save the dry-run JSON to this file.
    #[arg(long, global = true, value_name = "FILE", requires = "dry_run")]
    pub dry_run_file: Option<PathBuf>,

    /// Never prompt; unset variables fall back to their defaults.
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Enable debug logging.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add an addon to your application's manifests so it can receive external requests.
    Update(UpdateArgs),

    /// List available addons and their aliases.
    Addons(AddonsArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let result = match cli.command {
        Commands::Update(args) => args.run(&cli.global),
        Commands::Addons(args) => args.run(),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
