//! World engine command-line client.
//!
//! Composition root: reads configuration, installs logging, and hands one
//! engine at a time to the runtime collaborators.
//!
//! ```bash
//! world demo --difficulty hard
//! world inspect --slot game_state --format json
//! world audit
//! ```

mod commands;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use commands::{Audit, Demo, Inspect, Reset};
use console::style;
use world_runtime::{RepositoryError, RuntimeConfig};

/// Inspect and drive the world state engine
#[derive(Parser)]
#[command(name = "world")]
#[command(about = "World state engine tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Save directory (overrides WORLD_SAVE_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Play a scripted session, save it, reset and reload
    Demo(Demo),

    /// Load a saved slot and print it
    Inspect(Inspect),

    /// Report consistency problems in a saved slot
    Audit(Audit),

    /// Overwrite a slot with the starting world
    Reset(Reset),
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{} {:#}", style("error:").red().bold(), error);
            if let Some(hint) = storage_hint(&error) {
                eprintln!("{} {}", style("hint:").cyan(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    // Load .env file if it exists (for WORLD_* variables)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = RuntimeConfig::from_env();
    if let Some(dir) = cli.save_dir {
        config.save_dir = dir;
    }

    logging::setup_logging(config.log_dir.as_deref())?;
    tracing::debug!(save_dir = %config.save_dir.display(), "configuration loaded");

    match cli.command {
        Command::Demo(cmd) => cmd.execute(&config),
        Command::Inspect(cmd) => cmd.execute(&config),
        Command::Audit(cmd) => cmd.execute(&config),
        Command::Reset(cmd) => cmd.execute(&config),
    }
}

/// Storage failures get a pointer at the save directory settings.
fn storage_hint(error: &anyhow::Error) -> Option<&'static str> {
    let storage = error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<RepositoryError>())
        .any(RepositoryError::is_io);
    storage.then_some("check WORLD_SAVE_DIR or pass --save-dir with a writable directory")
}
