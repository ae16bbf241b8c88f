//! Subcommand implementations.

mod audit;
mod demo;
mod inspect;
mod reset;

pub use audit::Audit;
pub use demo::Demo;
pub use inspect::Inspect;
pub use reset::Reset;

use anyhow::{Context, Result};
use console::style;
use world_core::{GameState, audit_state};
use world_runtime::{FileStateRepository, RuntimeConfig, render_world, state_summary};

fn open_repository(config: &RuntimeConfig) -> Result<FileStateRepository> {
    FileStateRepository::new(&config.save_dir).with_context(|| {
        format!(
            "Failed to open save directory: {}",
            config.save_dir.display()
        )
    })
}

fn print_state(state: &GameState, map_size: usize) {
    println!("{}", state_summary(state));
    println!();
    println!("{}", style("--- WORLD MAP ---").bold().cyan());
    println!("{}", render_world(state, map_size));
}

/// Prints audit findings and returns how many there were.
fn print_audit(state: &GameState) -> usize {
    let findings = audit_state(state);
    if findings.is_empty() {
        println!("{}", style("State is consistent").green());
    } else {
        println!("{}", style("Consistency findings:").bold().yellow());
        for finding in &findings {
            println!("  {} {}", style("!").yellow(), finding);
        }
    }
    findings.len()
}
